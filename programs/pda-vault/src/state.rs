use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::VAULT_ACCOUNT_SIZE;

/// What currently occupies the derived vault address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultStatus {
    /// Nothing allocated yet: a zero-data account owned by the system program
    Uncreated,

    /// An initialized SPL token account owned by the token program
    Active { mint: Pubkey, balance: u64 },

    /// Some other occupant that cannot be configured as the vault
    Conflicting,
}

/// Classify the account found at the vault address.
///
/// Initialize uses this to decide between creating the vault, accepting an
/// idempotent re-run, and rejecting a conflicting occupant. The asset mint is
/// write-once: once the vault is an `Active` token account its mint can never
/// change, so a mint comparison against `Active` is the whole re-init guard.
pub fn classify_vault_account(owner: &Pubkey, data: &[u8], token_program: &Pubkey) -> VaultStatus {
    if owner == &anchor_lang::system_program::ID && data.is_empty() {
        return VaultStatus::Uncreated;
    }

    if owner == token_program && data.len() == VAULT_ACCOUNT_SIZE {
        return match TokenAccount::try_deserialize(&mut &data[..]) {
            Ok(token_account) => VaultStatus::Active {
                mint: token_account.mint,
                balance: token_account.amount,
            },
            Err(_) => VaultStatus::Conflicting,
        };
    }

    VaultStatus::Conflicting
}
