// PDA Vault - keyless custody of SPL tokens under a program-derived address
// The vault token account is its own authority: no private key exists for it,
// and only this program can sign debits by presenting the derivation seeds.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("A2qBxbgjy8X9GsGbtdCCkYd1nHXV8q2rx6ygit2gi35k");

#[program]
pub mod pda_vault {
    use super::*;

    /// Create the vault token account for a given asset mint
    ///
    /// Security considerations:
    /// - Recomputes the vault address on-chain; a mismatched account is rejected
    /// - Idempotent: re-running against a matching vault is a no-op success
    /// - A conflicting occupant at the vault address is rejected
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Deposit tokens from the caller's token account into the vault
    ///
    /// Security considerations:
    /// - Validates amount and source balance before the transfer
    /// - Source account must be owned by the signer and match the vault mint
    /// - Authorized by the caller's own signature
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw tokens from the vault to the caller's token account
    ///
    /// Security considerations:
    /// - Debit authorized solely by the vault's derivation seeds
    /// - Vault balance checked before the transfer; never underflows
    /// - Destination account must be owned by the signer and match the vault mint
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }
}
