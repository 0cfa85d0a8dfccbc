use anchor_lang::prelude::*;

use crate::{constants::VAULT_SEED, errors::VaultError};

/// Derive the vault token account address and its canonical bump.
///
/// The derivation is a pure function of the fixed seed and the program id:
/// recomputing it always yields the same off-curve address, so the vault can
/// never collide with a user-controlled account. If no valid bump exists in
/// the search range the derivation fails with `AddressSpaceExhausted`;
/// callers must treat that as fatal and unretryable.
pub fn find_vault_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VAULT_SEED], program_id)
        .ok_or_else(|| error!(VaultError::AddressSpaceExhausted))
}
