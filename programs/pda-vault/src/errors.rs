use anchor_lang::prelude::*;

/// Custom error codes for the PDA Vault program
#[error_code]
pub enum VaultError {
    #[msg("Supplied vault account does not match the derived vault address")]
    AddressMismatch,

    #[msg("Vault address already occupied by a differently-configured account")]
    AlreadyInitialized,

    #[msg("No valid off-curve vault address exists for this program")]
    AddressSpaceExhausted,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Token account mint does not match the vault asset")]
    AssetMismatch,

    #[msg("Token account is not owned by the signer")]
    InvalidOwner,

    #[msg("Insufficient balance in the source token account")]
    InsufficientBalance,

    #[msg("Insufficient vault balance for withdrawal")]
    InsufficientVaultBalance,

    #[msg("Payer cannot fund the vault account creation")]
    InsufficientFunding,
}
