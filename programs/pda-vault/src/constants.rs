// Constants for the PDA Vault program

/// Seed for the vault token account PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Size of the vault token account (SPL token account layout)
pub const VAULT_ACCOUNT_SIZE: usize = 165;
