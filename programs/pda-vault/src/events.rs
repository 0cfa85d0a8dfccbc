use anchor_lang::prelude::*;

/// Event emitted when the vault token account is created
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub asset_mint: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when tokens are deposited into the vault
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

/// Event emitted when tokens are withdrawn from the vault
#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}
