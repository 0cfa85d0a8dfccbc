use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*};

/// Deposit tokens from the user's account into the vault
///
/// The vault is only the receiver here, so the transfer is authorized by the
/// user's own signature; no vault signing is involved.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// User depositing tokens
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault token account (destination)
    /// Security: address validated by seeds
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// User's token account (source)
    /// Security: must match the vault mint and be owned by the signer
    #[account(
        mut,
        constraint = user_token_account.mint == vault_token_account.mint @ VaultError::AssetMismatch,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // CHECKS: amount and source balance
    require!(amount > 0, VaultError::InvalidAmount);
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        VaultError::InsufficientBalance
    );

    // INTERACTIONS: transfer from user to vault, user authorizes
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.user_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    ctx.accounts.vault_token_account.reload()?;

    msg!("Deposited {} tokens into the vault", amount);

    emit!(Deposited {
        vault: ctx.accounts.vault_token_account.key(),
        user: ctx.accounts.user.key(),
        amount,
        vault_balance: ctx.accounts.vault_token_account.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
