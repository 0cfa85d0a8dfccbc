use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*};

/// Withdraw tokens from the vault to the user's account
///
/// The debit leg is authorized by the program presenting the vault's
/// derivation seeds for this single CPI. No external signature can satisfy
/// the vault's authority: the vault token account is its own owner, and only
/// this program can produce the seeds behind that address.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// User receiving tokens
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault token account (source)
    /// Security: address validated by seeds
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// User's token account (destination)
    /// Security: must match the vault mint and be owned by the signer
    #[account(
        mut,
        constraint = user_token_account.mint == vault_token_account.mint @ VaultError::AssetMismatch,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    // CHECKS: amount and vault balance; fail rather than underflow
    require!(amount > 0, VaultError::InvalidAmount);
    require!(
        ctx.accounts.vault_token_account.amount >= amount,
        VaultError::InsufficientVaultBalance
    );

    // INTERACTIONS: the vault authorizes its own debit; the seeds are scoped
    // to this CPI and never stored
    let bump_seed = [ctx.bumps.vault_token_account];
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &bump_seed];
    let signer_seeds = &[&vault_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.vault_token_account.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    ctx.accounts.vault_token_account.reload()?;

    msg!("Withdrew {} tokens from the vault", amount);

    emit!(Withdrawn {
        vault: ctx.accounts.vault_token_account.key(),
        user: ctx.accounts.user.key(),
        amount,
        vault_balance: ctx.accounts.vault_token_account.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
