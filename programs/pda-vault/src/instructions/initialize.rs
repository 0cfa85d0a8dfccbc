use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};
use anchor_spl::token::{self, InitializeAccount3, Mint, Token};

use crate::{
    constants::*,
    errors::*,
    events::*,
    pda,
    state::{self, VaultStatus},
};

/// Create and configure the vault token account at the derived address
///
/// Security checklist:
/// - Vault address recomputed on-chain, never trusted from the caller
/// - Idempotent: a vault already configured for the same mint is a no-op
/// - Any other occupant at the vault address is rejected
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays the rent for the vault token account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Asset mint the vault will hold; write-once
    pub asset_mint: Account<'info, Mint>,

    /// Vault token account at the derived address
    /// CHECK: validated in the handler against `pda::find_vault_address`,
    /// then created and handed to the token program
    #[account(mut)]
    pub vault_token_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let vault_info = ctx.accounts.vault_token_account.to_account_info();

    // CHECKS: the supplied vault account must be the derived address
    let (vault_address, vault_bump) = pda::find_vault_address(ctx.program_id)?;
    require_keys_eq!(vault_info.key(), vault_address, VaultError::AddressMismatch);

    let status = {
        let data = vault_info.try_borrow_data()?;
        state::classify_vault_account(vault_info.owner, &data[..], &ctx.accounts.token_program.key())
    };

    match status {
        VaultStatus::Active { mint, .. } if mint == ctx.accounts.asset_mint.key() => {
            msg!("Vault already initialized at {}", vault_address);
            return Ok(());
        }
        VaultStatus::Active { .. } | VaultStatus::Conflicting => {
            return err!(VaultError::AlreadyInitialized);
        }
        VaultStatus::Uncreated => {}
    }

    let rent = Rent::get()?;
    let lamports = rent.minimum_balance(VAULT_ACCOUNT_SIZE);
    require!(
        ctx.accounts.payer.lamports() >= lamports,
        VaultError::InsufficientFunding
    );

    // INTERACTIONS: create the account with the vault PDA co-signing its own
    // creation, then configure it as a token account that is its own authority
    let bump_seed = [vault_bump];
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &bump_seed];
    let signer_seeds = &[&vault_seeds[..]];

    let create_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        CreateAccount {
            from: ctx.accounts.payer.to_account_info(),
            to: vault_info.clone(),
        },
        signer_seeds,
    );
    system_program::create_account(
        create_ctx,
        lamports,
        VAULT_ACCOUNT_SIZE as u64,
        &ctx.accounts.token_program.key(),
    )?;

    let init_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        InitializeAccount3 {
            account: vault_info.clone(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            authority: vault_info,
        },
    );
    token::initialize_account3(init_ctx)?;

    msg!("Vault initialized at {}", vault_address);

    emit!(VaultInitialized {
        vault: vault_address,
        asset_mint: ctx.accounts.asset_mint.key(),
        payer: ctx.accounts.payer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
