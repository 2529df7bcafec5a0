use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{POOL_SEED, POOL_SIGNER_SEED, REWARD_VAULT_SEED, STAKING_VAULT_SEED};
use crate::engine::{self, PoolConfig};
use crate::events::PoolInitialized;
use crate::state::Pool;

/// Initialize a new reward pool
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `nonce` - Bump of the pool signer PDA that owns both vaults
/// * `reward_rate` - Reward base units emitted per second
///
/// # Accounts
/// * `authority` - Creator of the pool (signer, payer)
/// * `pool` - Pool PDA; may already exist, but only an uninitialized one is accepted
/// * `pool_signer` - PDA authority of both vaults
/// * `staking_vault` / `reward_vault` - PDA token accounts created here
///
#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Pool::SIZE,
        seeds = [POOL_SEED, staking_mint.key().as_ref(), reward_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: PDA used only as the vaults' signing authority, holds no data
    #[account(
        seeds = [POOL_SIGNER_SEED, pool.key().as_ref()],
        bump
    )]
    pub pool_signer: UncheckedAccount<'info>,

    pub staking_mint: Account<'info, Mint>,

    pub reward_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STAKING_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = pool_signer
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = pool_signer
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler_initialize_pool(
    ctx: Context<InitializePool>,
    nonce: u8,
    reward_rate: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let config = PoolConfig {
        authority: ctx.accounts.authority.key(),
        staking_mint: ctx.accounts.staking_mint.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        staking_vault: ctx.accounts.staking_vault.key(),
        reward_vault: ctx.accounts.reward_vault.key(),
        reward_rate,
        nonce,
        signer_bump: ctx.bumps.pool_signer,
        bump: ctx.bumps.pool,
    };

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    engine::initialize_pool(pool, config, now)?;

    msg!(
        "Reward pool initialized: staking_mint={}, reward_mint={}, reward_rate={}/s",
        pool.staking_mint,
        pool.reward_mint,
        pool.reward_rate
    );

    emit!(PoolInitialized {
        pool: pool_key,
        authority: pool.authority,
        staking_mint: pool.staking_mint,
        reward_mint: pool.reward_mint,
        reward_rate,
        timestamp: now,
    });

    Ok(())
}
