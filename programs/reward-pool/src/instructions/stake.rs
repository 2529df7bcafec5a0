use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_SEED, USER_SEED};
use crate::custody::{SplCustody, TokenRoute};
use crate::engine;
use crate::error::RewardPoolError;
use crate::events::Staked;
use crate::state::{Pool, UserStake};

/// Stake tokens into the pool
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of staking tokens to deposit
///
/// # Flow
/// 1. Advance the pool accumulator and reconcile the user
/// 2. Transfer tokens from the user to the staking vault
/// 3. Update user balance and pool total
///
#[derive(Accounts)]
pub struct Stake<'info> {
    /// Owner of the stake account
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [USER_SEED, pool.key().as_ref(), user_stake.owner.as_ref()],
        bump = user_stake.nonce,
        constraint = user_stake.pool == pool.key() @ RewardPoolError::MismatchedUserPool
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(
        mut,
        address = pool.staking_vault @ RewardPoolError::InvalidVault
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Source of the staked tokens
    #[account(
        mut,
        constraint = user_staking_account.mint == pool.staking_mint @ RewardPoolError::InvalidMint,
        token::authority = owner
    )]
    pub user_staking_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.owner.key();
    let pool_key = ctx.accounts.pool.key();

    let mut custody = SplCustody {
        token_program: &ctx.accounts.token_program,
        user: ctx.accounts.owner.to_account_info(),
        pool_signer: None,
        signer_seeds: &[],
        staking: Some(TokenRoute {
            vault: &ctx.accounts.staking_vault,
            user_account: &ctx.accounts.user_staking_account,
        }),
        reward: None,
    };

    engine::stake(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_stake,
        &caller,
        amount,
        now,
        &mut custody,
    )?;

    let balance_staked = ctx.accounts.user_stake.balance_staked;
    let total_staked = ctx.accounts.pool.total_staked;

    msg!(
        "Staked {}. User total: {}, Pool total: {}",
        amount,
        balance_staked,
        total_staked
    );

    emit!(Staked {
        pool: pool_key,
        owner: caller,
        amount,
        balance_staked,
        total_staked,
        timestamp: now,
    });

    Ok(())
}
