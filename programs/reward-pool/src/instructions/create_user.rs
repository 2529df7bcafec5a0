use anchor_lang::prelude::*;

use crate::constants::{POOL_SEED, USER_SEED};
use crate::engine;
use crate::error::RewardPoolError;
use crate::events::UserCreated;
use crate::state::{Pool, UserStake};

/// Create the caller's stake account for a pool
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `nonce` - Bump of the user stake PDA
///
#[derive(Accounts)]
pub struct CreateUser<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = owner,
        space = UserStake::SIZE,
        seeds = [USER_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    pub system_program: Program<'info, System>,
}

pub fn handler_create_user(ctx: Context<CreateUser>, nonce: u8) -> Result<()> {
    require!(nonce == ctx.bumps.user_stake, RewardPoolError::InvalidNonce);

    let pool_key = ctx.accounts.pool.key();
    let owner = ctx.accounts.owner.key();

    engine::create_user(
        &ctx.accounts.pool,
        pool_key,
        &mut ctx.accounts.user_stake,
        owner,
        nonce,
    )?;

    msg!("Stake account created for {} in pool {}", owner, pool_key);

    emit!(UserCreated {
        pool: pool_key,
        owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
