use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_SEED, POOL_SIGNER_SEED, USER_SEED};
use crate::custody::{SplCustody, TokenRoute};
use crate::engine;
use crate::error::RewardPoolError;
use crate::events::RewardsClaimed;
use crate::state::{Pool, UserStake};

/// Claim accumulated rewards
///
/// # Flow
/// 1. Advance the pool accumulator and reconcile the user
/// 2. Transfer the whole pending amount from the reward vault to the user
/// 3. Reset pending to zero
///
/// Nothing pending is a successful no-op. A reward vault that cannot cover
/// the full amount fails the instruction.
///
#[derive(Accounts)]
pub struct Claim<'info> {
    /// Owner of the stake account
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: PDA signing for the reward vault, holds no data
    #[account(
        seeds = [POOL_SIGNER_SEED, pool.key().as_ref()],
        bump = pool.nonce
    )]
    pub pool_signer: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, pool.key().as_ref(), user_stake.owner.as_ref()],
        bump = user_stake.nonce,
        constraint = user_stake.pool == pool.key() @ RewardPoolError::MismatchedUserPool
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(
        mut,
        address = pool.reward_vault @ RewardPoolError::InvalidVault
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Destination of the claimed rewards
    #[account(
        mut,
        constraint = user_reward_account.mint == pool.reward_mint @ RewardPoolError::InvalidMint,
        token::authority = owner
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler_claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.owner.key();
    let pool_key = ctx.accounts.pool.key();

    let nonce = [ctx.accounts.pool.nonce];
    let seeds: &[&[u8]] = &[POOL_SIGNER_SEED, pool_key.as_ref(), &nonce];
    let signer_seeds = &[seeds];

    let mut custody = SplCustody {
        token_program: &ctx.accounts.token_program,
        user: ctx.accounts.owner.to_account_info(),
        pool_signer: Some(ctx.accounts.pool_signer.to_account_info()),
        signer_seeds,
        staking: None,
        reward: Some(TokenRoute {
            vault: &ctx.accounts.reward_vault,
            user_account: &ctx.accounts.user_reward_account,
        }),
    };

    let payout = engine::claim(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_stake,
        &caller,
        now,
        &mut custody,
    )?;

    if payout == 0 {
        msg!("Nothing to claim");
        return Ok(());
    }

    msg!("Claimed {} reward tokens", payout);

    emit!(RewardsClaimed {
        pool: pool_key,
        owner: caller,
        amount: payout,
        timestamp: now,
    });

    Ok(())
}
