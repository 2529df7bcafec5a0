// =============================================================================
// Reward Engine
// =============================================================================
// Lazy, pull-based reward accounting. Every mutating operation:
//   1. advances the pool accumulator to `now`
//   2. reconciles the acting user against the new accumulator
//   3. moves tokens through the vault custody boundary
//   4. updates total_staked / balance_staked
//
// Steps 1-4 run on copies of the records. The copies are written back only
// after every step succeeded, so a failed operation leaves both records
// exactly as they were.
// =============================================================================

use anchor_lang::prelude::*;

use crate::accumulator::RewardPerToken;
use crate::constants::MAX_REWARD_RATE;
use crate::custody::{VaultCustody, VaultKind};
use crate::error::RewardPoolError;
use crate::state::{Pool, PoolStatus, UserStake};

/// Bring `pool.reward_per_token_stored` up to `now`.
///
/// A reading older than `last_update_time` counts as zero elapsed time, so
/// the timestamp never moves backward. Emission while nothing is staked is
/// forfeited.
pub fn advance_pool(pool: &mut Pool, now: i64) -> Result<()> {
    let now = now.max(pool.last_update_time);

    let elapsed = now
        .checked_sub(pool.last_update_time)
        .and_then(|secs| u64::try_from(secs).ok())
        .ok_or(RewardPoolError::ArithmeticOverflow)?;

    let increase = RewardPerToken::accrued(elapsed, pool.reward_rate, pool.total_staked)?;
    pool.reward_per_token_stored = pool.reward_per_token_stored.checked_add(increase)?;
    pool.last_update_time = now;

    Ok(())
}

/// Credit `user` with everything earned since its last snapshot.
/// Must run right after `advance_pool` on the same pool.
pub fn reconcile_user(pool: &Pool, user: &mut UserStake) -> Result<()> {
    let delta = pool
        .reward_per_token_stored
        .since(user.reward_per_token_complete)?;

    let earned = delta.reward_for(user.balance_staked)?;

    user.reward_per_token_pending = user
        .reward_per_token_pending
        .checked_add(earned)
        .ok_or(RewardPoolError::ArithmeticOverflow)?;
    user.reward_per_token_complete = pool.reward_per_token_stored;

    Ok(())
}

/// Reward `user` could claim at `now`, without touching either record
pub fn preview_pending(pool: &Pool, user: &UserStake, now: i64) -> Result<u64> {
    let mut pool = pool.clone();
    let mut user = user.clone();

    advance_pool(&mut pool, now)?;
    reconcile_user(&pool, &mut user)?;

    Ok(user.reward_per_token_pending)
}

/// Everything fixed at pool creation
#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub reward_rate: u64,
    /// Nonce supplied by the caller for the pool signer
    pub nonce: u8,
    /// Canonical bump of the pool signer PDA
    pub signer_bump: u8,
    pub bump: u8,
}

/// Uninitialized -> Active, exactly once
///
/// The rate is capped at MAX_REWARD_RATE so accrual cannot overflow within
/// MAX_ACCRUAL_HORIZON of creation.
pub fn initialize_pool(pool: &mut Pool, config: PoolConfig, now: i64) -> Result<()> {
    require!(
        pool.status == PoolStatus::Uninitialized,
        RewardPoolError::AlreadyInitialized
    );
    require!(
        config.nonce == config.signer_bump,
        RewardPoolError::InvalidNonce
    );
    require!(config.reward_rate > 0, RewardPoolError::InvalidRewardRate);
    require!(
        config.reward_rate <= MAX_REWARD_RATE,
        RewardPoolError::RewardRateTooHigh
    );

    *pool = Pool {
        authority: config.authority,
        staking_mint: config.staking_mint,
        reward_mint: config.reward_mint,
        staking_vault: config.staking_vault,
        reward_vault: config.reward_vault,
        reward_rate: config.reward_rate,
        total_staked: 0,
        reward_per_token_stored: RewardPerToken::ZERO,
        last_update_time: now,
        status: PoolStatus::Active,
        nonce: config.nonce,
        bump: config.bump,
    };

    Ok(())
}

/// Set up an empty position for `owner` in the pool at `pool_key`.
///
/// The snapshot starts at the current accumulator, so nothing earned before
/// the position existed is ever credited to it.
pub fn create_user(
    pool: &Pool,
    pool_key: Pubkey,
    user: &mut UserStake,
    owner: Pubkey,
    nonce: u8,
) -> Result<()> {
    pool.require_active()?;
    require_keys_eq!(
        user.owner,
        Pubkey::default(),
        RewardPoolError::AlreadyInitialized
    );

    *user = UserStake {
        pool: pool_key,
        owner,
        balance_staked: 0,
        reward_per_token_complete: pool.reward_per_token_stored,
        reward_per_token_pending: 0,
        nonce,
    };

    Ok(())
}

/// Deposit `amount` staking tokens for `caller`
pub fn stake<C: VaultCustody>(
    pool: &mut Pool,
    user: &mut UserStake,
    caller: &Pubkey,
    amount: u64,
    now: i64,
    custody: &mut C,
) -> Result<()> {
    pool.require_active()?;
    user.require_owner(caller)?;
    require!(amount > 0, RewardPoolError::InvalidAmount);

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();

    advance_pool(&mut next_pool, now)?;
    reconcile_user(&next_pool, &mut next_user)?;

    next_user.balance_staked = next_user
        .balance_staked
        .checked_add(amount)
        .ok_or(RewardPoolError::ArithmeticOverflow)?;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_add(amount)
        .ok_or(RewardPoolError::ArithmeticOverflow)?;

    custody.transfer_in(VaultKind::Staking, amount)?;

    *pool = next_pool;
    *user = next_user;

    Ok(())
}

/// Withdraw `amount` staking tokens for `caller`.
///
/// Reconciliation runs on the pre-withdrawal balance, so the full share
/// earned up to `now` is kept.
pub fn unstake<C: VaultCustody>(
    pool: &mut Pool,
    user: &mut UserStake,
    caller: &Pubkey,
    amount: u64,
    now: i64,
    custody: &mut C,
) -> Result<()> {
    pool.require_active()?;
    user.require_owner(caller)?;
    require!(amount > 0, RewardPoolError::InvalidAmount);
    require!(
        amount <= user.balance_staked,
        RewardPoolError::InsufficientStake
    );

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();

    advance_pool(&mut next_pool, now)?;
    reconcile_user(&next_pool, &mut next_user)?;

    next_user.balance_staked = next_user
        .balance_staked
        .checked_sub(amount)
        .ok_or(RewardPoolError::InsufficientStake)?;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_sub(amount)
        .ok_or(RewardPoolError::ArithmeticOverflow)?;

    custody.transfer_out(VaultKind::Staking, amount)?;

    *pool = next_pool;
    *user = next_user;

    Ok(())
}

/// Pay out everything `caller` has earned. Returns the amount paid.
///
/// All-or-nothing: a reward vault that cannot cover the full amount fails the
/// call and pending stays untouched.
pub fn claim<C: VaultCustody>(
    pool: &mut Pool,
    user: &mut UserStake,
    caller: &Pubkey,
    now: i64,
    custody: &mut C,
) -> Result<u64> {
    pool.require_active()?;
    user.require_owner(caller)?;

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();

    advance_pool(&mut next_pool, now)?;
    reconcile_user(&next_pool, &mut next_user)?;

    let payout = next_user.reward_per_token_pending;
    if payout > 0 {
        custody.transfer_out(VaultKind::Reward, payout)?;
        next_user.reward_per_token_pending = 0;
    }

    *pool = next_pool;
    *user = next_user;

    Ok(payout)
}

/// Top up the reward vault. The accumulator is not touched: emission is
/// driven by reward_rate alone.
pub fn fund<C: VaultCustody>(pool: &Pool, amount: u64, custody: &mut C) -> Result<()> {
    pool.require_active()?;
    require!(amount > 0, RewardPoolError::InvalidAmount);

    custody.transfer_in(VaultKind::Reward, amount)
}
