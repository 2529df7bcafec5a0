use anchor_lang::prelude::*;

use crate::accumulator::RewardPerToken;
use crate::error::RewardPoolError;

/// Lifecycle of a pool account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoolStatus {
    #[default]
    Uninitialized,
    Active,
}

/// Staking/reward pool state
/// PDA: ["pool", staking_mint, reward_mint]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Pool {
    /// Identity that initialized the pool
    pub authority: Pubkey,

    /// Token deposited by stakers
    pub staking_mint: Pubkey,

    /// Token paid out as rewards
    pub reward_mint: Pubkey,

    /// Vault holding staked tokens
    /// PDA: ["staking_vault", pool], authority = pool signer
    pub staking_vault: Pubkey,

    /// Vault holding reward tokens
    /// PDA: ["reward_vault", pool], authority = pool signer
    pub reward_vault: Pubkey,

    /// Reward base units emitted per second across all stakers
    pub reward_rate: u64,

    /// Sum of every user's balance_staked
    pub total_staked: u64,

    /// Accumulated rewards per staked token (scaled by REWARD_PRECISION)
    /// Only the reward engine writes this
    pub reward_per_token_stored: RewardPerToken,

    /// Unix timestamp of the last accumulator advance
    pub last_update_time: i64,

    pub status: PoolStatus,

    /// Pool signer PDA bump
    /// PDA: ["pool_signer", pool]
    pub nonce: u8,

    /// Pool PDA bump
    pub bump: u8,
}

impl Pool {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        32 + // staking_mint
        32 + // reward_mint
        32 + // staking_vault
        32 + // reward_vault
        8 +  // reward_rate
        8 +  // total_staked
        RewardPerToken::SIZE + // reward_per_token_stored
        8 +  // last_update_time
        1 +  // status
        1 +  // nonce
        1 +  // bump
        32;  // padding for future fields

    pub fn is_active(&self) -> bool {
        self.status == PoolStatus::Active
    }

    pub fn require_active(&self) -> Result<()> {
        require!(self.is_active(), RewardPoolError::PoolNotActive);
        Ok(())
    }
}
