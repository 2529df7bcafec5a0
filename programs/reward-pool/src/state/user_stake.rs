use anchor_lang::prelude::*;

use crate::accumulator::RewardPerToken;
use crate::error::RewardPoolError;

/// Per-user staking position
/// PDA: ["user", pool, owner]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserStake {
    /// The pool this position belongs to
    pub pool: Pubkey,

    /// Owner of this staking position
    pub owner: Pubkey,

    /// Amount of staking tokens deposited
    pub balance_staked: u64,

    /// Snapshot of pool.reward_per_token_stored at the last reconcile
    /// pending += balance_staked * (pool.reward_per_token_stored - complete) / PRECISION
    pub reward_per_token_complete: RewardPerToken,

    /// Reward earned but not yet claimed, in reward base units
    pub reward_per_token_pending: u64,

    /// PDA bump seed
    pub nonce: u8,
}

impl UserStake {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // pool
        32 + // owner
        8 +  // balance_staked
        RewardPerToken::SIZE + // reward_per_token_complete
        8 +  // reward_per_token_pending
        1 +  // nonce
        32;  // padding for future fields

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, RewardPoolError::Unauthorized);
        Ok(())
    }
}
