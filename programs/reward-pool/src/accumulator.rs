// =============================================================================
// Fixed-Point Reward Accumulator
// =============================================================================
// reward_per_token is stored as a u128 scaled by REWARD_PRECISION. Every
// operation is checked: an overflow is surfaced as ArithmeticOverflow and
// never saturated or wrapped.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::REWARD_PRECISION;
use crate::error::RewardPoolError;

/// Cumulative reward earned per staked token, scaled by `REWARD_PRECISION`.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct RewardPerToken(u128);

impl RewardPerToken {
    pub const ZERO: Self = Self(0);

    /// Serialized size in bytes
    pub const SIZE: usize = 16;

    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    pub const fn scaled(self) -> u128 {
        self.0
    }

    /// Accumulator growth for an emission window.
    ///
    /// Formula: elapsed * reward_rate * PRECISION / total_staked
    ///
    /// Returns ZERO when nothing is staked: the window's emission is not
    /// credited to anyone.
    pub fn accrued(elapsed: u64, reward_rate: u64, total_staked: u64) -> Result<Self> {
        if total_staked == 0 || elapsed == 0 {
            return Ok(Self::ZERO);
        }

        let increase = (elapsed as u128)
            .checked_mul(reward_rate as u128)
            .ok_or(RewardPoolError::ArithmeticOverflow)?
            .checked_mul(REWARD_PRECISION)
            .ok_or(RewardPoolError::ArithmeticOverflow)?
            .checked_div(total_staked as u128)
            .ok_or(RewardPoolError::ArithmeticOverflow)?;

        Ok(Self(increase))
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| error!(RewardPoolError::ArithmeticOverflow))
    }

    /// Growth since an earlier snapshot. A snapshot ahead of `self` means the
    /// records are corrupt and is reported as an overflow.
    pub fn since(self, snapshot: Self) -> Result<Self> {
        self.0
            .checked_sub(snapshot.0)
            .map(Self)
            .ok_or_else(|| error!(RewardPoolError::ArithmeticOverflow))
    }

    /// Reward owed to `balance` staked tokens over this accumulator delta,
    /// rounded down.
    pub fn reward_for(self, balance: u64) -> Result<u64> {
        if balance == 0 || self.0 == 0 {
            return Ok(0);
        }

        let reward = (balance as u128)
            .checked_mul(self.0)
            .ok_or(RewardPoolError::ArithmeticOverflow)?
            / REWARD_PRECISION;

        u64::try_from(reward).map_err(|_| error!(RewardPoolError::ArithmeticOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accrued_is_zero_without_stakers() {
        assert_eq!(RewardPerToken::accrued(100, 1_000, 0).unwrap(), RewardPerToken::ZERO);
    }

    #[test]
    fn accrued_scales_by_precision() {
        // 10s at 1000/s over 100 staked = 100 reward per token
        let delta = RewardPerToken::accrued(10, 1_000, 100).unwrap();
        assert_eq!(delta.scaled(), 100 * REWARD_PRECISION);
        assert_eq!(delta.reward_for(100).unwrap(), 10_000);
    }

    #[test]
    fn accrued_rounds_down() {
        // 1 reward unit over 3 staked tokens
        let delta = RewardPerToken::accrued(1, 1, 3).unwrap();
        assert_eq!(delta.scaled(), REWARD_PRECISION / 3);
        assert_eq!(delta.reward_for(3).unwrap(), 0);
    }

    #[test]
    fn accrued_overflow_fails_closed() {
        let err = RewardPerToken::accrued(u64::MAX, u64::MAX, 1).unwrap_err();
        assert_eq!(code(err), u32::from(RewardPoolError::ArithmeticOverflow));
    }

    #[test]
    fn add_overflow_fails_closed() {
        let top = RewardPerToken::from_scaled(u128::MAX);
        let err = top.checked_add(RewardPerToken::from_scaled(1)).unwrap_err();
        assert_eq!(code(err), u32::from(RewardPoolError::ArithmeticOverflow));
    }

    #[test]
    fn since_rejects_future_snapshot() {
        let now = RewardPerToken::from_scaled(5);
        let err = now.since(RewardPerToken::from_scaled(6)).unwrap_err();
        assert_eq!(code(err), u32::from(RewardPoolError::ArithmeticOverflow));
    }

    #[test]
    fn reward_that_does_not_fit_u64_is_an_error() {
        let delta = RewardPerToken::from_scaled(u64::MAX as u128 * REWARD_PRECISION);
        let err = delta.reward_for(2).unwrap_err();
        assert_eq!(code(err), u32::from(RewardPoolError::ArithmeticOverflow));
    }
}
