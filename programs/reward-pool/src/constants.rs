// =============================================================================
// Reward Pool Constants
// =============================================================================

// PDA Seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_SIGNER_SEED: &[u8] = b"pool_signer";
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
pub const USER_SEED: &[u8] = b"user";

// Fixed-point scale for reward_per_token (18 decimals).
// All accumulator math is floor division in u128, so a single advance
// under-counts by less than 1e-18 reward units per staked unit and a single
// reconcile under-pays a user by less than one reward base unit.
pub const REWARD_PRECISION: u128 = 1_000_000_000_000_000_000; // 10^18

// =============================================================================
// Emission cap: keeps accrual inside u128/u64 for the pool's whole lifetime
// =============================================================================
// A pool must be able to accrue for MAX_ACCRUAL_HORIZON seconds at
// MAX_REWARD_RATE without overflowing:
// - rate * horizon * PRECISION fits u128 (accumulator, one-staker worst case)
// - rate * horizon fits u64 (total reward any single user can be owed)
// Otherwise advance_pool would fail on every call and staked tokens could
// never be withdrawn.
pub const MAX_ACCRUAL_HORIZON: u64 = 100 * 365 * 24 * 60 * 60; // 100 years
pub const MAX_REWARD_RATE: u64 = 1_000_000_000; // 1000 tokens/s at 6 decimals

const _: () = assert!(
    match (MAX_REWARD_RATE as u128).checked_mul(MAX_ACCRUAL_HORIZON as u128) {
        Some(per_token_units) => per_token_units.checked_mul(REWARD_PRECISION).is_some(),
        None => false,
    }
);
const _: () = assert!(MAX_REWARD_RATE.checked_mul(MAX_ACCRUAL_HORIZON).is_some());
