// =============================================================================
// Instructions Module - Reward Pool
// =============================================================================

pub mod claim;
pub mod create_user;
pub mod fund;
pub mod initialize_pool;
pub mod stake;
pub mod unstake;

pub use claim::*;
pub use create_user::*;
pub use fund::*;
pub use initialize_pool::*;
pub use stake::*;
pub use unstake::*;
