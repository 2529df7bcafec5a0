use anchor_lang::prelude::*;

#[error_code]
pub enum RewardPoolError {
    // Pool State Errors
    #[msg("Reward pool already initialized")]
    AlreadyInitialized,

    #[msg("Reward pool is not active")]
    PoolNotActive,

    // Authorization Errors
    #[msg("Unauthorized: signer does not own this stake account")]
    Unauthorized,

    // Balance Errors
    #[msg("Insufficient token balance to stake")]
    InsufficientFunds,

    #[msg("Insufficient staked balance")]
    InsufficientStake,

    #[msg("Insufficient balance in reward vault")]
    InsufficientRewardVaultBalance,

    #[msg("Insufficient balance in staking vault")]
    InsufficientVaultBalance,

    // Math Errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // Argument Errors
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[msg("Invalid reward rate: must be greater than zero")]
    InvalidRewardRate,

    #[msg("Reward rate exceeds maximum")]
    RewardRateTooHigh,

    #[msg("Nonce does not match the derived address bump")]
    InvalidNonce,

    // Account Validation Errors
    #[msg("Token account has the wrong mint")]
    InvalidMint,

    #[msg("Vault does not belong to this pool")]
    InvalidVault,

    #[msg("User stake account belongs to a different pool")]
    MismatchedUserPool,
}
