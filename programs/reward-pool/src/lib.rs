// =============================================================================
// Reward Pool
// =============================================================================
//
// Users stake one SPL token into a program-owned vault and accrue a share of a
// second token, emitted at a fixed per-second rate chosen by the pool's
// creator. Accrual is lazy: every instruction first advances the pool's
// reward-per-token accumulator to the current clock, then settles the acting
// user against it.
// =============================================================================

use anchor_lang::prelude::*;

pub mod accumulator;
pub mod constants;
pub mod custody;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("7xpwc6uLVzToRuPwser2aD3cDYMKtsjFWMe4yTUMSMYp");

#[program]
pub mod reward_pool {
    use super::*;

    /// Initialize a new reward pool
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `nonce` - Bump of the pool signer PDA
    /// * `reward_rate` - Reward base units emitted per second
    ///
    /// # Accounts
    /// * `authority` - Pool creator (signer, payer)
    /// * `pool` - Pool PDA
    /// * `staking_mint` / `reward_mint` - Token pair
    /// * `staking_vault` / `reward_vault` - Vaults created for the pool
    ///
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        nonce: u8,
        reward_rate: u64,
    ) -> Result<()> {
        instructions::initialize_pool::handler_initialize_pool(ctx, nonce, reward_rate)
    }

    /// Create the caller's stake account, required before the first stake
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `nonce` - Bump of the user stake PDA
    ///
    pub fn create_user(ctx: Context<CreateUser>, nonce: u8) -> Result<()> {
        instructions::create_user::handler_create_user(ctx, nonce)
    }

    /// Stake tokens
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of staking tokens to deposit
    ///
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler_stake(ctx, amount)
    }

    /// Unstake tokens (no cooldown)
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of staking tokens to withdraw
    ///
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler_unstake(ctx, amount)
    }

    /// Claim all accumulated rewards
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler_claim(ctx)
    }

    /// Deposit reward tokens into the reward vault
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of reward tokens to deposit
    ///
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund::handler_fund(ctx, amount)
    }
}
