use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::POOL_SEED;
use crate::custody::{SplCustody, TokenRoute};
use crate::engine;
use crate::error::RewardPoolError;
use crate::events::RewardsFunded;
use crate::state::Pool;

/// Deposit reward tokens into the pool's reward vault
///
/// Anyone may fund a pool. Emission is fixed by reward_rate; funding only
/// makes sure claims can be paid.
///
#[derive(Accounts)]
pub struct Fund<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        address = pool.reward_vault @ RewardPoolError::InvalidVault
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_reward_account.mint == pool.reward_mint @ RewardPoolError::InvalidMint,
        token::authority = funder
    )]
    pub funder_reward_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler_fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    let mut custody = SplCustody {
        token_program: &ctx.accounts.token_program,
        user: ctx.accounts.funder.to_account_info(),
        pool_signer: None,
        signer_seeds: &[],
        staking: None,
        reward: Some(TokenRoute {
            vault: &ctx.accounts.reward_vault,
            user_account: &ctx.accounts.funder_reward_account,
        }),
    };

    engine::fund(&ctx.accounts.pool, amount, &mut custody)?;

    msg!(
        "Funded reward vault with {}. Vault balance before: {}",
        amount,
        ctx.accounts.reward_vault.amount
    );

    emit!(RewardsFunded {
        pool: ctx.accounts.pool.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
