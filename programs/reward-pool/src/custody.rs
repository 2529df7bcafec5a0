// =============================================================================
// Vault Custody Boundary
// =============================================================================
// The reward engine never talks to the token program directly. It asks a
// VaultCustody to move tokens between the acting user's token account and one
// of the pool's two vaults. On-chain that is SplCustody (SPL token CPI); the
// native tests plug in an in-memory ledger.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::RewardPoolError;

/// Which of the pool's vaults a transfer touches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaultKind {
    Staking,
    Reward,
}

pub trait VaultCustody {
    /// Move `amount` from the acting user's token account into `vault`.
    /// Fails with InsufficientFunds when the user cannot cover it.
    fn transfer_in(&mut self, vault: VaultKind, amount: u64) -> Result<()>;

    /// Move `amount` from `vault` to the acting user's token account.
    /// Fails without moving anything when the vault cannot cover it.
    fn transfer_out(&mut self, vault: VaultKind, amount: u64) -> Result<()>;
}

/// Error reported when `vault` holds less than a requested payout
pub fn vault_shortfall(vault: VaultKind) -> RewardPoolError {
    match vault {
        VaultKind::Staking => RewardPoolError::InsufficientVaultBalance,
        VaultKind::Reward => RewardPoolError::InsufficientRewardVaultBalance,
    }
}

/// A pool vault paired with the acting user's token account on the same mint
pub struct TokenRoute<'a, 'info> {
    pub vault: &'a Account<'info, TokenAccount>,
    pub user_account: &'a Account<'info, TokenAccount>,
}

/// SPL token implementation of the custody boundary
///
/// Inbound transfers are signed by `user`; outbound transfers are signed by
/// the pool signer PDA using `signer_seeds`.
pub struct SplCustody<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub user: AccountInfo<'info>,
    pub pool_signer: Option<AccountInfo<'info>>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
    pub staking: Option<TokenRoute<'a, 'info>>,
    pub reward: Option<TokenRoute<'a, 'info>>,
}

impl<'a, 'info> SplCustody<'a, 'info> {
    fn route(&self, vault: VaultKind) -> Result<&TokenRoute<'a, 'info>> {
        let route = match vault {
            VaultKind::Staking => self.staking.as_ref(),
            VaultKind::Reward => self.reward.as_ref(),
        };
        route.ok_or_else(|| error!(anchor_lang::error::ErrorCode::AccountNotEnoughKeys))
    }
}

impl<'a, 'info> VaultCustody for SplCustody<'a, 'info> {
    fn transfer_in(&mut self, vault: VaultKind, amount: u64) -> Result<()> {
        let route = self.route(vault)?;

        require!(
            route.user_account.amount >= amount,
            RewardPoolError::InsufficientFunds
        );

        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: route.user_account.to_account_info(),
                    to: route.vault.to_account_info(),
                    authority: self.user.clone(),
                },
            ),
            amount,
        )
    }

    fn transfer_out(&mut self, vault: VaultKind, amount: u64) -> Result<()> {
        let route = self.route(vault)?;
        let pool_signer = self
            .pool_signer
            .clone()
            .ok_or_else(|| error!(anchor_lang::error::ErrorCode::AccountNotEnoughKeys))?;

        if route.vault.amount < amount {
            return Err(vault_shortfall(vault).into());
        }

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: route.vault.to_account_info(),
                    to: route.user_account.to_account_info(),
                    authority: pool_signer,
                },
                self.signer_seeds,
            ),
            amount,
        )
    }
}
