#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use reward_pool::custody::{vault_shortfall, VaultCustody, VaultKind};
use reward_pool::engine::{self, PoolConfig};
use reward_pool::error::RewardPoolError;
use reward_pool::state::{Pool, UserStake};

/// A user's external token balances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wallet {
    pub staking: u64,
    pub reward: u64,
}

/// In-memory stand-in for the token program: two vaults and user wallets
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    pub staking_vault: u64,
    pub reward_vault: u64,
    pub wallets: HashMap<Pubkey, Wallet>,
}

impl Ledger {
    pub fn custody_for(&mut self, who: Pubkey) -> MemoryCustody<'_> {
        MemoryCustody { ledger: self, who }
    }

    pub fn wallet(&self, who: &Pubkey) -> Wallet {
        self.wallets.get(who).copied().unwrap_or_default()
    }

    fn vault_mut(&mut self, vault: VaultKind) -> &mut u64 {
        match vault {
            VaultKind::Staking => &mut self.staking_vault,
            VaultKind::Reward => &mut self.reward_vault,
        }
    }
}

fn wallet_side(wallet: &mut Wallet, vault: VaultKind) -> &mut u64 {
    match vault {
        VaultKind::Staking => &mut wallet.staking,
        VaultKind::Reward => &mut wallet.reward,
    }
}

/// Custody bound to one acting user
pub struct MemoryCustody<'a> {
    ledger: &'a mut Ledger,
    who: Pubkey,
}

impl VaultCustody for MemoryCustody<'_> {
    fn transfer_in(&mut self, vault: VaultKind, amount: u64) -> Result<()> {
        let wallet = self.ledger.wallets.entry(self.who).or_default();
        let side = wallet_side(wallet, vault);
        require!(*side >= amount, RewardPoolError::InsufficientFunds);
        *side -= amount;

        let balance = self.ledger.vault_mut(vault);
        *balance = balance
            .checked_add(amount)
            .ok_or(RewardPoolError::ArithmeticOverflow)?;
        Ok(())
    }

    fn transfer_out(&mut self, vault: VaultKind, amount: u64) -> Result<()> {
        let balance = self.ledger.vault_mut(vault);
        if *balance < amount {
            return Err(vault_shortfall(vault).into());
        }
        *balance -= amount;

        let wallet = self.ledger.wallets.entry(self.who).or_default();
        let side = wallet_side(wallet, vault);
        *side = side
            .checked_add(amount)
            .ok_or(RewardPoolError::ArithmeticOverflow)?;
        Ok(())
    }
}

/// One pool, its users and the ledger behind its vaults
#[derive(Clone, Debug)]
pub struct Harness {
    pub pool_key: Pubkey,
    pub authority: Pubkey,
    pub pool: Pool,
    pub users: HashMap<Pubkey, UserStake>,
    pub ledger: Ledger,
}

impl Harness {
    /// Active pool created at t=0
    pub fn new(reward_rate: u64) -> Self {
        let authority = Pubkey::new_unique();
        let mut pool = Pool::default();
        engine::initialize_pool(&mut pool, config(authority, reward_rate), 0)
            .expect("pool initializes");

        Self {
            pool_key: Pubkey::new_unique(),
            authority,
            pool,
            users: HashMap::new(),
            ledger: Ledger::default(),
        }
    }

    /// Registers a stake account for a new user holding `staking_tokens`
    pub fn add_user(&mut self, staking_tokens: u64) -> Pubkey {
        let owner = Pubkey::new_unique();
        let mut user = UserStake::default();
        engine::create_user(&self.pool, self.pool_key, &mut user, owner, 255)
            .expect("user is created");

        self.users.insert(owner, user);
        self.ledger.wallets.insert(
            owner,
            Wallet {
                staking: staking_tokens,
                reward: 0,
            },
        );
        owner
    }

    pub fn user(&self, owner: &Pubkey) -> &UserStake {
        &self.users[owner]
    }

    pub fn fund(&mut self, amount: u64) -> Result<()> {
        let funder = self.authority;
        self.ledger.wallets.entry(funder).or_default().reward += amount;
        let mut custody = self.ledger.custody_for(funder);
        engine::fund(&self.pool, amount, &mut custody)
    }

    pub fn stake(&mut self, owner: Pubkey, amount: u64, now: i64) -> Result<()> {
        self.stake_as(owner, owner, amount, now)
    }

    pub fn stake_as(&mut self, caller: Pubkey, owner: Pubkey, amount: u64, now: i64) -> Result<()> {
        let user = self.users.get_mut(&owner).expect("known user");
        let mut custody = self.ledger.custody_for(caller);
        engine::stake(&mut self.pool, user, &caller, amount, now, &mut custody)
    }

    pub fn unstake(&mut self, owner: Pubkey, amount: u64, now: i64) -> Result<()> {
        let user = self.users.get_mut(&owner).expect("known user");
        let mut custody = self.ledger.custody_for(owner);
        engine::unstake(&mut self.pool, user, &owner, amount, now, &mut custody)
    }

    pub fn claim(&mut self, owner: Pubkey, now: i64) -> Result<u64> {
        let user = self.users.get_mut(&owner).expect("known user");
        let mut custody = self.ledger.custody_for(owner);
        engine::claim(&mut self.pool, user, &owner, now, &mut custody)
    }

    pub fn pending_at(&self, owner: &Pubkey, now: i64) -> u64 {
        engine::preview_pending(&self.pool, self.user(owner), now).expect("preview")
    }

    pub fn sum_of_balances(&self) -> u64 {
        self.users.values().map(|u| u.balance_staked).sum()
    }
}

pub fn config(authority: Pubkey, reward_rate: u64) -> PoolConfig {
    PoolConfig {
        authority,
        staking_mint: Pubkey::new_unique(),
        reward_mint: Pubkey::new_unique(),
        staking_vault: Pubkey::new_unique(),
        reward_vault: Pubkey::new_unique(),
        reward_rate,
        nonce: 254,
        signer_bump: 254,
        bump: 255,
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: RewardPoolError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {expected:?}, got {}",
            err.error_name
        ),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
