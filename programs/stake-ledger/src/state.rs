use crate::accrual::accrue;
use crate::error::StakeErrorCode;
use anchor_lang::prelude::*;

pub const STAKE_SEED: &[u8] = b"stake";
pub const VAULT_SEED: &[u8] = b"vault";

pub const INTEREST_RATE_PERCENT: u64 = 10;
pub const DAYS_PER_YEAR: u64 = 365;
pub const MILLISECONDS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// One staking position, addressed by (owner, mint, uid).
///
/// `principal` already includes every interest amount folded in by earlier deposits.
/// Timestamps are epoch milliseconds supplied by the caller of each instruction.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakeAccount {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub uid: u64,
    pub vault: Pubkey,
    pub principal: u64,
    pub last_accrual_ts: u64,
    pub unbonding_period_days: u64,
    pub withdrawal_request_ts: Option<u64>,
}

impl StakeAccount {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 32 + 8 + 8 + 8 + (1 + 8);

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Binds a freshly allocated account to its identity and vault.
    pub fn open(&mut self, owner: Pubkey, mint: Pubkey, uid: u64, vault: Pubkey) -> Result<()> {
        require!(!self.is_initialized(), StakeErrorCode::AlreadyInitialized);

        *self = StakeAccount {
            owner,
            mint,
            uid,
            vault,
            ..StakeAccount::default()
        };
        Ok(())
    }

    /// Accrues up to `now`, then adds `amount` on top. A pending withdrawal request survives.
    pub fn deposit(&self, amount: u64, now: u64, unbonding_period_days: u64) -> Result<Deposited> {
        require!(self.is_initialized(), StakeErrorCode::NotInitialized);
        require!(amount > 0, StakeErrorCode::InvalidAmount);
        require!(now >= self.last_accrual_ts, StakeErrorCode::InvalidTimestamp);

        let interest = accrue(self.principal, self.last_accrual_ts, now)?;
        let principal = self
            .principal
            .checked_add(interest)
            .and_then(|x| x.checked_add(amount))
            .ok_or(StakeErrorCode::MathOverflow)?;

        Ok(Deposited {
            interest,
            transfer: amount,
            account: StakeAccount {
                principal,
                last_accrual_ts: now,
                unbonding_period_days,
                ..self.clone()
            },
        })
    }

    /// Starts (or restarts) the unbonding countdown at `now`.
    pub fn request_withdrawal(&self, now: u64) -> Result<StakeAccount> {
        require!(self.is_initialized(), StakeErrorCode::NotInitialized);

        Ok(StakeAccount {
            withdrawal_request_ts: Some(now),
            ..self.clone()
        })
    }

    /// First instant at which a withdrawal requested at `requested_at` is allowed,
    /// saturating at `u64::MAX`.
    pub fn unbonding_deadline(&self, requested_at: u64) -> u64 {
        self.unbonding_period_days
            .saturating_mul(MILLISECONDS_PER_DAY)
            .saturating_add(requested_at)
    }

    pub fn unbonding_ends_at(&self) -> Option<u64> {
        self.withdrawal_request_ts
            .map(|requested_at| self.unbonding_deadline(requested_at))
    }

    fn unbonding_elapsed(&self, requested_at: u64, now: u64) -> bool {
        let period_ms = self.unbonding_period_days as u128 * MILLISECONDS_PER_DAY as u128;
        now as u128 >= requested_at as u128 + period_ms
    }

    /// Final accrual and full drain. The request gate is checked before anything time related,
    /// and the vault must cover principal plus interest.
    pub fn withdraw(&self, now: u64, vault_balance: u64) -> Result<Withdrawn> {
        require!(self.is_initialized(), StakeErrorCode::NotInitialized);
        let requested_at = self
            .withdrawal_request_ts
            .ok_or(StakeErrorCode::WithdrawalNotRequested)?;
        require!(
            self.unbonding_elapsed(requested_at, now),
            StakeErrorCode::StillInUnbondingPeriod
        );

        let interest = accrue(self.principal, self.last_accrual_ts, now)?;
        let payout = self
            .principal
            .checked_add(interest)
            .ok_or(StakeErrorCode::MathOverflow)?;
        require!(
            vault_balance >= payout,
            StakeErrorCode::InsufficientVaultBalance
        );

        Ok(Withdrawn {
            interest,
            payout,
            account: StakeAccount {
                principal: 0,
                last_accrual_ts: now,
                withdrawal_request_ts: None,
                ..self.clone()
            },
        })
    }

    pub fn status(&self, now: u64) -> Result<StakeStatus> {
        require!(self.is_initialized(), StakeErrorCode::NotInitialized);

        let pending_interest = accrue(self.principal, self.last_accrual_ts, now)?;
        Ok(StakeStatus {
            principal: self.principal,
            pending_interest,
            withdrawal_requested: self.withdrawal_request_ts.is_some(),
            unbonding_ends_at: self.unbonding_ends_at(),
            withdrawable: self
                .withdrawal_request_ts
                .is_some_and(|requested_at| self.unbonding_elapsed(requested_at, now)),
        })
    }
}

/// Result of a deposit: the account to persist, the interest folded into it, and the
/// amount to move from the owner's wallet into the vault.
#[derive(Debug)]
pub struct Deposited {
    pub interest: u64,
    pub transfer: u64,
    pub account: StakeAccount,
}

/// Result of a withdrawal: the emptied account to persist and the amount owed to the owner.
#[derive(Debug)]
pub struct Withdrawn {
    pub interest: u64,
    pub payout: u64,
    pub account: StakeAccount,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub payout: u64,
    pub interest: u64,
    pub account: StakeAccount,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeStatus {
    pub principal: u64,
    pub pending_interest: u64,
    pub withdrawal_requested: bool,
    pub unbonding_ends_at: Option<u64>,
    pub withdrawable: bool,
}
