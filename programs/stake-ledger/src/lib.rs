pub mod account_structs;
pub mod accrual;
/// # stake ledger - Interest-Bearing Token Staking
///
/// ## Business Process Flow
///
/// 1. Setup:
///    - Owner initializes a stake account for (owner, mint, uid)
///    - Program creates the paired vault token account, owned by the stake account PDA
///
/// 2. Deposit Phase:
///    - Interest accrued since the last deposit is folded into the principal
///    - Deposited tokens move from the owner's wallet into the vault
///    - The unbonding period (in days) is overwritten by every deposit
///
/// 3. Withdrawal Flow:
///    a. Request:
///       - Owner records a withdrawal request timestamp
///       - Unbonding countdown starts, funds keep earning
///
///    b. Waiting Period:
///       - Withdrawals are rejected until the unbonding period has elapsed
///       - Remaining time and pending interest can be queried via `stake_status`
///
///    c. Withdraw:
///       - Final interest is accrued and principal plus interest is paid out
///       - The position is emptied and the request cleared
///
/// Interest is simple interest at 10% per year on the principal, accrued lazily at each
/// deposit and at withdrawal. The vault must be funded with reward tokens separately to
/// cover it. Timestamps are epoch milliseconds supplied by the caller.
pub mod error;
pub mod events;
pub mod processor;
pub mod state;

use account_structs::*;
use anchor_lang::prelude::*;
use state::{StakeAccount, StakeStatus, WithdrawReceipt};

declare_id!("264ZN9JszdvQsMzc2mKkx5weWHMmrpBkjT8t6awgasYv");

#[program]
pub mod stake_ledger {
    use super::*;

    /// Creates an empty stake account and its vault for (signer, mint, uid).
    pub fn initialize(ctx: Context<Initialize>, uid: u64) -> Result<StakeAccount> {
        processor::initialize(ctx, uid)
    }

    /// Accrues interest, then adds `amount` to the principal:
    /// - Transfers `amount` from the owner's token account to the vault
    /// - Overwrites the unbonding period with `unbonding_period_days`
    pub fn deposit_funds(
        ctx: Context<DepositFunds>,
        uid: u64,
        amount: u64,
        timestamp: u64,
        unbonding_period_days: u64,
    ) -> Result<StakeAccount> {
        processor::deposit_funds(ctx, uid, amount, timestamp, unbonding_period_days)
    }

    /// Starts the unbonding countdown at `timestamp`, replacing any earlier request.
    pub fn withdrawal_request(
        ctx: Context<WithdrawalRequest>,
        uid: u64,
        timestamp: u64,
    ) -> Result<StakeAccount> {
        processor::withdrawal_request(ctx, uid, timestamp)
    }

    /// Pays out principal plus interest once the unbonding period has elapsed:
    /// - Fails if no withdrawal was requested or the period is still running
    /// - Transfers the payout from the vault to the owner's token account
    pub fn withdraw_funds(
        ctx: Context<WithdrawFunds>,
        uid: u64,
        timestamp: u64,
    ) -> Result<WithdrawReceipt> {
        processor::withdraw_funds(ctx, uid, timestamp)
    }

    pub fn stake_status(
        ctx: Context<StakeStatusQuery>,
        uid: u64,
        timestamp: u64,
    ) -> Result<StakeStatus> {
        processor::stake_status(ctx, uid, timestamp)
    }
}
