use anchor_lang::prelude::*;

#[event]
pub struct StakeInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub uid: u64,
    pub stake_account: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct DepositEvent {
    pub owner: Pubkey,
    pub uid: u64,
    pub amount: u64,
    pub interest: u64,
    pub principal: u64,
    pub unbonding_period_days: u64,
    pub timestamp: u64,
    pub vault: Pubkey,
}

#[event]
pub struct WithdrawalRequestedEvent {
    pub owner: Pubkey,
    pub uid: u64,
    pub timestamp: u64,
    pub unbonding_ends_at: u64,
}

#[event]
pub struct WithdrawEvent {
    pub owner: Pubkey,
    pub uid: u64,
    pub payout: u64,
    pub interest: u64,
    pub timestamp: u64,
    pub vault: Pubkey,
}
