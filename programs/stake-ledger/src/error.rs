use anchor_lang::prelude::*;

#[error_code]
pub enum StakeErrorCode {
    #[msg("Deposit amount must be greater than zero")]
    InvalidAmount = 1,
    #[msg("Timestamp is earlier than the last accrual")]
    InvalidTimestamp = 2,

    #[msg("Stake account is already initialized")]
    AlreadyInitialized = 3,
    #[msg("Stake account is not initialized")]
    NotInitialized = 4,
    #[msg("No withdrawal has been requested for this stake account")]
    WithdrawalNotRequested = 5,
    #[msg("Still in unbonding period, wait for it to elapse before withdrawing")]
    StillInUnbondingPeriod = 6,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance = 7,
    #[msg("Invalid mint provided")]
    InvalidMint = 8,
    #[msg("Invalid vault provided")]
    InvalidVault = 9,

    #[msg("Signer is not the owner of this stake account")]
    Unauthorized = 10,
    #[msg("Token account is not owned by the signer")]
    InvalidTokenAccountOwner = 11,

    #[msg("Arithmetic overflow")]
    MathOverflow = 12,
}

/// Coarse classification of [`StakeErrorCode`] for clients that branch on failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    Resource,
    Authorization,
    Arithmetic,
}

impl StakeErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StakeErrorCode::InvalidAmount | StakeErrorCode::InvalidTimestamp => {
                ErrorKind::Validation
            }
            StakeErrorCode::AlreadyInitialized
            | StakeErrorCode::NotInitialized
            | StakeErrorCode::WithdrawalNotRequested
            | StakeErrorCode::StillInUnbondingPeriod => ErrorKind::State,
            StakeErrorCode::InsufficientVaultBalance
            | StakeErrorCode::InvalidMint
            | StakeErrorCode::InvalidVault => ErrorKind::Resource,
            StakeErrorCode::Unauthorized | StakeErrorCode::InvalidTokenAccountOwner => {
                ErrorKind::Authorization
            }
            StakeErrorCode::MathOverflow => ErrorKind::Arithmetic,
        }
    }
}

#[cfg(test)]
pub(crate) fn assert_stake_error<T: std::fmt::Debug>(result: Result<T>, expected: StakeErrorCode) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => {
            assert_eq!(e.error_code_number, u32::from(expected), "got {}", e.error_name)
        }
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
