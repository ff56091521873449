use crate::error::StakeErrorCode;
use crate::state::{DAYS_PER_YEAR, INTEREST_RATE_PERCENT, MILLISECONDS_PER_DAY};
use anchor_lang::prelude::*;

/// Simple interest owed on `principal` between `from_ts` and `to_ts` (epoch milliseconds).
///
/// interest = floor(principal * rate% * days / (100 * 365)), where `days` is the exact
/// (fractional) number of days elapsed. Everything is multiplied out in u128 before the
/// single division so that partial days still earn and the result is truncated once.
pub fn accrue(principal: u64, from_ts: u64, to_ts: u64) -> Result<u64> {
    require!(to_ts >= from_ts, StakeErrorCode::InvalidTimestamp);

    let elapsed_ms = (to_ts - from_ts) as u128;
    let numerator = (principal as u128)
        .checked_mul(INTEREST_RATE_PERCENT as u128)
        .and_then(|x| x.checked_mul(elapsed_ms))
        .ok_or(StakeErrorCode::MathOverflow)?;
    let denominator = 100u128 * DAYS_PER_YEAR as u128 * MILLISECONDS_PER_DAY as u128;

    u64::try_from(numerator / denominator).map_err(|_| StakeErrorCode::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_stake_error;

    const DAY: u64 = MILLISECONDS_PER_DAY;

    #[test]
    fn zero_interval_earns_nothing() {
        for principal in [0, 1, 1_000, u64::MAX] {
            assert_eq!(accrue(principal, 42 * DAY, 42 * DAY).unwrap(), 0);
        }
    }

    #[test]
    fn full_year_pays_ten_percent() {
        assert_eq!(accrue(1_000, 0, 365 * DAY).unwrap(), 100);
        assert_eq!(accrue(100_000, 7, 7 + 365 * DAY).unwrap(), 10_000);
    }

    #[test]
    fn partial_days_count_before_truncation() {
        // 1_000_000 * 10 * 1.5 / 36500 = 410.95...
        assert_eq!(accrue(1_000_000, 0, DAY + DAY / 2).unwrap(), 410);
        // a single day on a small balance floors to zero
        assert_eq!(accrue(100, 0, DAY).unwrap(), 0);
    }

    #[test]
    fn matches_compounding_schedule() {
        assert_eq!(accrue(100, 0, 181 * DAY).unwrap(), 4);
        assert_eq!(accrue(304, 181 * DAY, 365 * DAY).unwrap(), 15);
    }

    #[test]
    fn rejects_time_running_backwards() {
        assert_stake_error(accrue(1_000, 10, 9), StakeErrorCode::InvalidTimestamp);
    }

    #[test]
    fn rejects_results_wider_than_u64() {
        // u64::MAX at 10% for ~a million years does not fit back into u64
        assert_stake_error(
            accrue(u64::MAX, 0, 1_000_000 * 365 * DAY),
            StakeErrorCode::MathOverflow,
        );
    }
}
