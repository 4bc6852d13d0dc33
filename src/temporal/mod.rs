mod clock;
mod error;
mod validity_period;

pub use crate::temporal::clock::{Clock, FixedClock, SystemClock};
pub use crate::temporal::error::DateValidationError;
pub use crate::temporal::validity_period::{
    TariffValidityPeriod, TemporalRules, ValidityPeriodValidator,
};

use crate::stats::Stats;
use chrono::NaiveDate;

/// Checks the first day of a tariff validity period against today, as read from `clock`.
pub fn validate_start_date(
    input: &str,
    clock: &dyn Clock,
) -> Result<NaiveDate, DateValidationError> {
    ValidityPeriodValidator::with_clock(clock).validate_start_date(input)
}

/// Checks the last day of a tariff validity period against its first day. A start
/// that cannot be read fails the check.
pub fn validate_end_date(input: &str, start: &str) -> Result<NaiveDate, DateValidationError> {
    TemporalRules::default()
        .parse_end_date(input, start)
        .inspect_err(|err| Stats::default().date_rejected(err))
}
