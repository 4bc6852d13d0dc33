use chrono::NaiveDate;
use strum::IntoStaticStr;
use thiserror::Error;

/// Why a tariff validity date was refused. The message is what the form shows next
/// to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DateValidationError {
    #[error("Invalid date")]
    InvalidFormat,

    #[error("The date cannot be in the future")]
    FutureDate,

    #[error("The date must be after {minimum}")]
    BeforeMinimum { minimum: NaiveDate },

    #[error("The end date must be after the start date")]
    NotAfterStart,
}

impl DateValidationError {
    /// Stable name of the failure, used as a metric tag
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

impl From<DateValidationError> for i64 {
    fn from(value: DateValidationError) -> i64 {
        match value {
            DateValidationError::InvalidFormat => -2,
            DateValidationError::FutureDate => -3,
            DateValidationError::BeforeMinimum { .. } => -4,
            DateValidationError::NotAfterStart => -5,
        }
    }
}
