use crate::config::ConfigValidationError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const MAX_DECIMAL_PLACES: u32 = 28;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 0.005 -> 0.01
    #[default]
    HalfUp,
    /// 0.005 -> 0.00, 0.015 -> 0.02
    HalfEven,
}

impl From<RoundingMode> for RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// How amounts are rounded for display. Applied once, to finished results.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RoundingPolicy {
    pub decimal_places: u32,
    pub mode: RoundingMode,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        RoundingPolicy {
            decimal_places: 2,
            mode: RoundingMode::default(),
        }
    }
}

impl RoundingPolicy {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigValidationError::TooManyDecimalPlaces {
                got: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }
        Ok(())
    }

    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimal_places, self.mode.into())
    }
}
