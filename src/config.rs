use crate::comparison::RoundingPolicy;
use crate::temporal::TemporalRules;
use crate::voltage::SubgroupRanges;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("The configuration is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("At least one date format is required")]
    NoDateFormats,

    #[error("Invalid date format `{0}`")]
    InvalidDateFormat(String),

    #[error("UTC offset of {0} minutes is out of range")]
    UtcOffsetOutOfRange(i32),

    #[error("At most {max} decimal places are supported, got {got}")]
    TooManyDecimalPlaces { got: u32, max: u32 },
}

impl From<ConfigValidationError> for i64 {
    fn from(value: ConfigValidationError) -> i64 {
        match value {
            ConfigValidationError::InvalidJson(_) => -2,
            ConfigValidationError::NoDateFormats => -3,
            ConfigValidationError::InvalidDateFormat(_) => -4,
            ConfigValidationError::UtcOffsetOutOfRange(_) => -5,
            ConfigValidationError::TooManyDecimalPlaces { .. } => -6,
        }
    }
}

/// Every tunable of the rules, so nothing depends on process-wide formatting state.
/// Missing or `null` sections fall back to their defaults.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RulesConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub voltage: SubgroupRanges,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub temporal: TemporalRules,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigValidationError> {
        let config: RulesConfig = serde_json::from_str(json)
            .map_err(|err| ConfigValidationError::InvalidJson(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn voltage(&self, voltage: SubgroupRanges) -> Self {
        self.mutate_clone(|x| x.voltage = voltage)
    }

    pub fn temporal(&self, temporal: TemporalRules) -> Self {
        self.mutate_clone(|x| x.temporal = temporal)
    }

    pub fn rounding(&self, rounding: RoundingPolicy) -> Self {
        self.mutate_clone(|x| x.rounding = rounding)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.temporal.validate()?;
        self.rounding.validate()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
