use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount that may be missing because the month had no measurement.
/// On the wire an unavailable amount is `null`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum CostValue {
    Available(Decimal),
    #[default]
    Unavailable,
}

impl CostValue {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            CostValue::Available(value) => Some(*value),
            CostValue::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, CostValue::Available(_))
    }

    pub fn map(self, f: impl FnOnce(Decimal) -> Decimal) -> CostValue {
        match self {
            CostValue::Available(value) => CostValue::Available(f(value)),
            CostValue::Unavailable => CostValue::Unavailable,
        }
    }
}

impl From<Decimal> for CostValue {
    fn from(value: Decimal) -> Self {
        CostValue::Available(value)
    }
}

impl From<Option<Decimal>> for CostValue {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(CostValue::Unavailable, CostValue::Available)
    }
}

impl From<CostValue> for Option<Decimal> {
    fn from(value: CostValue) -> Self {
        value.value()
    }
}

/// One month of a consumer unit's contract, priced under the current contract and
/// under the recommended one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MonthlyContractFigure {
    pub month: String,
    #[serde(default)]
    pub current: CostValue,
    #[serde(default)]
    pub recommended: CostValue,
}

impl MonthlyContractFigure {
    pub fn new(
        month: impl Into<String>,
        current: impl Into<CostValue>,
        recommended: impl Into<CostValue>,
    ) -> Self {
        Self {
            month: month.into(),
            current: current.into(),
            recommended: recommended.into(),
        }
    }
}
