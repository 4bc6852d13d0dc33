mod aggregator;
mod cost_value;
mod rounding;

pub use crate::comparison::aggregator::{
    build_comparison, ComparisonRow, ComparisonTotals, ContractComparison,
};
pub use crate::comparison::cost_value::{CostValue, MonthlyContractFigure};
pub use crate::comparison::rounding::{RoundingMode, RoundingPolicy};
