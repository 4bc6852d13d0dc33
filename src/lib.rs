// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod comparison;
mod config;
mod identifier;
mod observability;
mod stats;
mod temporal;
mod validation;
mod voltage;

// This is the public API of the tariff rules library
pub use comparison::{
    build_comparison, ComparisonRow, ComparisonTotals, ContractComparison, CostValue,
    MonthlyContractFigure, RoundingMode, RoundingPolicy,
};
pub use config::{ConfigValidationError, RulesConfig};
pub use identifier::{
    check_digits, format_fiscal_identifier, is_valid_fiscal_identifier, strip_fiscal_identifier,
    FiscalIdentifier, IdentifierError,
};
pub use observability::labels::Labels;
pub use temporal::{
    validate_end_date, validate_start_date, Clock, DateValidationError, FixedClock, SystemClock,
    TariffValidityPeriod, TemporalRules, ValidityPeriodValidator,
};
pub use validation::FieldValidation;
pub use voltage::{classify_supply_voltage, subgroup_label, A2Rule, Subgroup, SubgroupRanges};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::identifier::{FiscalIdentifierChecksum, Validator};
