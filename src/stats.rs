use crate::observability::labels::{Labels, NO_LABEL};
use crate::temporal::DateValidationError;
use metrics::counter;

const OUTCOME: &str = "outcome";
const REASON: &str = "reason";

/// Counters emitted by the rules. Handles are looked up on every call so the
/// recorder installed at that time receives them.
pub struct Stats {
    labels: Labels,
}

impl Stats {
    pub fn new(labels: &Labels) -> Self {
        Stats {
            labels: labels.clone(),
        }
    }

    pub fn identifier_checked(&self, valid: bool) {
        let outcome = if valid { "valid" } else { "invalid" };
        counter!(
            "fiscal_identifier.checks",
            self.labels.with(OUTCOME, outcome)
        )
        .increment(1);
    }

    pub fn date_rejected(&self, err: &DateValidationError) {
        counter!(
            "validity_period.rejections",
            self.labels.with(REASON, err.reason())
        )
        .increment(1);
    }

    pub fn comparison_built(&self, months: usize, unavailable_months: usize) {
        counter!("comparison.builds", self.labels.clone()).increment(1);
        counter!("comparison.months", self.labels.clone()).increment(months as u64);
        counter!("comparison.unavailable_months", self.labels.clone())
            .increment(unavailable_months as u64);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new(&NO_LABEL)
    }
}
