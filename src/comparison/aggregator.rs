use crate::comparison::{CostValue, MonthlyContractFigure, RoundingPolicy};
use crate::stats::Stats;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub month: String,
    pub current: CostValue,
    pub recommended: CostValue,
    /// `recommended - current`. Positive means the recommended contract costs more.
    pub difference: CostValue,
}

impl From<&MonthlyContractFigure> for ComparisonRow {
    fn from(figure: &MonthlyContractFigure) -> Self {
        let difference = match (figure.current, figure.recommended) {
            (CostValue::Available(current), CostValue::Available(recommended)) => recommended
                .checked_sub(current)
                .map_or(CostValue::Unavailable, CostValue::Available),
            _ => CostValue::Unavailable,
        };
        ComparisonRow {
            month: figure.month.clone(),
            current: figure.current,
            recommended: figure.recommended,
            difference,
        }
    }
}

impl ComparisonRow {
    pub fn is_complete(&self) -> bool {
        self.difference.is_available()
    }
}

/// Sums over the months where both contracts have a cost. Other months are left
/// out of all three sums instead of counting as zero, and so is a month whose
/// amounts would overflow the sums.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComparisonTotals {
    pub current: Decimal,
    pub recommended: Decimal,
    /// Always `recommended - current`
    pub difference: Decimal,
    pub included_months: usize,
}

impl ComparisonTotals {
    /// Adds a month to the sums. Returns false, leaving the sums untouched, when
    /// any of them would overflow.
    fn include(&mut self, current: Decimal, recommended: Decimal) -> bool {
        let sums = self
            .current
            .checked_add(current)
            .zip(self.recommended.checked_add(recommended));
        let Some((current, recommended)) = sums else {
            return false;
        };
        let Some(difference) = recommended.checked_sub(current) else {
            return false;
        };
        self.current = current;
        self.recommended = recommended;
        self.difference = difference;
        self.included_months += 1;
        true
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractComparison {
    pub rows: Vec<ComparisonRow>,
    pub totals: ComparisonTotals,
}

impl ContractComparison {
    pub fn unavailable_months(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(|row| !row.is_complete())
            .map(|row| row.month.as_str())
    }

    /// How much the recommended contract saves over the included months, if it is cheaper
    pub fn savings(&self) -> Option<Decimal> {
        if self.totals.difference.is_sign_negative() && !self.totals.difference.is_zero() {
            Some(-self.totals.difference)
        } else {
            None
        }
    }

    /// Rounds every amount for display. The totals difference is taken from the
    /// rounded totals so the table still adds up.
    pub fn rounded(&self, policy: &RoundingPolicy) -> ContractComparison {
        let rows = self
            .rows
            .iter()
            .map(|row| ComparisonRow {
                month: row.month.clone(),
                current: row.current.map(|v| policy.round(v)),
                recommended: row.recommended.map(|v| policy.round(v)),
                difference: row.difference.map(|v| policy.round(v)),
            })
            .collect();
        let current = policy.round(self.totals.current);
        let recommended = policy.round(self.totals.recommended);
        ContractComparison {
            rows,
            totals: ComparisonTotals {
                current,
                recommended,
                difference: recommended
                    .checked_sub(current)
                    .unwrap_or_else(|| policy.round(self.totals.difference)),
                included_months: self.totals.included_months,
            },
        }
    }
}

/// Builds one row per figure, in the given order, plus the totals over complete months.
///
/// A month that cannot be added without overflowing is shown like an incomplete
/// one: its costs are kept and its difference is unavailable.
pub fn build_comparison(figures: &[MonthlyContractFigure]) -> ContractComparison {
    let mut totals = ComparisonTotals::default();
    let rows: Vec<ComparisonRow> = figures
        .iter()
        .map(|figure| {
            let mut row = ComparisonRow::from(figure);
            if let (CostValue::Available(current), CostValue::Available(recommended)) =
                (row.current, row.recommended)
            {
                if row.is_complete() && !totals.include(current, recommended) {
                    row.difference = CostValue::Unavailable;
                }
            }
            row
        })
        .collect();

    Stats::default().comparison_built(rows.len(), rows.len() - totals.included_months);
    ContractComparison { rows, totals }
}
