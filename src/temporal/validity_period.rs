use crate::config::ConfigValidationError;
use crate::observability::labels::Labels;
use crate::stats::Stats;
use crate::temporal::{Clock, DateValidationError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

// Brasília
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;
const MAX_UTC_OFFSET_MINUTES: u32 = 24 * 60;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TemporalRules {
    /// A period must start strictly after this day
    pub minimum_start: NaiveDate,
    /// `strftime` formats tried in order. RFC 3339 timestamps are always accepted.
    pub date_formats: Vec<String>,
    /// Offset used to turn timestamps, including "now", into calendar days
    pub utc_offset_minutes: i32,
}

impl Default for TemporalRules {
    fn default() -> Self {
        TemporalRules {
            minimum_start: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            date_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl TemporalRules {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.date_formats.is_empty() {
            return Err(ConfigValidationError::NoDateFormats);
        }
        for format in &self.date_formats {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigValidationError::InvalidDateFormat(format.clone()));
            }
        }
        if self.utc_offset_minutes.unsigned_abs() >= MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigValidationError::UtcOffsetOutOfRange(
                self.utc_offset_minutes,
            ));
        }
        Ok(())
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    fn to_local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset()).date_naive()
    }

    pub fn parse_date(&self, input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
            return Some(self.to_local_date(timestamp.with_timezone(&Utc)));
        }
        self.date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
    }

    /// Reads `input` as the last day of a period starting on `start`. Needs no
    /// clock. A start that cannot be read fails the check.
    pub fn parse_end_date(
        &self,
        input: &str,
        start: &str,
    ) -> Result<NaiveDate, DateValidationError> {
        let end = self
            .parse_date(input)
            .ok_or(DateValidationError::InvalidFormat)?;
        match self.parse_date(start) {
            Some(start) => end_after_start(end, start),
            None => Err(DateValidationError::NotAfterStart),
        }
    }
}

fn end_after_start(end: NaiveDate, start: NaiveDate) -> Result<NaiveDate, DateValidationError> {
    if end <= start {
        return Err(DateValidationError::NotAfterStart);
    }
    Ok(end)
}

/// A validated (start, end) pair, both days included.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TariffValidityPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TariffValidityPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

pub struct ValidityPeriodValidator<C> {
    rules: TemporalRules,
    clock: C,
    stats: Stats,
}

impl<C: Clock> ValidityPeriodValidator<C> {
    pub fn new(rules: TemporalRules, clock: C) -> Result<Self, ConfigValidationError> {
        rules.validate()?;
        Ok(Self {
            rules,
            clock,
            stats: Stats::default(),
        })
    }

    pub fn with_clock(clock: C) -> Self {
        Self {
            rules: TemporalRules::default(),
            clock,
            stats: Stats::default(),
        }
    }

    /// Tags the rejection metrics emitted by this validator
    pub fn labels(mut self, labels: &Labels) -> Self {
        self.stats = Stats::new(labels);
        self
    }

    pub fn rules(&self) -> &TemporalRules {
        &self.rules
    }

    pub fn today(&self) -> NaiveDate {
        self.rules.to_local_date(self.clock.now())
    }

    pub fn validate_start_date(&self, input: &str) -> Result<NaiveDate, DateValidationError> {
        self.parse(input)
            .and_then(|date| self.check_start(date))
            .inspect_err(|err| self.stats.date_rejected(err))
    }

    pub fn validate_end_date(
        &self,
        input: &str,
        start: &str,
    ) -> Result<NaiveDate, DateValidationError> {
        self.rules
            .parse_end_date(input, start)
            .inspect_err(|err| self.stats.date_rejected(err))
    }

    /// Validates both ends, reporting the start's failure first.
    pub fn validate_period(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TariffValidityPeriod, DateValidationError> {
        let start = self.validate_start_date(start)?;
        let end = self
            .parse(end)
            .and_then(|end| self.check_end(end, start))
            .inspect_err(|err| self.stats.date_rejected(err))?;
        Ok(TariffValidityPeriod { start, end })
    }

    pub fn check_start(&self, date: NaiveDate) -> Result<NaiveDate, DateValidationError> {
        if date > self.today() {
            return Err(DateValidationError::FutureDate);
        }
        if date <= self.rules.minimum_start {
            return Err(DateValidationError::BeforeMinimum {
                minimum: self.rules.minimum_start,
            });
        }
        Ok(date)
    }

    pub fn check_end(
        &self,
        end: NaiveDate,
        start: NaiveDate,
    ) -> Result<NaiveDate, DateValidationError> {
        end_after_start(end, start)
    }

    fn parse(&self, input: &str) -> Result<NaiveDate, DateValidationError> {
        self.rules
            .parse_date(input)
            .ok_or(DateValidationError::InvalidFormat)
    }
}
