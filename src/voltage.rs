use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Electrical supply subgroups of high voltage consumer units, by nominal supply voltage.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Subgroup {
    /// Underground distribution, up to 2.3 kV
    #[serde(rename = "AS")]
    #[strum(serialize = "AS")]
    As,
    A4,
    A3,
    #[serde(rename = "A3a")]
    #[strum(serialize = "A3a")]
    A3a,
    A2,
    A1,
}

const AS_MAX_KV: f64 = 2.3;
const A4_MAX_KV: f64 = 25.0;
const A3_MIN_KV: f64 = 30.0;
const A3_MAX_KV: f64 = 40.0;
const A3A_KV: f64 = 60.0;
const A2_LOWER_KV: f64 = 88.0;
const A2_UPPER_KV: f64 = 138.0;
const A1_MIN_KV: f64 = 230.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum A2Rule {
    /// `v <= 88 && v >= 138`. No reading satisfies it, so nothing is ever A2.
    #[default]
    AsSpecified,
    /// `88 < v < 138`
    Corrected,
}

impl A2Rule {
    fn matches(&self, voltage_kv: f64) -> bool {
        match self {
            A2Rule::AsSpecified => at_most_and_at_least(voltage_kv, A2_LOWER_KV, A2_UPPER_KV),
            A2Rule::Corrected => voltage_kv > A2_LOWER_KV && voltage_kv < A2_UPPER_KV,
        }
    }
}

fn at_most_and_at_least(value: f64, at_most: f64, at_least: f64) -> bool {
    value <= at_most && value >= at_least
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SubgroupRanges {
    pub a2_rule: A2Rule,
}

impl SubgroupRanges {
    pub fn new(a2_rule: A2Rule) -> Self {
        Self { a2_rule }
    }

    /// The first matching range wins. Readings falling between ranges, missing
    /// readings and NaN have no subgroup.
    pub fn classify(&self, voltage_kv: Option<f64>) -> Option<Subgroup> {
        let v = voltage_kv?;
        if v <= AS_MAX_KV {
            Some(Subgroup::As)
        } else if v <= A4_MAX_KV {
            Some(Subgroup::A4)
        } else if (A3_MIN_KV..=A3_MAX_KV).contains(&v) {
            Some(Subgroup::A3)
        } else if v == A3A_KV {
            Some(Subgroup::A3a)
        } else if self.a2_rule.matches(v) {
            Some(Subgroup::A2)
        } else if v >= A1_MIN_KV {
            Some(Subgroup::A1)
        } else {
            None
        }
    }
}

pub fn classify_supply_voltage(voltage_kv: Option<f64>) -> Option<Subgroup> {
    SubgroupRanges::default().classify(voltage_kv)
}

/// The label shown next to a reading, empty when it has no subgroup.
pub fn subgroup_label(voltage_kv: Option<f64>) -> &'static str {
    classify_supply_voltage(voltage_kv).map_or("", Into::into)
}

#[cfg(test)]
mod test {
    use crate::voltage::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_boundaries() {
        let cases = vec![
            (0.0, Some(Subgroup::As)),
            (2.3, Some(Subgroup::As)),
            (2.31, Some(Subgroup::A4)),
            (13.8, Some(Subgroup::A4)),
            (25.0, Some(Subgroup::A4)),
            (30.0, Some(Subgroup::A3)),
            (34.5, Some(Subgroup::A3)),
            (40.0, Some(Subgroup::A3)),
            (60.0, Some(Subgroup::A3a)),
            (230.0, Some(Subgroup::A1)),
            (500.0, Some(Subgroup::A1)),
        ];
        for (voltage, expected) in cases {
            assert_eq!(classify_supply_voltage(Some(voltage)), expected, "{voltage}");
        }
    }

    #[test]
    fn test_gaps_have_no_subgroup() {
        for voltage in [25.5, 29.99, 40.01, 59.9, 60.1, 88.0, 100.0, 138.0, 229.9] {
            assert_eq!(classify_supply_voltage(Some(voltage)), None, "{voltage}");
        }
    }

    #[test]
    fn test_a2_is_unreachable_by_default() {
        let mut voltage = -10.0;
        while voltage < 1000.0 {
            assert_ne!(classify_supply_voltage(Some(voltage)), Some(Subgroup::A2));
            voltage += 0.5;
        }
    }

    #[test]
    fn test_corrected_a2_rule() {
        let ranges = SubgroupRanges::new(A2Rule::Corrected);
        assert_eq!(ranges.classify(Some(88.0)), None);
        assert_eq!(ranges.classify(Some(88.1)), Some(Subgroup::A2));
        assert_eq!(ranges.classify(Some(100.0)), Some(Subgroup::A2));
        assert_eq!(ranges.classify(Some(137.9)), Some(Subgroup::A2));
        assert_eq!(ranges.classify(Some(138.0)), None);
        // other ranges are untouched
        assert_eq!(ranges.classify(Some(60.0)), Some(Subgroup::A3a));
        assert_eq!(ranges.classify(Some(230.0)), Some(Subgroup::A1));
    }

    #[test]
    fn test_non_numeric_readings() {
        assert_eq!(classify_supply_voltage(None), None);
        assert_eq!(classify_supply_voltage(Some(f64::NAN)), None);
        assert_eq!(classify_supply_voltage(Some(f64::INFINITY)), Some(Subgroup::A1));
        assert_eq!(classify_supply_voltage(Some(f64::NEG_INFINITY)), Some(Subgroup::As));
    }

    #[test]
    fn test_labels() {
        assert_eq!(subgroup_label(Some(2.3)), "AS");
        assert_eq!(subgroup_label(Some(60.0)), "A3a");
        assert_eq!(subgroup_label(Some(100.0)), "");
        assert_eq!(subgroup_label(None), "");

        let labels: Vec<String> = Subgroup::iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["AS", "A4", "A3", "A3a", "A2", "A1"]);
        for subgroup in Subgroup::iter() {
            assert_eq!(Subgroup::from_str(subgroup.as_ref()), Ok(subgroup));
        }
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&Subgroup::A3a).unwrap(), "\"A3a\"");
        assert_eq!(
            serde_json::from_str::<Subgroup>("\"AS\"").unwrap(),
            Subgroup::As
        );
        let ranges: SubgroupRanges = serde_json::from_str(r#"{"a2_rule":"corrected"}"#).unwrap();
        assert_eq!(ranges.a2_rule, A2Rule::Corrected);
        let ranges: SubgroupRanges = serde_json::from_str("{}").unwrap();
        assert_eq!(ranges.a2_rule, A2Rule::AsSpecified);
    }
}
