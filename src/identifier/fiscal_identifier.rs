use crate::identifier::cnpj_checksum::{first_check_digit, second_check_digit};
use crate::identifier::{collect_digits, format_fiscal_identifier, FISCAL_IDENTIFIER_DIGIT_COUNT};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HEADQUARTERS_BRANCH: &str = "0001";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("A CNPJ must have 14 digits, found {0}")]
    WrongLength(usize),

    /// `position` is 13 or 14, the 1-based index of the mismatching check digit
    #[error("Check digit {position} does not match")]
    CheckDigitMismatch { position: usize },
}

impl From<IdentifierError> for i64 {
    fn from(value: IdentifierError) -> i64 {
        match value {
            IdentifierError::WrongLength(_) => -2,
            IdentifierError::CheckDigitMismatch { .. } => -3,
        }
    }
}

/// A CNPJ whose check digits have been verified. Holds only the 14 digits,
/// punctuation is added back by [Display](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiscalIdentifier(String);

impl FiscalIdentifier {
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let digits = collect_digits(raw);
        if digits.len() != FISCAL_IDENTIFIER_DIGIT_COUNT {
            return Err(IdentifierError::WrongLength(digits.len()));
        }
        if first_check_digit(&digits[..12]) != digits[12] {
            return Err(IdentifierError::CheckDigitMismatch { position: 13 });
        }
        if second_check_digit(&digits[..13]) != digits[13] {
            return Err(IdentifierError::CheckDigitMismatch { position: 14 });
        }
        Ok(FiscalIdentifier(
            raw.chars().filter(char::is_ascii_digit).collect(),
        ))
    }

    /// The bare 14 digits
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The 8-digit root shared by every branch of the same company
    pub fn base(&self) -> &str {
        &self.0[..8]
    }

    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }
}

impl fmt::Display for FiscalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_fiscal_identifier(Some(&self.0)))
    }
}

impl FromStr for FiscalIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FiscalIdentifier::parse(s)
    }
}

impl Serialize for FiscalIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FiscalIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FiscalIdentifier::parse(&raw).map_err(serde::de::Error::custom)
    }
}
