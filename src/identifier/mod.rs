mod cnpj_checksum;
mod fiscal_identifier;
mod format;

pub use crate::identifier::cnpj_checksum::{
    check_digits, FiscalIdentifierChecksum, FISCAL_IDENTIFIER_DIGIT_COUNT,
};
pub use crate::identifier::fiscal_identifier::{FiscalIdentifier, IdentifierError};
pub use crate::identifier::format::{format_fiscal_identifier, strip_fiscal_identifier};

use crate::stats::Stats;

pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// Collects the ASCII digits of `input`, ignoring punctuation and any other character.
fn collect_digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Checks a fiscal identifier (CNPJ) as typed by a user. Punctuation is ignored,
/// and a missing or empty value is never valid.
pub fn is_valid_fiscal_identifier(raw: Option<&str>) -> bool {
    let valid = raw.is_some_and(|raw| FiscalIdentifierChecksum.is_valid(raw));
    Stats::default().identifier_checked(valid);
    valid
}

#[cfg(test)]
mod test {
    use crate::identifier::*;

    #[test]
    fn test_collect_digits_skips_separators() {
        assert_eq!(collect_digits("12.3/4-5"), vec![1, 2, 3, 4, 5]);
        assert_eq!(collect_digits("abc"), Vec::<u32>::new());
        // full-width digits are not ASCII digits
        assert_eq!(collect_digits("１２3"), vec![3]);
    }

    #[test]
    fn test_degenerate_inputs_are_invalid() {
        assert!(!is_valid_fiscal_identifier(None));
        assert!(!is_valid_fiscal_identifier(Some("")));
        assert!(!is_valid_fiscal_identifier(Some("   ")));
        assert!(!is_valid_fiscal_identifier(Some("..//--")));
    }

    #[test]
    fn test_known_identifier() {
        assert!(is_valid_fiscal_identifier(Some("12345678000195")));
        assert!(is_valid_fiscal_identifier(Some("12.345.678/0001-95")));
    }
}
