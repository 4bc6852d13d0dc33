use crate::identifier::{collect_digits, Validator};

pub struct FiscalIdentifierChecksum;

pub const FISCAL_IDENTIFIER_DIGIT_COUNT: usize = 14;
const BASE_DIGIT_COUNT: usize = 12;

const FIRST_CHECK_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for FiscalIdentifierChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid(&self, input: &str) -> bool {
        let digits = collect_digits(input);
        if digits.len() != FISCAL_IDENTIFIER_DIGIT_COUNT {
            return false;
        }

        let v1 = check_digit(&digits[..BASE_DIGIT_COUNT], &FIRST_CHECK_WEIGHTS);
        if v1 != digits[BASE_DIGIT_COUNT] {
            return false;
        }
        // The second digit is weighted over the base plus the first check digit
        let v2 = check_digit(&digits[..BASE_DIGIT_COUNT + 1], &SECOND_CHECK_WEIGHTS);
        v2 == digits[BASE_DIGIT_COUNT + 1]
    }
}

/// Computes both check digits for a 12-digit base. Punctuation in `base` is ignored.
/// Returns `None` unless exactly 12 digits are found.
pub fn check_digits(base: &str) -> Option<(u32, u32)> {
    let mut digits = collect_digits(base);
    if digits.len() != BASE_DIGIT_COUNT {
        return None;
    }
    let v1 = check_digit(&digits, &FIRST_CHECK_WEIGHTS);
    digits.push(v1);
    let v2 = check_digit(&digits, &SECOND_CHECK_WEIGHTS);
    Some((v1, v2))
}

pub(crate) fn first_check_digit(base: &[u32]) -> u32 {
    check_digit(base, &FIRST_CHECK_WEIGHTS)
}

pub(crate) fn second_check_digit(base_and_first: &[u32]) -> u32 {
    check_digit(base_and_first, &SECOND_CHECK_WEIGHTS)
}

#[inline]
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
