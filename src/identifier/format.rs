use crate::identifier::FISCAL_IDENTIFIER_DIGIT_COUNT;

// XX.XXX.XXX/YYYY-ZZ
const SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Renders up to 14 characters in the `XX.XXX.XXX/XXXX-XX` grouping. Partial input
/// is formatted as far as it goes and anything past 14 characters is dropped. The
/// characters themselves are not checked.
pub fn format_fiscal_identifier(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let mut formatted = String::with_capacity(FISCAL_IDENTIFIER_DIGIT_COUNT + SEPARATORS.len());
    for (idx, c) in raw.chars().take(FISCAL_IDENTIFIER_DIGIT_COUNT).enumerate() {
        if let Some((_, separator)) = SEPARATORS.iter().find(|(at, _)| *at == idx) {
            formatted.push(*separator);
        }
        formatted.push(c);
    }
    formatted
}

/// Keeps the first 14 ASCII digits of `raw`, which is what form state stores.
pub fn strip_fiscal_identifier(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(FISCAL_IDENTIFIER_DIGIT_COUNT)
        .collect()
}
