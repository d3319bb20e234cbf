//! String-to-number coercion for sheet cells.

use rust_decimal::Decimal;

/// Strips every character that is not a digit, a decimal point or a minus
/// sign, then parses the remainder. "11.45%" and "1,234u" both coerce.
///
/// Returns None when nothing parseable remains, so callers keep their prior
/// default instead of ending up with an undefined field.
pub fn coerce_decimal(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().ok()
}

/// Digits-only coercion for bet counts.
pub fn coerce_count(raw: &str) -> Option<u32> {
    let cleaned: String = raw.chars().filter(char::is_ascii_digit).collect();
    cleaned.parse().ok()
}
