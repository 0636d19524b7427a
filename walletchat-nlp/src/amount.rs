//! Amount extraction, including colloquial magnitude shorthand.
//!
//! Vietnamese chat messages write amounts as "25k" (25,000), "1.5m" or
//! "5tr" (millions, "tr" short for triệu). Suffixed patterns must run
//! before the bare-number fallback, otherwise "1.5m" would parse as 1.5.

use once_cell::sync::Lazy;
use regex::Regex;
use walletchat_core::ParseError;

/// Suffixed patterns tried in order; first match wins
static SUFFIXED_PATTERNS: Lazy<Vec<(Regex, f64)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)(\d+[.,]?\d*)\s*k\b").unwrap(), 1_000.0),
        (Regex::new(r"(?i)(\d+[.,]?\d*)\s*m\b").unwrap(), 1_000_000.0),
        (Regex::new(r"(?i)(\d+[.,]?\d*)\s*tr\b").unwrap(), 1_000_000.0),
    ]
});

/// Fallback: digits, optional separator, optional trailing digit group
static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)[,.]?(\d+)?").unwrap());

static ANY_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[.,]?\d*").unwrap());

/// Returns true if the text contains any numeric token at all
pub fn has_amount(text: &str) -> bool {
    ANY_NUMBER.is_match(text)
}

/// Extract a positive amount from normalized text.
///
/// Suffixed numerals may use `,` as a decimal point ("1,5k" is 1500).
/// In the bare fallback, a separator followed by exactly three digits is
/// a thousands grouping ("2,000" and "2.000" are both 2000).
pub fn extract_amount(text: &str) -> Result<f64, ParseError> {
    for (pattern, multiplier) in SUFFIXED_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let numeral = caps[1].replace(',', ".");
            let value = numeral
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidAmount)?;
            return validate(value * multiplier);
        }
    }

    let caps = BARE_NUMBER
        .captures(text)
        .ok_or(ParseError::AmountNotFound)?;

    if let Some(tail) = caps.get(2) {
        if tail.as_str().len() == 3 {
            let joined = format!("{}{}", &caps[1], tail.as_str());
            let value = joined
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidAmount)?;
            return validate(value);
        }
    }

    let value = caps[1]
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidAmount)?;
    validate(value)
}

fn validate(value: f64) -> Result<f64, ParseError> {
    if !value.is_finite() || value <= 0.0 {
        tracing::debug!(value, "rejecting non-positive or non-finite amount");
        return Err(ParseError::InvalidAmount);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousand_suffix() {
        assert_eq!(extract_amount("100k").unwrap(), 100_000.0);
        assert_eq!(extract_amount("spent 25k on breakfast").unwrap(), 25_000.0);
    }

    #[test]
    fn test_million_suffixes() {
        assert_eq!(extract_amount("1.5m").unwrap(), 1_500_000.0);
        assert_eq!(extract_amount("nhận lương 5tr").unwrap(), 5_000_000.0);
        assert_eq!(extract_amount("monthly rent 5.5m").unwrap(), 5_500_000.0);
    }

    #[test]
    fn test_comma_as_decimal_point_in_suffixed() {
        assert_eq!(extract_amount("1,5k").unwrap(), 1_500.0);
        assert_eq!(extract_amount("2,5tr").unwrap(), 2_500_000.0);
    }

    #[test]
    fn test_suffix_precedence_over_bare() {
        // without suffix-first ordering this would parse as 1.5
        assert_eq!(extract_amount("earned 1.5m bonus").unwrap(), 1_500_000.0);
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(extract_amount("got 50 from mom").unwrap(), 50.0);
        assert_eq!(extract_amount("paid 120 for taxi").unwrap(), 120.0);
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(extract_amount("2,000").unwrap(), 2_000.0);
        assert_eq!(extract_amount("2.000").unwrap(), 2_000.0);
        assert_eq!(extract_amount("1,234,567").unwrap(), 1_234.0);
    }

    #[test]
    fn test_multiplies_suffix_against_bare_value() {
        let bare = extract_amount("50").unwrap();
        assert_eq!(extract_amount("50k").unwrap(), bare * 1_000.0);
        assert_eq!(extract_amount("50m").unwrap(), bare * 1_000_000.0);
        assert_eq!(extract_amount("50tr").unwrap(), bare * 1_000_000.0);
    }

    #[test]
    fn test_no_number_at_all() {
        assert_eq!(extract_amount("just some text"), Err(ParseError::AmountNotFound));
        assert!(!has_amount("just some text"));
        assert!(has_amount("spent 25k"));
    }

    #[test]
    fn test_zero_is_invalid() {
        assert_eq!(extract_amount("spent 0 today"), Err(ParseError::InvalidAmount));
        assert_eq!(extract_amount("0k"), Err(ParseError::InvalidAmount));
    }
}
