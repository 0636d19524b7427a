//! Direction classification: did money come in (credit) or go out (debit)?
//!
//! Vietnamese expense cues are checked before anything else. Several of
//! them co-occur with income-sounding words in natural phrasing ("cho"
//! shows up in both giving and receiving), so the expense check must win.

use walletchat_core::{Category, Direction};

use crate::amount::has_amount;
use crate::category::extract_category;

/// Vietnamese expense cues, checked first and short-circuiting
const VIETNAMESE_EXPENSE_KEYWORDS: &[&str] = &[
    "chi",
    "tiêu",
    "mua",
    "trả",
    "thanh toán",
    "phí",
    "hóa đơn",
];

const INCOME_KEYWORDS: &[&str] = &[
    "receive",
    "received",
    "got",
    "earned",
    "income",
    "salary",
    "bonus",
    "found",
    "gave me",
    "paid me",
    "transferred",
    "deposited",
    "added",
    // Vietnamese
    "nhận",
    "được",
    "lương",
    "thưởng",
    "thu nhập",
    "cho",
    "tiền",
];

const EXPENSE_KEYWORDS: &[&str] = &[
    "spent",
    "bought",
    "paid",
    "purchased",
    "expense",
    "cost",
    "buy",
    "spend",
    "payment",
    "fee",
    "bill",
    "pay",
    "monthly",
    "rent",
    // Vietnamese expense cues are handled separately, before income
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Returns true if the normalized text carries an income cue
pub fn is_income_command(text: &str) -> bool {
    contains_any(text, INCOME_KEYWORDS)
}

/// Returns true if the normalized text carries an English expense cue
pub fn is_expense_command(text: &str) -> bool {
    contains_any(text, EXPENSE_KEYWORDS)
}

/// Classify the direction of a normalized message.
///
/// Priority order: Vietnamese expense cues, then income cues, then
/// English expense cues. A message with an amount but no directional
/// keyword defaults to debit, unless the category table says Income or
/// the whole message is the bare digits "100" (a compatibility special
/// case; do not generalize it to small numbers). Returns `None` when
/// there is neither a directional cue nor an amount.
///
/// Matching is unanchored substring search on already-lowercased text;
/// over-matching on keyword fragments is accepted behavior.
pub fn classify_direction(text: &str) -> Option<Direction> {
    if contains_any(text, VIETNAMESE_EXPENSE_KEYWORDS) {
        return Some(Direction::Debit);
    }
    if is_income_command(text) {
        return Some(Direction::Credit);
    }
    if is_expense_command(text) {
        return Some(Direction::Debit);
    }

    if has_amount(text) {
        if extract_category(text) == Some(Category::Income) {
            return Some(Direction::Credit);
        }
        if text.trim() == "100" {
            return Some(Direction::Credit);
        }
        tracing::debug!("no directional keyword; defaulting to debit");
        return Some(Direction::Debit);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_keywords() {
        assert!(is_income_command("i received my salary"));
        assert!(is_income_command("mom gave me money"));
        assert!(is_income_command("nhận lương 5tr"));
        assert!(!is_income_command("spent money on food"));
    }

    #[test]
    fn test_expense_keywords() {
        assert!(is_expense_command("i spent money"));
        assert!(is_expense_command("bought new shoes"));
        assert!(!is_expense_command("got salary"));
    }

    #[test]
    fn test_vietnamese_expense_beats_income() {
        // "trả" wins even though "tiền" is an income keyword
        assert_eq!(
            classify_direction("trả tiền xăng 100k"),
            Some(Direction::Debit)
        );
        // "mua" wins over the English income cue
        assert_eq!(
            classify_direction("mua quà, received from nobody"),
            Some(Direction::Debit)
        );
    }

    #[test]
    fn test_income_before_english_expense() {
        assert_eq!(classify_direction("got 50 from mom"), Some(Direction::Credit));
        assert_eq!(classify_direction("mẹ cho 200k"), Some(Direction::Credit));
    }

    #[test]
    fn test_amount_only_defaults_to_debit() {
        assert_eq!(classify_direction("2,000"), Some(Direction::Debit));
        assert_eq!(classify_direction("45 at the counter"), Some(Direction::Debit));
    }

    #[test]
    fn test_bare_100_defaults_to_credit() {
        // compatibility special case, not a policy
        assert_eq!(classify_direction("100"), Some(Direction::Credit));
        assert_eq!(classify_direction("101"), Some(Direction::Debit));
    }

    #[test]
    fn test_income_category_flips_default() {
        // no directional keyword, but the category table says Income
        assert_eq!(classify_direction("refund 200k"), Some(Direction::Credit));
    }

    #[test]
    fn test_no_signal_is_unknown() {
        assert_eq!(classify_direction("just some text"), None);
    }
}
