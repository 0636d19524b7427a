//! Orchestrator: one chat message in, one transaction record out.

use walletchat_core::{Category, ParseError, ParsedTransaction};

use crate::amount::extract_amount;
use crate::category::extract_category;
use crate::direction::classify_direction;
use crate::normalize::normalize;

/// Interpret a free-form chat message (English or Vietnamese) as a
/// wallet transaction.
///
/// Stateless and deterministic: the same input always yields the same
/// record or the same error. `description` on the result is the original
/// message, not the normalized form.
pub fn parse_transaction(text: &str) -> Result<ParsedTransaction, ParseError> {
    let normalized = normalize(text);

    let direction = classify_direction(&normalized).ok_or(ParseError::UnparseableInput)?;
    let amount = extract_amount(&normalized)?;
    let category =
        extract_category(&normalized).unwrap_or_else(|| Category::fallback_for(direction));

    Ok(ParsedTransaction {
        direction,
        amount,
        category,
        description: text.to_string(),
    })
}
