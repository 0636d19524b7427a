//! walletchat-nlp: rule-based interpreter turning chat messages into
//! wallet transactions.
//!
//! Single pass over the message: normalize, classify direction, extract
//! the amount, pick a category, assemble the record. Everything is a
//! pure function over the input string; keyword tables and regex
//! patterns are process-wide statics, so concurrent callers need no
//! coordination.

pub mod amount;
pub mod category;
pub mod direction;
pub mod normalize;
pub mod parser;

pub use amount::{extract_amount, has_amount};
pub use category::extract_category;
pub use direction::{classify_direction, is_expense_command, is_income_command};
pub use normalize::normalize;
pub use parser::parse_transaction;
