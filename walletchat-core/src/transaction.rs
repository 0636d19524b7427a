//! Transaction types shared between the interpreter and its consumers

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether money came into or left the wallet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "debit")]
    Debit,
}

impl Direction {
    /// Sign applied to the amount when a wallet balance is updated
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Credit => 1.0,
            Direction::Debit => -1.0,
        }
    }
}

/// Spending categories matched deterministically from message keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Income,
    Shopping,
    Entertainment,
    Bills,
    Miscellaneous,
}

impl Category {
    /// Label as shown to users and stored on transaction records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Income => "Income",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Category used when no keyword matched: income messages land in
    /// Income, expense messages in Miscellaneous.
    pub fn fallback_for(direction: Direction) -> Category {
        match direction {
            Direction::Credit => Category::Income,
            Direction::Debit => Category::Miscellaneous,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction interpreted from a single chat message.
///
/// Constructed once per parse call and handed straight to the caller;
/// the interpreter keeps no state between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    pub direction: Direction,
    /// Always positive; `direction` carries the sign
    pub amount: f64,
    pub category: Category,
    /// The original user message, untouched
    pub description: String,
}

impl ParsedTransaction {
    /// Balance delta for the owning wallet: +amount for credit, -amount
    /// for debit.
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.direction.sign()
    }

    /// Returns true if this transaction decreases the wallet balance
    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Debit
    }

    /// Returns true if this transaction increases the wallet balance
    pub fn is_income(&self) -> bool {
        self.direction == Direction::Credit
    }
}

/// Why a message could not be interpreted as a transaction.
///
/// All variants are recoverable; the chat layer turns them into a
/// clarification prompt. Retrying the same input is pointless since
/// interpretation is deterministic.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No numeric token anywhere in the message
    #[error("could not find a valid amount in the message; include a number such as 50, 50k, or 1.5m")]
    AmountNotFound,
    /// A numeric token resolved to zero, negative, or non-finite
    #[error("invalid amount; please provide a positive number")]
    InvalidAmount,
    /// Neither a directional keyword nor a numeric token was found
    #[error("unknown transaction type; try keywords like 'spent', 'bought', 'received', or 'earned'")]
    UnparseableInput,
}
