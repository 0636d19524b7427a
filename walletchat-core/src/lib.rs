//! walletchat-core: transaction types shared across the walletchat workspace

pub mod transaction;

pub use transaction::{Category, Direction, ParseError, ParsedTransaction};
