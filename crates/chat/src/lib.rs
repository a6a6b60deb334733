//! Chat domain module: transcript turns and the product query matcher.
//!
//! The matcher is a total function over the catalog and any string input.
//! A miss is a normal outcome answered with a fixed string, never an
//! error.

pub mod matcher;
pub mod turn;

pub use matcher::{answer, find_match, NOT_FOUND_ANSWER};
pub use turn::{ChatTurn, Role};
