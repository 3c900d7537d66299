/*!
# Rust Language Module

This Rust module turns script text into lines of tokens and
knows which words are reserved.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::{has_invalid_char, is_ident_char, is_reserved};
pub use lex::lex;
pub use line::Line;
pub use token::{Operator, Word};

/// Zero based position of a line in the script.
pub type LineIndex = usize;
