/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::{parse, parse_expression};

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;
