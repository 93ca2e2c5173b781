/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod eval;
mod listing;
mod operation;
mod program;
mod runtime;
mod var;

pub use eval::eval;
pub use listing::Listing;
pub use operation::Operation;
pub use program::{execute, Cursor, Flow, Program, Step};
pub use runtime::{Event, Runtime, HELP, INPUT_PROMPT, INVALID_NUMBER};
pub use var::Var;

#[cfg(test)]
mod tests;
