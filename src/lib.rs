//! # Line BASIC
//!
//! A small integer BASIC with numbered lines, in the style of the
//! interactive interpreters of the 1970s.
//!
//! Programs are typed at the prompt a line at a time. Numbered lines are
//! stored, everything else runs right away. Values are 32-bit integers.
//!
//! ```text
//! 10 LET N = 3
//! 20 PRINT N
//! 30 LET N = N - 1
//! 40 IF N > 0 THEN 20
//! RUN
//! 3
//! 2
//! 1
//! ```
//!
//! The library side is [`lang`], which turns source lines into statements,
//! and [`mach`], which stores and runs them. [`mach::Runtime`] is the
//! whole session and is driven by [`mach::Runtime::execute`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
