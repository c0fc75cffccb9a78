//! An incremental sub-grammar for decimal numeric literals.
//!
//! A host parser that re-parses a command line after every keystroke asks the
//! grammar one question per candidate prefix: is this already a number, could
//! it still become one, or is it dead?
//!
//! ```rust
//! use decimal_grammar::{Classification, Decimal, DecimalOptions};
//!
//! let grammar = Decimal::new(DecimalOptions::default().with_min(50.0));
//!
//! assert_eq!(grammar.classify("4"), Classification::Placeholder);
//! assert_eq!(grammar.classify("50"), Classification::Complete(50.0));
//! assert_eq!(grammar.classify("-5"), Classification::Rejected);
//! ```
//!
//! Classification is a pure function of the prefix and the bounds fixed at
//! construction, so a single [`Decimal`] can be shared across any number of
//! concurrent candidate parses.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classification;
mod error;
mod grammar;
mod lexer;
mod options;
mod range;

#[cfg(test)]
mod tests;

pub use classification::{Admissible, Classification, Suggestion};
pub use error::{LexError, Rejection};
pub use grammar::{Decimal, Keystrokes};
pub use lexer::{Lexeme, Sign, lex};
pub use options::DecimalOptions;
