//! # A tiny integer language
//!
//! Source text moves through three stages, each one consuming the previous
//! stage's complete output before the next begins:
//!
//! ## Lexing
//!
//! The lexer walks the characters once, left to right, and produces tokens:
//! keywords (`let`, `return`), names, integer literals, the four arithmetic
//! operators, `=`, `;`, and parentheses. Spaces and newlines are skipped.
//!
//! The one context-sensitive rule is `-`. After an operand it is the
//! subtraction operator; immediately before a digit it folds into a negative
//! integer literal, so `-5` is one token while `3 - 5` is three.
//!
//! ## Parsing
//!
//! The parser turns the token sequence into a list of statements. There are
//! exactly two statement forms:
//!
//! ``` text
//! statement  := 'let' NAME '=' expression ';'
//!             | 'return' expression ';'
//! expression := primary (BINOP expression)*
//! primary    := '(' expression ')' | NAME | INT_LIT
//! ```
//!
//! Expressions are parsed by precedence climbing: `* /` bind tighter than
//! `+ -`, and operators of equal strength associate to the left, so
//! `2 + 3 * 4` is `(+ 2 (* 3 4))` and `10 - 3 - 2` is `(- (- 10 3) 2)`.
//!
//! ## Execution
//!
//! The interpreter walks the statements in order against a single mutable
//! environment. `let` binds (or rebinds) a name to the value of its
//! expression; `return` evaluates its expression and prints
//! `OUTPUT: <value>`. Despite its name, `return` does not stop the program;
//! every following statement still runs.
//!
//! ``` text
//! let x = 3 + 4 * 2;
//! return x;
//! ```
//!
//! prints `OUTPUT: 11`.
//!
//! Every stage aborts on its first error; there is no recovery and no
//! partial output.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod intlet;
mod lexer;
mod parser;
mod statement;

pub use error::{IntletError, lexer::LexError, parser::ParseError, runtime::RuntimeError};
pub use intlet::Intlet;
