//! Statements are the top level of the grammar: a program is nothing more
//! than a sequence of them, and execution order is declaration order.

use crate::parser::expression::Expression;

/// A statement in the language.
#[derive(Debug)]
pub(crate) enum Statement {
	/// `let <name> = <expression> ;` — bind or rebind a variable.
	Assignment { name: String, value: Expression },
	/// `return <expression> ;` — print the value and keep executing.
	Return(Expression),
}
