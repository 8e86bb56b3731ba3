//! Expression AST nodes.
//!
//! An expression is an owned tree: each node is exclusively owned by its
//! parent, built once during parsing and read-only afterwards.

use crate::lexer::Operator;

/// Expression AST nodes
#[derive(Debug)]
pub(crate) enum Expression {
	IntegerLiteral(i64),
	Identifier(String),
	Binary { left: Box<Expression>, operator: Operator, right: Box<Expression> },
}

impl Expression {
	pub fn binary(left: Box<Self>, operator: Operator, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Binary { left, operator, right })
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::IntegerLiteral(value) => write!(f, "{value}"),
			Expression::Identifier(name) => write!(f, "{name}"),
			Expression::Binary { left, operator, right } => write!(f, "({operator} {left} {right})"),
		}
	}
}
