//! Executes the statements produced by the parser.
//!
//! The interpreter walks each statement in order against one environment
//! that persists for the whole run:
//!
//! - **Assignment**: evaluate the right-hand side, then insert or overwrite
//!   the entry keyed by the target name.
//! - **Return**: evaluate the expression and print `OUTPUT: <value>`;
//!   execution continues with the next statement.
//!
//! Expression evaluation is a recursive fold over the tree. Arithmetic is
//! signed 64-bit with truncating division; dividing by zero and reading an
//! undefined variable are fatal runtime errors.

use crate::{environment::Environment, error::runtime::RuntimeError, lexer::Operator, parser::expression::Expression, statement::Statement};

/// Interpreter that executes statements against a single environment.
pub(crate) struct Interpreter {
	environment: Environment,
}

impl Interpreter {
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Execute the statements strictly in order, stopping at the first
	/// runtime error.
	pub fn execute(&mut self, statements: Vec<Statement>) -> Result<(), RuntimeError> {
		for statement in &statements {
			self.execute_statement(statement)?;
		}
		Ok(())
	}

	fn execute_statement(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
		match statement {
			Statement::Assignment { name, value } => {
				let value = self.evaluate(value)?;
				self.environment.define(name.clone(), value);
			}
			// `return` prints; it does not stop the program.
			Statement::Return(expression) => {
				let value = self.evaluate(expression)?;
				println!("OUTPUT: {value}");
			}
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&self, expression: &Expression) -> Result<i64, RuntimeError> {
		Ok(match expression {
			Expression::IntegerLiteral(value) => *value,
			Expression::Identifier(name) => {
				self.environment.get(name).ok_or_else(|| RuntimeError::UndefinedVariable(name.clone()))?
			}
			Expression::Binary { left, operator, right } => {
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				match operator {
					Operator::Add => left + right,
					Operator::Sub => left - right,
					Operator::Mul => left * right,
					Operator::Div => {
						if right == 0 {
							return Err(RuntimeError::DivisionByZero);
						}
						left / right
					}
				}
			}
		})
	}
}
