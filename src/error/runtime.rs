/// Errors raised while executing a program.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
	/// A variable was read before any assignment defined it.
	#[error("Identifier '{0}' is not defined")]
	UndefinedVariable(String),
	/// The right-hand side of `/` evaluated to zero.
	#[error("Division by zero")]
	DivisionByZero,
}
