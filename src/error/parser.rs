#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("Expected identifier in assignment")]
	ExpectedIdentifier,
	#[error("Expected '=' in assignment")]
	ExpectedAssign,
	#[error("Expected expression")]
	ExpectedExpression,
	#[error("Expected ';' after statement")]
	ExpectedSemicolon,
	#[error("Expected ')' in expression")]
	UnterminatedParenthesis,
	#[error("Unexpected token {0}")]
	UnexpectedToken(String),
}
