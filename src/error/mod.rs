pub mod lexer;
pub mod parser;
pub mod runtime;

/// Top-level error for a whole run of the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum IntletError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The lexer hit input it does not recognize
	#[error("Lex error: {0}")]
	LexError(#[from] lexer::LexError),
	/// The token stream did not match the grammar
	#[error("Parse error: {0}")]
	ParseError(#[from] parser::ParseError),
	/// Evaluation failed
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] runtime::RuntimeError),
}
