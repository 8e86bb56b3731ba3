/// Errors produced while turning source text into tokens.
///
/// Lexing stops at the first offending character; no partial token list is
/// returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
	/// A character outside the language's alphabet.
	#[error("Unexpected character '{0}'")]
	UnexpectedCharacter(char),
	/// A `-` with no operand before it and no digit after it.
	#[error("Dangling '-' starts neither a subtraction nor a negative literal")]
	DanglingMinus,
}
