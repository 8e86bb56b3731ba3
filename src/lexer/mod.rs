//! Turns source text into tokens.
//!
//! The lexical grammar is almost context-free: a single forward cursor over
//! the characters with one-character lookahead decides every token except
//! `-`, which also looks back at the last token already emitted. After an
//! operand (`IntLit` or `Name`) a `-` is the subtraction operator; before a
//! digit it folds into a negative integer literal; a `-` that is neither is
//! an error.
//!
//! Only spaces and newlines are whitespace. Every other character that does
//! not start a token fails the whole tokenize call immediately.

mod token;

use std::{iter::Peekable, str::Chars};

use Token::*;
pub(crate) use token::*;

use crate::LexError;

/// A lexer over a source text.
pub(crate) struct Lexer<'a> {
	/// User input source code iterator
	source_iter: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self { Self { source_iter: source.chars().peekable() } }

	/// Consume the entire input and return the token sequence.
	pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
		let mut tokens = Vec::new();
		while let Some(&next) = self.source_iter.peek() {
			match next {
				' ' | '\n' => {
					self.advance();
				}
				'=' => {
					self.advance();
					tokens.push(Assign);
				}
				';' => {
					self.advance();
					tokens.push(Semicolon);
				}
				'(' => {
					self.advance();
					tokens.push(OpenParen);
				}
				')' => {
					self.advance();
					tokens.push(CloseParen);
				}
				'+' => {
					self.advance();
					tokens.push(BinOp(Operator::Add));
				}
				'*' => {
					self.advance();
					tokens.push(BinOp(Operator::Mul));
				}
				'/' => {
					self.advance();
					tokens.push(BinOp(Operator::Div));
				}
				'-' => {
					self.advance();
					let token = self.minus(tokens.last())?;
					tokens.push(token);
				}
				c if c.is_ascii_digit() => {
					let value = self.number();
					tokens.push(IntLit(value));
				}
				c if c.is_ascii_alphabetic() => {
					let word = self.word();
					tokens.push(Token::keyword_or_name(word));
				}
				c => return Err(LexError::UnexpectedCharacter(c)),
			}
		}
		Ok(tokens)
	}

	/// Decide what a just-consumed `-` means from the last emitted token.
	fn minus(&mut self, last: Option<&Token>) -> Result<Token, LexError> {
		if last.is_some_and(Token::is_operand) {
			return Ok(BinOp(Operator::Sub));
		}
		if self.peek().is_some_and(|c| c.is_ascii_digit()) {
			return Ok(IntLit(-self.number()));
		}
		Err(LexError::DanglingMinus)
	}

	/// Consume a run of digits, accumulating the base-10 value left to right.
	/// Leading zeros are allowed; accumulation wraps rather than checks.
	fn number(&mut self) -> i64 {
		let mut value = 0i64;
		while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
			self.advance();
			value = value.wrapping_mul(10).wrapping_add(digit as i64);
		}
		value
	}

	/// Consume a word of letters and digits.
	fn word(&mut self) -> String {
		let mut word = String::new();
		while let Some(c) = self.peek() {
			if !c.is_ascii_alphanumeric() {
				break;
			}
			self.advance();
			word.push(c);
		}
		word
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> { self.source_iter.next() }

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().copied() }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lex(input: &str, ok: bool) {
		let result = Lexer::new(input).tokenize();
		assert!(result.is_ok() == ok);
	}

	#[test]
	fn lex_tokens() {
		lex("", true);
		lex("(", true);
		lex("()", true);
		lex(" ( ) ", true);
		lex("= ; ( )", true);
		lex("12345", true);
		lex("let", true);
		lex("return", true);
		lex("x", true);
		lex("@", false);
		lex("你好", false);
	}

	#[test]
	fn lex_statement() {
		let tokens = Lexer::new("let x = 3 + 4;").tokenize().unwrap();
		assert_eq!(tokens, vec![
			Let,
			Name("x".to_string()),
			Assign,
			IntLit(3),
			BinOp(Operator::Add),
			IntLit(4),
			Semicolon
		]);
	}

	#[test]
	fn lex_unexpected_character() {
		let result = Lexer::new("let x = 3 # 4;").tokenize();
		assert_eq!(result, Err(LexError::UnexpectedCharacter('#')));
	}

	#[test]
	fn lex_keywords() {
		assert_eq!(Lexer::new("let").tokenize().unwrap(), vec![Let]);
		assert_eq!(Lexer::new("return").tokenize().unwrap(), vec![Return]);
		// a keyword prefix is still a name
		assert_eq!(Lexer::new("letter").tokenize().unwrap(), vec![Name("letter".to_string())]);
		assert_eq!(Lexer::new("returned").tokenize().unwrap(), vec![Name("returned".to_string())]);
		assert_eq!(Lexer::new("x1").tokenize().unwrap(), vec![Name("x1".to_string())]);
	}

	#[test]
	fn lex_numbers() {
		assert_eq!(Lexer::new("0").tokenize().unwrap(), vec![IntLit(0)]);
		assert_eq!(Lexer::new("007").tokenize().unwrap(), vec![IntLit(7)]);
		assert_eq!(Lexer::new("12345").tokenize().unwrap(), vec![IntLit(12345)]);
	}

	#[test]
	fn lex_minus_after_operand_is_subtraction() {
		assert_eq!(Lexer::new("3 - 5").tokenize().unwrap(), vec![
			IntLit(3),
			BinOp(Operator::Sub),
			IntLit(5)
		]);
		assert_eq!(Lexer::new("3-5").tokenize().unwrap(), vec![IntLit(3), BinOp(Operator::Sub), IntLit(5)]);
		assert_eq!(Lexer::new("x - 5").tokenize().unwrap(), vec![
			Name("x".to_string()),
			BinOp(Operator::Sub),
			IntLit(5)
		]);
	}

	#[test]
	fn lex_minus_before_digit_is_negative_literal() {
		assert_eq!(Lexer::new("-5").tokenize().unwrap(), vec![IntLit(-5)]);
		assert_eq!(Lexer::new("(-5)").tokenize().unwrap(), vec![OpenParen, IntLit(-5), CloseParen]);
		// a close paren is not an operand, so the minus folds into the literal
		assert_eq!(Lexer::new("(1) -2").tokenize().unwrap(), vec![
			OpenParen,
			IntLit(1),
			CloseParen,
			IntLit(-2)
		]);
	}

	#[test]
	fn lex_dangling_minus() {
		assert_eq!(Lexer::new("-").tokenize(), Err(LexError::DanglingMinus));
		assert_eq!(Lexer::new("- 5").tokenize(), Err(LexError::DanglingMinus));
		assert_eq!(Lexer::new("-+").tokenize(), Err(LexError::DanglingMinus));
	}

	#[test]
	fn lex_whitespace() {
		lex("  \n  ", true);
		// only spaces and newlines are whitespace
		lex("\t", false);
	}
}
