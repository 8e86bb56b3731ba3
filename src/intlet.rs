use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{IntletError, interpreter::Interpreter, lexer::Lexer, parser::Parser};

/// The entry point tying the lexer, parser, and interpreter together.
pub struct Intlet;

impl Intlet {
	/// Read a source file and run it as one program.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IntletError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Run the interactive prompt. Each line is a standalone program with its
	/// own environment.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited intlet repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if let Err(e) = self.run(input.trim()) {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}
}

impl Intlet {
	/// Run a complete source text through all three stages. Each stage either
	/// fully succeeds or the whole run stops with its first error.
	fn run(&self, source: &str) -> Result<(), IntletError> {
		let mut lexer = Lexer::new(source);
		let tokens = lexer.tokenize()?;
		let mut parser = Parser::new(tokens);
		let statements = parser.parse()?;
		let mut interpreter = Interpreter::new();
		interpreter.execute(statements)?;

		Ok(())
	}
}
