use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "intlet", about = "Run programs in a tiny integer language")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Start an interactive prompt
	Repl,
}
