use clap::Parser;
use intlet::cli::*;

fn main() {
	let intlet = intlet::Intlet;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = intlet.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => intlet.run_prompt(),
	}
}
