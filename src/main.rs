//! Fixed Polyomino Enumerator
//!
//! Enumerates all fixed polyominoes with a given number of unit squares
//! (1 to 7), prints the total, and draws each shape as ASCII art.
//! Rotations and reflections are counted as distinct shapes.

use clap::Parser;

use ominoes::report;

/// Enumerates and draws all fixed polyominoes with the given number of squares.
#[derive(Parser)]
#[command(name = "ominoes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of unit squares per polyomino (1-7).
    squares: u32,
}

fn main() {
    let cli = Cli::parse();

    match report(cli.squares) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
