//! `path-remove` — delete the value at a property path.
//!
//! Usage:
//!   path-remove '<path>' [--strict]
//!
//! The document is read from stdin and the copy without the value is written
//! to stdout. `--strict` leaves missing paths alone instead of creating them.

use path_mutator::cli::remove_document;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let strict = args.iter().any(|a| a == "--strict");
    let path = match args.iter().find(|a| a.as_str() != "--strict") {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a property path.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = match remove_document(buf.trim(), &path, strict) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = writeln!(io::stdout(), "{result}") {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
