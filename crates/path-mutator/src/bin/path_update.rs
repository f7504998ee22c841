//! `path-update` — set a value at a property path.
//!
//! Usage:
//!   path-update '<path>' '<value-json>'
//!
//! The document is read from stdin and the updated copy is written to stdout.

use path_mutator::cli::update_document;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (path, value) = match (args.get(1), args.get(2)) {
        (Some(p), Some(v)) => (p.clone(), v.clone()),
        _ => {
            eprintln!("Usage: path-update '<path>' '<value-json>'");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = match update_document(buf.trim(), &path, &value) {
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
