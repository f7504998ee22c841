//! `path-get` — print the value at a property path.
//!
//! Usage:
//!   path-get '<path>'
//!
//! The document is read from stdin. Exits with status 1 if nothing is there.

use path_mutator::cli::lookup_path;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
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

    match lookup_path(buf.trim(), &path) {
        Ok(result) => {
            if let Err(e) = writeln!(io::stdout(), "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
