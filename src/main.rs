//! # Labl
//!
//! Command line interpreter for the Labl language.
//! `labl <sourcefile>` runs a program to completion.

use std::fs;
use std::process::exit;

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "labl".to_string());
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: {} <sourcefile>", program);
            exit(1);
        }
    };
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: {}", path, error);
            exit(1);
        }
    };
    exit(labl::term::main(&source));
}
