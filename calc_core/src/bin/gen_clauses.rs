//! Generate CLAUSES.md from the clause registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-clauses [output-path]
//! ```
//!
//! Without an argument the file is written to `calc_core/CLAUSES.md`.

use std::fs;
use std::path::PathBuf;

use calc_core::clauses::generate_clauses_markdown;

fn main() {
    println!("Generating CLAUSES.md...");

    let markdown = generate_clauses_markdown();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("calc_core/CLAUSES.md"));

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
