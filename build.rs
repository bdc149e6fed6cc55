//! Build script to generate the embedded puzzle catalog
//!
//! Reads the tab-separated puzzle file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Columns: id, year, title, four hints, explanation
const FIELD_COUNT: usize = 8;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/puzzles.tsv",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Built-in historical puzzles",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/puzzles.tsv");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<Vec<&str>> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            assert!(
                fields.len() == FIELD_COUNT,
                "{input_path}:{}: expected {FIELD_COUNT} tab-separated fields, got {}",
                number + 1,
                fields.len()
            );
            fields
        })
        .collect();
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} puzzles)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[PuzzleRecord] = &[").unwrap();

    for fields in records {
        writeln!(output, "    PuzzleRecord {{").unwrap();
        writeln!(output, "        id: {:?},", fields[0]).unwrap();
        writeln!(output, "        year: {:?},", fields[1]).unwrap();
        writeln!(output, "        title: {:?},", fields[2]).unwrap();
        writeln!(
            output,
            "        hints: [{:?}, {:?}, {:?}, {:?}],",
            fields[3], fields[4], fields[5], fields[6]
        )
        .unwrap();
        writeln!(output, "        explanation: {:?},", fields[7]).unwrap();
        writeln!(output, "    }},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
