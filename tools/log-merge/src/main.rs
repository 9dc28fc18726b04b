//! log-merge: merge per-log JSON-line event exports into one stream
//!
//! Usage:
//!   log-merge <export.jsonl>...   # concatenate onto stdout
//!
//! Each input file holds one exported event per line. Not every
//! investigation has every log, so any subset of files is accepted, but at
//! least one is required. Records missing a "source" field get one filled
//! in from the file stem, so downstream session reconstruction can tell the
//! logs apart.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

fn source_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn merge_file(path: &str, out: &mut impl Write) -> usize {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("log-merge: cannot read {}: {}", path, e);
        process::exit(2);
    });

    let source = source_from_path(path);
    let mut count = 0;

    for (idx, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut value: serde_json::Value = match serde_json::from_str(trimmed) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("log-merge: {}:{}: invalid JSON: {}", path, idx + 1, e);
                continue;
            }
        };

        if let Some(obj) = value.as_object_mut() {
            let missing = obj
                .get("source")
                .map(|s| s.as_str().map(str::is_empty).unwrap_or(true))
                .unwrap_or(true);
            if missing {
                obj.insert("source".into(), serde_json::Value::String(source.clone()));
            }
        }

        let _ = serde_json::to_writer(&mut *out, &value);
        let _ = writeln!(out);
        count += 1;
    }

    count
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let files: Vec<_> = args.iter().skip(1).collect();

    if files.is_empty() {
        eprintln!("Usage: log-merge <export.jsonl>...");
        eprintln!("  Merges per-log JSON-line exports onto stdout; at least one file required.");
        process::exit(2);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut total = 0;
    for path in &files {
        total += merge_file(path, &mut out);
    }

    let _ = out.flush();
    eprintln!("log-merge: {} records from {} files", total, files.len());
}
