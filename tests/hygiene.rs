//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns that violate
//! project standards. Each pattern has a budget (zero); if you must add an
//! occurrence, fix an existing one first — the budget never grows.

use std::fs;
use std::path::Path;

/// (pattern, budget, rationale)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics crash the whole WASM instance; handlers must degrade instead.
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the process"),
    ("unreachable!(", 0, "crashes when reached"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    // Silent loss discards errors without inspecting them.
    ("let _ =", 0, "silently discards a result"),
    (".ok()", 0, "silently discards an error"),
    // Dead code should be deleted, not suppressed.
    ("#[allow(dead_code)]", 0, "suppressed dead code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding sibling test modules.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut report = String::new();
    for (pattern, budget, why) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            report.push_str(&format!("{pattern} ({why}): found {count}, max {budget}\n"));
            for (path, count) in hits {
                report.push_str(&format!("  {path}: {count}\n"));
            }
        }
    }
    assert!(report.is_empty(), "hygiene budget exceeded:\n{report}");
}
