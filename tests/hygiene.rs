//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the engine's production sources for antipatterns. Each
//! pattern has a budget (ideally zero). Engine operations are silent no-ops on
//! bad input, so nothing in `src/` should be able to panic or swallow an error.
//! The budget never grows.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "crashes the host UI" },
    Budget { pattern: "unreachable!(", max: 0, why: "crashes the host UI" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "discards a result without inspecting it" },
    // Env parsing in config.rs falls back to defaults on a missing or bad value.
    Budget { pattern: ".ok()", max: 2, why: "discards the error" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "dead code should be deleted" },
    Budget { pattern: "println!(", max: 0, why: "libraries log through tracing" },
    Budget { pattern: "eprintln!(", max: 0, why: "libraries log through tracing" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("store.rs")), "hygiene scan found no sources; run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!(
                "{} budget exceeded ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                detail.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn every_module_has_tests() {
    let files = source_files();
    let missing: Vec<&str> = files
        .iter()
        .filter(|f| !f.path.ends_with("lib.rs") && !f.path.ends_with("consts.rs"))
        .filter(|f| !f.content.contains("_test.rs\"]"))
        .map(|f| f.path.as_str())
        .collect();
    assert!(missing.is_empty(), "modules without a sibling _test.rs: {missing:?}");
}
