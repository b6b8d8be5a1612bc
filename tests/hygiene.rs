//! Source hygiene checks for `src/`.
//!
//! Page handlers must never take the page down, so anything that can panic or
//! silently swallow an error is budgeted. Budgets only go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics abort the wasm instance and every handler with it.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// Errors dropped without being logged.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

/// `(path, content)` of every non-test `.rs` file under `src/`.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

/// Lines containing `pattern`, outside `#[cfg(test)] mod tests` blocks.
fn hits(pattern: &str) -> Vec<String> {
    let mut found = Vec::new();
    for (path, content) in source_files() {
        let production = content.split("#[cfg(test)]\nmod tests").next().unwrap_or_default();
        for (n, line) in production.lines().enumerate() {
            if line.contains(pattern) {
                found.push(format!("  {path}:{}: {}", n + 1, line.trim()));
            }
        }
    }
    found
}

fn assert_budget(pattern: &str, max: usize) {
    let found = hits(pattern);
    assert!(
        found.len() <= max,
        "{pattern} budget exceeded: found {}, max {max}.\n{}",
        found.len(),
        found.join("\n")
    );
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
    assert_budget("unreachable!(", MAX_PANIC);
    assert_budget("unimplemented!(", MAX_PANIC);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn scans_something() {
    assert!(source_files().iter().any(|(path, _)| path.ends_with("lib.rs")));
}
