//! Hygiene: enforces coding standards at test time
//!
//! Scans the relay crate's production sources for patterns that must not
//! appear. The relay sits on the diagnostic path of the whole page, so a
//! crash or a log call from inside it is a defect. Every budget is zero and
//! stays zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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

/// Lines containing `pattern`, as `path:line` strings.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(move |(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("  {}:{}", file.path, n + 1))
        })
        .collect()
}

fn assert_absent(patterns: &[&str], why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    for pattern in patterns {
        let found = hits(&files, pattern);
        assert!(found.is_empty(), "`{pattern}` is not allowed ({why}):\n{}", found.join("\n"));
    }
}

#[test]
fn no_panicking_calls() {
    assert_absent(
        &[".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("],
        "crashes the page it is observing",
    );
}

#[test]
fn no_silent_discards() {
    assert_absent(&["let _ =", ".ok()"], "discards an error without inspecting it");
}

#[test]
fn relay_never_logs_through_itself() {
    assert_absent(
        &["log::error!(", "log::warn!(", "log::info!(", "log::debug!(", "log::trace!(", "println!(", "eprintln!("],
        "diagnostics from inside the relay feed back into it",
    );
}

#[test]
fn no_dead_code_allowances() {
    assert_absent(&["#[allow(dead_code)]"], "remove the code instead");
}
