//! Source hygiene for the whole workspace.
//!
//! Production code in `client/src` and `server/src` must not panic on bad
//! input or drop errors on the floor. Files ending in `_test.rs` are exempt.

use std::fs;
use std::path::{Path, PathBuf};

/// Pattern and the reason it is banned.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("todo!(", "unfinished stub"),
    ("let _ =", "discards a result unseen"),
    (".ok()", "discards an error unseen"),
];

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn production_sources() -> Vec<(PathBuf, String)> {
    let root = workspace_root();
    let mut files = Vec::new();
    for krate in ["client", "server"] {
        collect(&root.join(krate).join("src"), &mut files);
    }
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn scans_both_crates() {
    let files = production_sources();
    for krate in ["client", "server"] {
        let marker = format!("{krate}/src");
        assert!(
            files.iter().any(|(path, _)| path.to_string_lossy().contains(&marker)),
            "no sources found under {marker}"
        );
    }
}

#[test]
fn no_banned_patterns_in_production_code() {
    let mut hits = Vec::new();
    for (path, content) in production_sources() {
        for (line_no, line) in content.lines().enumerate() {
            for (pattern, reason) in BANNED {
                if line.contains(pattern) {
                    hits.push(format!("  {}:{}: `{pattern}` ({reason})", path.display(), line_no + 1));
                }
            }
        }
    }
    assert!(hits.is_empty(), "banned patterns found:\n{}", hits.join("\n"));
}
