//! Hygiene — source budgets checked at test time.
//!
//! Each pattern below has a budget (ideally zero) across the production
//! sources in `src/`. Sibling `*_test.rs` files are exempt. The budgets only
//! ever shrink.

use std::fs;
use std::path::Path;

struct Budget {
    name: &'static str,
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics — these take down the host page.
    Budget { name: "unwrap", pattern: ".unwrap()", max: 0 },
    Budget { name: "expect", pattern: ".expect(", max: 0 },
    Budget { name: "panic", pattern: "panic!(", max: 0 },
    Budget { name: "unreachable", pattern: "unreachable!(", max: 0 },
    Budget { name: "todo", pattern: "todo!(", max: 0 },
    Budget { name: "unimplemented", pattern: "unimplemented!(", max: 0 },
    // Silent loss — discards errors without inspecting.
    Budget { name: "silent discard", pattern: "let _ =", max: 0 },
    Budget { name: "dot ok", pattern: ".ok()", max: 0 },
    // Output goes through `tracing`, never straight to stdout/stderr.
    Budget { name: "println", pattern: "println!(", max: 0 },
    Budget { name: "eprintln", pattern: "eprintln!(", max: 0 },
    Budget { name: "dbg", pattern: "dbg!(", max: 0 },
    // Style / structure.
    Budget { name: "allow dead_code", pattern: "#[allow(dead_code)]", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
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
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "no sources under src/");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{} budget exceeded: found {count}, max {}\n{detail}", budget.name, budget.max));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
