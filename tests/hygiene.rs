//! Source hygiene for the behavior crate.
//!
//! Behavior code runs inside browser callbacks, where a panic kills every
//! behavior on the page and a swallowed error is invisible. Production files
//! under `src/` must propagate `DomError` and let the `Listener`/`Watch`
//! boundary log it.

use std::fs;
use std::path::{Path, PathBuf};

/// Pattern, allowed occurrences, reason.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics in a callback"),
    (".expect(", 0, "panics in a callback"),
    ("panic!(", 0, "panics in a callback"),
    ("unreachable!(", 0, "panics in a callback"),
    ("todo!(", 0, "unfinished code"),
    ("unimplemented!(", 0, "unfinished code"),
    ("let _ =", 0, "drops a Result unseen"),
    (".ok()", 0, "drops an error unseen"),
    (".forget()", 0, "leaks a closure; own it in a Listener or Watch"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

const BEHAVIORS: &[&str] = &["modal", "scroll", "tabs", "hover", "sticky", "reveal", "lazy", "carousel", "page"];

fn production_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            production_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

#[test]
fn pattern_budgets() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let sources: Vec<(PathBuf, String)> = files
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path).unwrap();
            (path, content)
        })
        .collect();

    let mut report = Vec::new();
    for &(pattern, max, reason) in BUDGETS {
        let hits: Vec<String> = sources
            .iter()
            .flat_map(|(path, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(move |(n, _)| format!("{}:{}", path.display(), n + 1))
            })
            .collect();
        if hits.len() > max {
            report.push(format!("{pattern} ({reason}): {} found, max {max}\n  {}", hits.len(), hits.join("\n  ")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn every_behavior_has_tests() {
    for module in BEHAVIORS {
        let test_file = Path::new("src").join(format!("{module}_test.rs"));
        assert!(test_file.exists(), "missing {}", test_file.display());
    }
}
