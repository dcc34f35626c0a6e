//! Source hygiene for the widget crate.
//!
//! Every pattern below has a budget. A new hit means removing an existing
//! one first. The discard budgets cover native stubs that consume their
//! arguments, the logger install, `dyn_into` casts in anchor lookup, and
//! `resp.ok()` status checks.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
    Budget { pattern: "let _ =", max: 9 },
    Budget { pattern: ".ok()", max: 4 },
];

/// Production sources under `src/`; `_test.rs` siblings are exempt.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut pending = vec![PathBuf::from("src")];
    let mut found = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if is_production_source(&path) {
                if let Ok(text) = fs::read_to_string(&path) {
                    found.push((path, text));
                }
            }
        }
    }
    found
}

fn is_production_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
        && !path.file_stem().is_some_and(|stem| stem.to_string_lossy().ends_with("_test"))
}

#[test]
fn source_tree_is_found() {
    assert!(production_sources().iter().any(|(path, _)| path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let sources = production_sources();
    let mut report = Vec::new();
    for budget in BUDGETS {
        let hits: Vec<String> = sources
            .iter()
            .flat_map(|(path, text)| {
                text.lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(budget.pattern))
                    .map(move |(n, _)| format!("    {}:{}", path.display(), n + 1))
            })
            .collect();
        if hits.len() > budget.max {
            report.push(format!("{} found {} (max {}):\n{}", budget.pattern, hits.len(), budget.max, hits.join("\n")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn browser_modules_are_feature_gated() {
    let lib = fs::read_to_string("src/lib.rs").unwrap_or_default();
    for module in ["boot", "widgets"] {
        let gated = format!("#[cfg(feature = \"csr\")]\npub mod {module};");
        assert!(lib.contains(&gated), "{module} must only build with csr");
    }
}

#[test]
fn entry_point_starts_executor_before_booting() {
    let boot = fs::read_to_string("src/boot.rs").unwrap_or_default();
    let start = boot.find("pub fn start()").unwrap_or(usize::MAX);
    let body = boot.get(start..).unwrap_or_default();
    let executor = body.find("any_spawner::Executor::init_wasm_bindgen()");
    let first_boot = body.find("boot_now");
    assert!(executor.is_some(), "start() must initialize the task executor");
    assert!(executor < first_boot, "executor must be ready before widgets spawn tasks");
}
