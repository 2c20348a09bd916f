//! Confidence-scored framework detection.
//!
//! Unlike `resolver`, which only needs an ecosystem to pick a command, this
//! module also sniffs file contents (dependency manifests, sampled test
//! files) to name the framework a project actually uses, with a confidence
//! score. It never fails on an unrecognized directory; the no-signal result
//! is `unknown` at confidence 0.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// How many candidate test files each detector reads before giving up.
const SAMPLE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub language: String,
    pub framework: String,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DetectionReport {
    fn unknown() -> Self {
        DetectionReport {
            language: "unknown".to_string(),
            framework: "unknown".to_string(),
            confidence: 0,
            message: Some("No test framework detected".to_string()),
        }
    }
}

/// Run every language detector and report the highest-confidence hit.
/// Ties go to the earlier language (same order as the resolver's rule table).
pub fn detect(root: &Path) -> DetectionReport {
    let detectors: [(&str, fn(&Path) -> Option<(&'static str, u8)>); 5] = [
        ("python", detect_python),
        ("javascript", detect_javascript),
        ("dotnet", detect_dotnet),
        ("java", detect_java),
        ("go", detect_go),
    ];

    let mut best: Option<DetectionReport> = None;
    for (language, detector) in detectors {
        if let Some((framework, confidence)) = detector(root) {
            tracing::debug!(language, framework, confidence, "detector hit");
            let better = best
                .as_ref()
                .map(|b| confidence > b.confidence)
                .unwrap_or(true);
            if better {
                best = Some(DetectionReport {
                    language: language.to_string(),
                    framework: framework.to_string(),
                    confidence,
                    message: None,
                });
            }
        }
    }
    best.unwrap_or_else(DetectionReport::unknown)
}

// ---------------------------------------------------------------------------
// Per-language detectors
// ---------------------------------------------------------------------------

fn detect_python(root: &Path) -> Option<(&'static str, u8)> {
    if any_exists(root, &["pytest.ini", "pyproject.toml", "setup.cfg", "tox.ini"]) {
        return Some(("pytest", 90));
    }
    for req in ["requirements.txt", "requirements-dev.txt", "dev-requirements.txt"] {
        if file_contains(&root.join(req), &["pytest"]) {
            return Some(("pytest", 80));
        }
    }
    let test_files = sample_files(root, |name| {
        name.starts_with("test") && name.ends_with(".py")
    });
    for f in &test_files {
        if file_contains(f, &["import unittest", "from unittest"]) {
            return Some(("unittest", 70));
        }
    }
    if !test_files.is_empty() {
        return Some(("pytest", 50));
    }
    None
}

fn detect_javascript(root: &Path) -> Option<(&'static str, u8)> {
    if any_exists(root, &["vitest.config.ts", "vitest.config.js", "vite.config.ts"]) {
        return Some(("vitest", 90));
    }
    if any_exists(root, &["jest.config.js", "jest.config.ts", "jest.config.json"]) {
        return Some(("jest", 90));
    }
    let package_json = root.join("package.json");
    if package_json.is_file() {
        for (needle, framework) in [
            ("\"vitest\"", "vitest"),
            ("\"jest\"", "jest"),
            ("\"mocha\"", "mocha"),
        ] {
            if file_contains(&package_json, &[needle]) {
                return Some((framework, 85));
            }
        }
        // A "test" script naming the runner, without a dependency entry.
        if file_contains(&package_json, &["\"test\":"]) {
            for (needle, framework) in [("vitest", "vitest"), ("jest", "jest")] {
                if file_contains(&package_json, &[needle]) {
                    return Some((framework, 80));
                }
            }
        }
    }
    let test_files = sample_files(root, |name| {
        name.ends_with(".test.ts") || name.ends_with(".test.js")
    });
    for f in &test_files {
        if file_contains(f, &["from \"vitest\"", "from 'vitest'"]) {
            return Some(("vitest", 75));
        }
        if file_contains(f, &["from \"jest\"", "@jest"]) {
            return Some(("jest", 75));
        }
        if file_contains(f, &["from \"mocha\"", "from 'mocha'"]) {
            return Some(("mocha", 75));
        }
    }
    None
}

fn detect_dotnet(root: &Path) -> Option<(&'static str, u8)> {
    let projects = sample_files(root, |name| name.ends_with(".csproj"));
    for csproj in &projects {
        if file_contains(csproj, &["xunit", "xUnit"]) {
            return Some(("xunit", 90));
        }
        if file_contains(csproj, &["NUnit", "nunit"]) {
            return Some(("nunit", 90));
        }
        if file_contains(csproj, &["MSTest"]) {
            return Some(("mstest", 90));
        }
    }
    let test_files = sample_files(root, |name| {
        name.ends_with("Test.cs") || name.ends_with("Tests.cs")
    });
    for f in &test_files {
        if file_contains(f, &["using Xunit", "using xUnit"]) {
            return Some(("xunit", 80));
        }
        if file_contains(f, &["using NUnit"]) {
            return Some(("nunit", 80));
        }
        if file_contains(f, &["using Microsoft.VisualStudio.TestTools"]) {
            return Some(("mstest", 80));
        }
    }
    None
}

fn detect_java(root: &Path) -> Option<(&'static str, u8)> {
    for build_file in ["pom.xml", "build.gradle", "build.gradle.kts"] {
        let path = root.join(build_file);
        if !path.is_file() {
            continue;
        }
        if file_contains(&path, &["junit-jupiter", "junit 5"]) {
            return Some(("junit5", 90));
        }
        if file_contains(&path, &["testng"]) {
            return Some(("testng", 90));
        }
        if file_contains(&path, &["junit"]) {
            return Some(("junit4", 90));
        }
    }
    let test_files = sample_files(root, |name| {
        name.ends_with("Test.java") || name.ends_with("Tests.java")
    });
    for f in &test_files {
        if file_contains(f, &["org.junit.jupiter"]) {
            return Some(("junit5", 80));
        }
        if file_contains(f, &["org.junit.Test"]) {
            return Some(("junit4", 80));
        }
        if file_contains(f, &["org.testng"]) {
            return Some(("testng", 80));
        }
    }
    None
}

fn detect_go(root: &Path) -> Option<(&'static str, u8)> {
    let test_files = sample_files(root, |name| name.ends_with("_test.go"));
    if test_files.is_empty() {
        return None;
    }
    for f in &test_files {
        if file_contains(f, &["github.com/stretchr/testify"]) {
            return Some(("go-test-testify", 85));
        }
    }
    Some(("go-test", 90))
}

// ---------------------------------------------------------------------------
// File helpers
// ---------------------------------------------------------------------------

fn any_exists(root: &Path, names: &[&str]) -> bool {
    names.iter().any(|n| root.join(n).exists())
}

fn file_contains(path: &Path, patterns: &[&str]) -> bool {
    match std::fs::read_to_string(path) {
        Ok(content) => patterns.iter().any(|p| content.contains(p)),
        Err(_) => false,
    }
}

/// Collect up to `SAMPLE_LIMIT` files matching `predicate` from the root and
/// its immediate subdirectories. Deliberately shallow: detection stays a
/// bounded number of filesystem operations.
fn sample_files(root: &Path, predicate: impl Fn(&str) -> bool) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut dirs = vec![root.to_path_buf()];
    if let Ok(entries) = std::fs::read_dir(root) {
        for entry in entries.filter_map(|e| e.ok()) {
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
    }
    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(&predicate)
                .unwrap_or(false);
            if matches {
                found.push(path);
                if found.len() >= SAMPLE_LIMIT {
                    return found;
                }
            }
        }
    }
    found
}
