//! The ordered ecosystem signature table.
//!
//! Detection is data, not control flow: each ecosystem is one row of marker
//! file names, evaluated top to bottom, and the first row with a marker
//! present under the project root wins. Adding an ecosystem is a table edit.

use crate::ecosystem::Ecosystem;
use std::path::Path;

/// One row of the signature table: an ecosystem and the marker files whose
/// presence directly under the project root selects it.
///
/// A marker of the form `*.ext` matches any file with that extension directly
/// under the root (used for `.csproj`); all other markers are literal file
/// names. Checks are never recursive.
pub struct SignatureRule {
    pub ecosystem: Ecosystem,
    pub markers: &'static [&'static str],
}

/// Priority order: most specific marker set first, first hit short-circuits.
static RULES: [SignatureRule; 5] = [
    SignatureRule {
        ecosystem: Ecosystem::Python,
        markers: &[
            "pytest.ini",
            "pyproject.toml",
            "setup.cfg",
            "tox.ini",
            "requirements.txt",
        ],
    },
    SignatureRule {
        ecosystem: Ecosystem::Javascript,
        markers: &["package.json"],
    },
    SignatureRule {
        ecosystem: Ecosystem::Dotnet,
        markers: &["*.csproj"],
    },
    SignatureRule {
        ecosystem: Ecosystem::Java,
        markers: &["pom.xml", "build.gradle", "build.gradle.kts"],
    },
    SignatureRule {
        ecosystem: Ecosystem::Go,
        markers: &["go.mod"],
    },
];

pub fn default_rules() -> &'static [SignatureRule] {
    &RULES
}

/// Check whether a single marker is present directly under `root`.
pub fn marker_present(root: &Path, marker: &str) -> bool {
    if let Some(ext) = marker.strip_prefix("*.") {
        let Ok(entries) = std::fs::read_dir(root) else {
            return false;
        };
        entries
            .filter_map(|e| e.ok())
            .any(|e| e.path().extension().and_then(|x| x.to_str()) == Some(ext))
    } else {
        root.join(marker).exists()
    }
}

/// Every marker in the table, in evaluation order. Used for the
/// `NoFrameworkDetected` diagnostic.
pub fn all_markers() -> Vec<String> {
    RULES
        .iter()
        .flat_map(|r| r.markers.iter().map(|m| m.to_string()))
        .collect()
}
