//! Marker-file classification and test-command resolution.
//!
//! Resolution walks the signature table in priority order and short-circuits
//! on the first ecosystem with a marker present under the root. A second pass
//! inside the winning ecosystem picks the concrete framework (Vitest before
//! Jest before `bun test` before the generic `npm test`, Maven before Gradle,
//! a Gradle wrapper before a global `gradle`). The result is a pure function
//! of directory contents plus the injected PATH probe.

use crate::ecosystem::{Ecosystem, Framework};
use crate::error::{Result, TestrunError};
use crate::plan::{build_plan, ExecutionPlan, RunOptions};
use crate::rules::{all_markers, default_rules, marker_present};
use crate::toolchain::Toolchain;
use std::path::Path;

/// Resolve the test command for the project at `root`.
///
/// Fails with `NoFrameworkDetected` when no marker matches; never guesses a
/// default and never spawns anything.
pub fn resolve(
    root: &Path,
    options: RunOptions,
    toolchain: &dyn Toolchain,
) -> Result<ExecutionPlan> {
    for rule in default_rules() {
        let hit = rule.markers.iter().find(|m| marker_present(root, m));
        tracing::debug!(
            ecosystem = %rule.ecosystem,
            matched = hit.is_some(),
            "signature rule evaluated"
        );
        if let Some(marker) = hit {
            tracing::debug!(marker, ecosystem = %rule.ecosystem, "ecosystem selected");
            return Ok(match rule.ecosystem {
                Ecosystem::Python => resolve_python(root, options),
                Ecosystem::Javascript => resolve_javascript(root, options, toolchain),
                Ecosystem::Dotnet => build_plan(
                    Ecosystem::Dotnet,
                    Framework::DotnetTest,
                    "dotnet",
                    &["test"],
                    &[],
                    options,
                    root,
                ),
                Ecosystem::Java => resolve_java(root, options),
                Ecosystem::Go => build_plan(
                    Ecosystem::Go,
                    Framework::GoTest,
                    "go",
                    &["test"],
                    &["./..."],
                    options,
                    root,
                ),
            });
        }
    }

    Err(TestrunError::NoFrameworkDetected {
        checked: all_markers(),
    })
}

// ---------------------------------------------------------------------------
// Python
// ---------------------------------------------------------------------------

const PYTEST_CONFIGS: &[&str] = &["pytest.ini", "tox.ini", "pyproject.toml", "setup.cfg"];

fn resolve_python(root: &Path, options: RunOptions) -> ExecutionPlan {
    let pytest = PYTEST_CONFIGS.iter().any(|m| marker_present(root, m))
        || file_mentions(&root.join("requirements.txt"), "pytest");

    if pytest {
        build_plan(
            Ecosystem::Python,
            Framework::Pytest,
            "pytest",
            &[],
            &[],
            options,
            root,
        )
    } else {
        build_plan(
            Ecosystem::Python,
            Framework::Unittest,
            "python",
            &["-m", "unittest", "discover"],
            &[],
            options,
            root,
        )
    }
}

// ---------------------------------------------------------------------------
// JavaScript / TypeScript
// ---------------------------------------------------------------------------

const VITEST_CONFIGS: &[&str] = &[
    "vitest.config.ts",
    "vitest.config.js",
    "vitest.config.mts",
    "vitest.config.mjs",
    "vite.config.ts",
];

const JEST_CONFIGS: &[&str] = &[
    "jest.config.js",
    "jest.config.ts",
    "jest.config.cjs",
    "jest.config.json",
];

fn resolve_javascript(root: &Path, options: RunOptions, toolchain: &dyn Toolchain) -> ExecutionPlan {
    if VITEST_CONFIGS.iter().any(|m| marker_present(root, m)) {
        let (program, head) = js_launch(toolchain, &["vitest", "run"]);
        return build_plan(
            Ecosystem::Javascript,
            Framework::Vitest,
            program,
            &head,
            &[],
            options,
            root,
        );
    }
    if JEST_CONFIGS.iter().any(|m| marker_present(root, m)) {
        let (program, head) = js_launch(toolchain, &["jest"]);
        return build_plan(
            Ecosystem::Javascript,
            Framework::Jest,
            program,
            &head,
            &[],
            options,
            root,
        );
    }
    if marker_present(root, "bun.lock") || marker_present(root, "bun.lockb") {
        return build_plan(
            Ecosystem::Javascript,
            Framework::BunTest,
            "bun",
            &["test"],
            &[],
            options,
            root,
        );
    }
    build_plan(
        Ecosystem::Javascript,
        Framework::NpmTest,
        "npm",
        &["test"],
        &[],
        options,
        root,
    )
}

/// Launcher for package-local JS tools: `npx` by default, `bun x` when `npx`
/// is missing but `bun` is on PATH.
fn js_launch<'a>(
    toolchain: &dyn Toolchain,
    tool_argv: &[&'a str],
) -> (&'static str, Vec<&'a str>) {
    if !toolchain.available("npx") && toolchain.available("bun") {
        let mut head = vec!["x"];
        head.extend_from_slice(tool_argv);
        ("bun", head)
    } else {
        ("npx", tool_argv.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Java
// ---------------------------------------------------------------------------

fn resolve_java(root: &Path, options: RunOptions) -> ExecutionPlan {
    if marker_present(root, "pom.xml") {
        return build_plan(
            Ecosystem::Java,
            Framework::MavenTest,
            "mvn",
            &["test"],
            &[],
            options,
            root,
        );
    }
    let program = if let Some(wrapper) = gradle_wrapper(root) {
        wrapper
    } else {
        "gradle"
    };
    build_plan(
        Ecosystem::Java,
        Framework::GradleTest,
        program,
        &["test"],
        &[],
        options,
        root,
    )
}

/// Prefer a committed Gradle wrapper over a globally installed `gradle`, but
/// only when the script is actually runnable.
fn gradle_wrapper(root: &Path) -> Option<&'static str> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let script = root.join("gradlew");
        let executable = std::fs::metadata(&script)
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false);
        if executable {
            return Some("./gradlew");
        }
    }
    #[cfg(windows)]
    {
        if root.join("gradlew.bat").is_file() {
            return Some("gradlew.bat");
        }
    }
    let _ = root;
    None
}

fn file_mentions(path: &Path, needle: &str) -> bool {
    std::fs::read_to_string(path)
        .map(|content| content.contains(needle))
        .unwrap_or(false)
}
