//! Execution plans and the per-framework flag table.
//!
//! The `coverage` and `verbose` options are independent, but not every tool
//! accepts both (or either). The policy is pinned per framework rather than
//! inferred:
//!
//! - pytest, vitest, jest, `dotnet test`, `go test`: both flags combine.
//! - `bun test`: no verbose flag; when both are requested, coverage wins.
//! - unittest, gradle: no coverage flag (coverage is plugin-driven there);
//!   verbose still applies.
//! - `npm test`, `mvn test`: neither flag is forwarded — what runs is defined
//!   by the project's script or build file, not by us.

use crate::ecosystem::{Ecosystem, Framework};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// RunOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub coverage: bool,
    pub verbose: bool,
}

// ---------------------------------------------------------------------------
// Flag table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CombinePolicy {
    /// Apply both flags when both are requested (verbose args first).
    Both,
    /// The tool cannot take both; suppress verbose in favor of coverage.
    CoverageWins,
}

struct FlagSpec {
    coverage: &'static [&'static str],
    verbose: &'static [&'static str],
    combine: CombinePolicy,
}

fn flag_spec(framework: Framework) -> FlagSpec {
    use CombinePolicy::*;
    match framework {
        Framework::Pytest => FlagSpec {
            coverage: &["--cov", "--cov-report=term-missing"],
            verbose: &["-v"],
            combine: Both,
        },
        Framework::Unittest => FlagSpec {
            coverage: &[],
            verbose: &["-v"],
            combine: Both,
        },
        Framework::Vitest => FlagSpec {
            coverage: &["--coverage"],
            verbose: &["--reporter=verbose"],
            combine: Both,
        },
        Framework::Jest => FlagSpec {
            coverage: &["--coverage"],
            verbose: &["--verbose"],
            combine: Both,
        },
        Framework::BunTest => FlagSpec {
            coverage: &["--coverage"],
            verbose: &[],
            combine: CoverageWins,
        },
        Framework::NpmTest => FlagSpec {
            coverage: &[],
            verbose: &[],
            combine: Both,
        },
        Framework::DotnetTest => FlagSpec {
            coverage: &["--collect:XPlat Code Coverage"],
            verbose: &["--verbosity", "detailed"],
            combine: Both,
        },
        Framework::MavenTest => FlagSpec {
            coverage: &[],
            verbose: &[],
            combine: Both,
        },
        Framework::GradleTest => FlagSpec {
            coverage: &[],
            verbose: &["--info"],
            combine: Both,
        },
        Framework::GoTest => FlagSpec {
            coverage: &["-cover"],
            verbose: &["-v"],
            combine: Both,
        },
    }
}

// ---------------------------------------------------------------------------
// ExecutionPlan
// ---------------------------------------------------------------------------

/// The literal command chosen for a project: program, argument list, and the
/// directory it must run in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionPlan {
    pub ecosystem: Ecosystem,
    pub framework: Framework,
    pub program: String,
    pub args: Vec<String>,
    pub root: PathBuf,
}

impl ExecutionPlan {
    /// Render the plan as a single display line. Arguments containing spaces
    /// are quoted; this is for humans and dry runs, not for a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|a| {
                if a.contains(' ') {
                    format!("\"{a}\"")
                } else {
                    a.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Assemble a plan from the framework's base invocation plus the option flags
/// the flag table allows. `head` comes before the flags, `tail` after them
/// (`go test [flags] ./...`).
pub fn build_plan(
    ecosystem: Ecosystem,
    framework: Framework,
    program: &str,
    head: &[&str],
    tail: &[&str],
    options: RunOptions,
    root: &Path,
) -> ExecutionPlan {
    let spec = flag_spec(framework);
    let coverage = options.coverage && !spec.coverage.is_empty();
    let mut verbose = options.verbose && !spec.verbose.is_empty();
    if coverage && verbose && spec.combine == CombinePolicy::CoverageWins {
        verbose = false;
    }
    if options.coverage && !coverage {
        tracing::debug!(%framework, "coverage flag not supported, dropping");
    }
    if options.verbose && !verbose {
        tracing::debug!(%framework, "verbose flag not supported or suppressed, dropping");
    }

    let mut args: Vec<String> = head.iter().map(|s| s.to_string()).collect();
    if verbose {
        args.extend(spec.verbose.iter().map(|s| s.to_string()));
    }
    if coverage {
        args.extend(spec.coverage.iter().map(|s| s.to_string()));
    }
    args.extend(tail.iter().map(|s| s.to_string()));

    ExecutionPlan {
        ecosystem,
        framework,
        program: program.to_string(),
        args,
        root: root.to_path_buf(),
    }
}
