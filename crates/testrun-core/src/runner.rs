//! Subprocess invocation behind an injected capability.
//!
//! One synchronous child per invocation: spawn, block, report the exit code
//! verbatim. A failing test suite is data (`ExecutionResult.exit_code`), not
//! an error; the only runner errors are a missing binary and a failed spawn.

use crate::error::{Result, TestrunError};
use crate::plan::ExecutionPlan;
use serde::Serialize;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares our stdout/stderr; `ExecutionResult` carries no text.
    Inherit,
    /// Child output is captured into the result.
    Capture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

pub trait CommandRunner {
    fn run(&self, plan: &ExecutionPlan, mode: OutputMode) -> Result<ExecutionResult>;
}

/// Run a plan through the given runner. No retry, no timeout; cancellation is
/// whatever signal the host delivers to the child.
pub fn execute(
    plan: &ExecutionPlan,
    mode: OutputMode,
    runner: &dyn CommandRunner,
) -> Result<ExecutionResult> {
    runner.run(plan, mode)
}

// ---------------------------------------------------------------------------
// SystemRunner
// ---------------------------------------------------------------------------

pub struct SystemRunner;

impl SystemRunner {
    fn ensure_available(&self, plan: &ExecutionPlan) -> Result<()> {
        let missing = if plan.program.contains('/') || plan.program.contains('\\') {
            // Wrapper scripts are root-relative; existence was the resolver's
            // call, re-checked here in case the tree changed underneath us.
            !plan.root.join(&plan.program).is_file()
        } else {
            which::which(&plan.program).is_err()
        };
        if missing {
            return Err(TestrunError::ToolNotAvailable {
                binary: plan.program.clone(),
            });
        }
        Ok(())
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, plan: &ExecutionPlan, mode: OutputMode) -> Result<ExecutionResult> {
        self.ensure_available(plan)?;

        let mut cmd = Command::new(&plan.program);
        cmd.args(&plan.args).current_dir(&plan.root);
        tracing::debug!(command = %plan.command_line(), root = %plan.root.display(), "spawning");

        match mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .status()
                    .map_err(|e| TestrunError::SpawnFailed {
                        program: plan.program.clone(),
                        message: e.to_string(),
                    })?;
                Ok(ExecutionResult {
                    // Signal-terminated children have no code; report 1.
                    exit_code: status.code().unwrap_or(1),
                    stdout: None,
                    stderr: None,
                })
            }
            OutputMode::Capture => {
                let output = cmd.output().map_err(|e| TestrunError::SpawnFailed {
                    program: plan.program.clone(),
                    message: e.to_string(),
                })?;
                Ok(ExecutionResult {
                    exit_code: output.status.code().unwrap_or(1),
                    stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                    stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
                })
            }
        }
    }
}
