use crate::output::print_json;
use std::path::Path;
use testrun_core::plan::RunOptions;
use testrun_core::resolver;
use testrun_core::runner::{execute, OutputMode, SystemRunner};
use testrun_core::toolchain::SystemToolchain;

/// Resolve and run the project's test command. Returns the exit code the
/// process should exit with: the child's code verbatim, or 0 for a dry run.
pub fn run(
    root: &Path,
    coverage: bool,
    verbose: bool,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<i32> {
    let options = RunOptions { coverage, verbose };
    let plan = resolver::resolve(root, options, &SystemToolchain)?;

    if dry_run {
        if json {
            print_json(&plan)?;
        } else {
            println!("{}", plan.command_line());
        }
        return Ok(0);
    }

    eprintln!("running: {}", plan.command_line());
    let result = execute(&plan, OutputMode::Inherit, &SystemRunner)?;
    if !result.success() {
        tracing::debug!(code = result.exit_code, "test command exited non-zero");
    }
    Ok(result.exit_code)
}
