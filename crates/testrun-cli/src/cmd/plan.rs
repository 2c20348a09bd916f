use crate::output::print_json;
use std::path::Path;
use testrun_core::plan::RunOptions;
use testrun_core::resolver;
use testrun_core::toolchain::SystemToolchain;

pub fn run(root: &Path, coverage: bool, verbose: bool, json: bool) -> anyhow::Result<i32> {
    let options = RunOptions { coverage, verbose };
    let plan = resolver::resolve(root, options, &SystemToolchain)?;

    if json {
        print_json(&plan)?;
    } else {
        println!("Ecosystem:  {}", plan.ecosystem);
        println!("Framework:  {}", plan.framework);
        println!("Command:    {}", plan.command_line());
        println!("Directory:  {}", plan.root.display());
    }
    Ok(0)
}
