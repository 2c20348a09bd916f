use crate::output::print_json;
use std::path::Path;
use testrun_core::detect;

pub fn run(root: &Path, json: bool) -> anyhow::Result<i32> {
    let report = detect::detect(root);

    if json {
        print_json(&report)?;
    } else {
        println!("Language:    {}", report.language);
        println!("Framework:   {}", report.framework);
        println!("Confidence:  {}", report.confidence);
        if let Some(ref message) = report.message {
            println!("Note:        {message}");
        }
    }
    Ok(0)
}
