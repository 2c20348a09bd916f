use crate::output::{print_json, print_table};
use serde::Serialize;
use testrun_core::rules::default_rules;

#[derive(Serialize)]
struct RuleRow {
    priority: usize,
    ecosystem: String,
    markers: Vec<String>,
}

pub fn run(json: bool) -> anyhow::Result<i32> {
    let rows: Vec<RuleRow> = default_rules()
        .iter()
        .enumerate()
        .map(|(i, r)| RuleRow {
            priority: i + 1,
            ecosystem: r.ecosystem.to_string(),
            markers: r.markers.iter().map(|m| m.to_string()).collect(),
        })
        .collect();

    if json {
        print_json(&rows)?;
    } else {
        let table: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.priority.to_string(),
                    r.ecosystem.clone(),
                    r.markers.join(", "),
                ]
            })
            .collect();
        print_table(&["#", "ecosystem", "markers"], &table);
    }
    Ok(0)
}
