//! The `shuffle status` command.

use std::path::PathBuf;

use anyhow::Result;

use shuffle_core::parser::{self, WarningKind};
use shuffle_core::query::{count_responses, pending_names};

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let file = parser::load_roster(&roster_path)?;
    let status = count_responses(&file.roster);

    if !file.name.is_empty() {
        println!("Roster: {}", file.name);
    }
    println!(
        "Responses: {}/{} ({:.0}%)",
        status.responded,
        status.total,
        status.fraction() * 100.0
    );

    let pending = pending_names(&file.roster);
    if pending.is_empty() {
        println!("All students have completed the survey!");
    } else {
        println!("Waiting on:");
        for name in &pending {
            println!("  {name}");
        }
    }

    let warnings: Vec<_> = parser::validate_roster(&file.roster)
        .into_iter()
        .filter(|w| w.kind != WarningKind::Unresponded)
        .collect();
    for w in &warnings {
        let prefix = w
            .student
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    Ok(())
}
