//! The `shuffle form` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use shuffle_core::config::load_config_from;
use shuffle_core::parser;
use shuffle_core::report::FormationReport;
use shuffle_core::{Session, Xorshift64};

pub fn execute(
    roster_path: PathBuf,
    group_size: Option<usize>,
    seed: Option<u64>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: {format} (expected text or json)"
    );

    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(size) = group_size {
        config.group_size = size;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    anyhow::ensure!(
        (2..=config.max_group_size).contains(&config.group_size),
        "group size must be between 2 and {}",
        config.max_group_size
    );

    let file = parser::load_roster(&roster_path)?;
    tracing::info!(
        "loaded roster {} ({} students)",
        roster_path.display(),
        file.roster.len()
    );
    let mut session = Session::with_roster(file.roster, config.clone());
    let status = session.status();

    let mut rng = match config.seed {
        Some(seed) => Xorshift64::new(seed),
        None => Xorshift64::from_entropy(),
    };
    session
        .form_groups(&mut rng)
        .with_context(|| format!("cannot form groups from {}", roster_path.display()))?;

    let report = FormationReport::new(&session.groups, config.group_size, config.seed, status);

    if format == "json" {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print_groups(&report);
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_groups(report: &FormationReport) {
    println!(
        "Formed {} group(s) from {} student(s)",
        report.groups.len(),
        report.member_count()
    );

    for group in &report.groups {
        println!(
            "\nBreakout Room {}: {} {} (Avg: {:.1})",
            group.room, group.name, group.emblem, group.average_skill_level
        );

        let mut table = Table::new();
        table.set_header(vec!["Name", "Skill Level"]);
        for member in &group.members {
            let skill = match (&member.skill_level, &member.skill_label) {
                (Some(level), Some(label)) => format!("{level} ({label})"),
                _ => "-".to_string(),
            };
            table.add_row(vec![Cell::new(&member.name), Cell::new(skill)]);
        }
        println!("{table}");
    }
}
