//! The `shuffle init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("shuffle.toml").exists() {
        println!("shuffle.toml already exists, skipping.");
    } else {
        std::fs::write("shuffle.toml", SAMPLE_CONFIG)?;
        println!("Created shuffle.toml");
    }

    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", EXAMPLE_ROSTER)?;
        println!("Created roster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your students to roster.toml and record their skill levels");
    println!("  2. Run: shuffle status --roster roster.toml");
    println!("  3. Run: shuffle form --roster roster.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# shuffle configuration

# Target number of students per breakout group
group_size = 4

# Largest group size accepted on the command line
max_group_size = 10

# Uncomment for reproducible groups
# seed = 42
"#;

const EXAMPLE_ROSTER: &str = r#"[roster]
name = "Example Class"

# skill: novice, intermediate, advanced, expert (or 1-4).
# Leave it out for students who have not answered the survey yet.

[[students]]
name = "Ada"
email = "ada@example.com"
skill = "expert"

[[students]]
name = "Grace"
skill = "advanced"

[[students]]
name = "Linus"
skill = "intermediate"

[[students]]
name = "Margaret"
skill = "novice"

[[students]]
name = "Dennis"
skill = "advanced"

[[students]]
name = "Barbara"
skill = "novice"

[[students]]
name = "Ken"
skill = "intermediate"

[[students]]
name = "Frances"
skill = "expert"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn templates_parse() {
        let config = shuffle_core::config::parse_config_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.group_size, 4);
        let file =
            shuffle_core::parser::parse_roster_str(EXAMPLE_ROSTER, Path::new("roster.toml"))
                .unwrap();
        assert_eq!(file.roster.len(), 8);
        assert!(shuffle_core::all_responded(&file.roster));
    }
}
