//! Roster file loading and validation.
//!
//! Two formats are understood: a TOML roster with optional survey answers,
//! and a plain list with one student name per line.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Roster, Student};
use crate::skill::SkillLevel;

/// Intermediate TOML structure for roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    #[serde(default)]
    roster: Option<TomlRosterHeader>,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlRosterHeader {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    skill: Option<String>,
}

/// A loaded roster and its display name.
#[derive(Debug, Clone)]
pub struct RosterFile {
    pub name: String,
    pub roster: Roster,
}

/// Load a roster from disk. `.toml` files are parsed as TOML rosters,
/// anything else as a name-per-line list.
pub fn load_roster(path: &Path) -> Result<RosterFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        parse_roster_str(&content, path)
    } else {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(RosterFile {
            name,
            roster: parse_name_list(&content),
        })
    }
}

/// Parse a TOML roster string.
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<RosterFile> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| {
            let mut student = Student::new(s.name.trim());
            if let Some(email) = s.email.filter(|e| !e.trim().is_empty()) {
                student = student.with_email(email.trim());
            }
            if let Some(skill) = s.skill {
                let level: SkillLevel = skill.parse().map_err(|e: String| {
                    anyhow::anyhow!("student {}: {}", student.name(), e)
                })?;
                student.submit_response(level)?;
            }
            Ok(student)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RosterFile {
        name: parsed.roster.map(|h| h.name).unwrap_or_default(),
        roster: students.into_iter().collect(),
    })
}

/// One name per line; surrounding whitespace and blank lines are dropped.
pub fn parse_name_list(content: &str) -> Roster {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Student::new)
        .collect()
}

/// What a validation warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    EmptyName,
    DuplicateName,
    /// The student has not answered the survey; blocks formation.
    Unresponded,
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    /// The student the warning is about, if any.
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a roster for issues that block or muddle group formation.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for student in roster.iter() {
        if student.name().trim().is_empty() {
            warnings.push(ValidationWarning {
                kind: WarningKind::EmptyName,
                student: None,
                message: "student with empty name".into(),
            });
        } else if !seen.insert(student.name()) {
            tracing::warn!("duplicate student name: {}", student.name());
            warnings.push(ValidationWarning {
                kind: WarningKind::DuplicateName,
                student: Some(student.name().to_string()),
                message: format!("duplicate student name: {}", student.name()),
            });
        }
    }

    for student in roster.iter().filter(|s| !s.has_responded()) {
        warnings.push(ValidationWarning {
            kind: WarningKind::Unresponded,
            student: Some(student.name().to_string()),
            message: "has not responded yet".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[roster]
name = "Intro to Rust"

[[students]]
name = "Ada"
email = "ada@example.com"
skill = "expert"

[[students]]
name = "Grace"
skill = "2"

[[students]]
name = "Linus"
"#;

    #[test]
    fn parse_valid_toml() {
        let file = parse_roster_str(VALID_TOML, &PathBuf::from("roster.toml")).unwrap();
        assert_eq!(file.name, "Intro to Rust");
        assert_eq!(file.roster.len(), 3);
        let ada = file.roster.find("Ada").unwrap();
        assert_eq!(ada.email(), Some("ada@example.com"));
        assert_eq!(ada.skill_level(), Some(SkillLevel::Expert));
        assert_eq!(
            file.roster.find("Grace").unwrap().skill_level(),
            Some(SkillLevel::Intermediate)
        );
        assert!(!file.roster.find("Linus").unwrap().has_responded());
    }

    #[test]
    fn header_is_optional() {
        let toml = "[[students]]\nname = \"Solo\"\n";
        let file = parse_roster_str(toml, &PathBuf::from("r.toml")).unwrap();
        assert!(file.name.is_empty());
        assert_eq!(file.roster.len(), 1);
    }

    #[test]
    fn unknown_skill_names_the_student() {
        let toml = "[[students]]\nname = \"Bob\"\nskill = \"wizard\"\n";
        let err = parse_roster_str(toml, &PathBuf::from("r.toml")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Bob"));
        assert!(msg.contains("wizard"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_roster_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn name_list_ignores_blank_lines() {
        let roster = parse_name_list("Ada\n\n  Grace  \n\t\nLinus\n");
        let names: Vec<&str> = roster.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
        assert!(roster.iter().all(|s| !s.has_responded()));
    }

    #[test]
    fn validate_flags_duplicates_and_pending() {
        let file = parse_roster_str(
            "[[students]]\nname = \"A\"\nskill = \"novice\"\n[[students]]\nname = \"A\"\n",
            &PathBuf::from("r.toml"),
        )
        .unwrap();
        let warnings = validate_roster(&file.roster);
        let kinds: Vec<WarningKind> = warnings.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![WarningKind::DuplicateName, WarningKind::Unresponded]
        );
        assert!(warnings[0].message.contains("duplicate"));
        assert_eq!(warnings[1].student.as_deref(), Some("A"));
    }

    #[test]
    fn validate_flags_empty_names() {
        let file = parse_roster_str(
            "[[students]]\nname = \"  \"\nskill = \"expert\"\n",
            &PathBuf::from("r.toml"),
        )
        .unwrap();
        let warnings = validate_roster(&file.roster);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::EmptyName);
        assert!(warnings[0].student.is_none());
    }

    #[test]
    fn load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("class.toml");
        std::fs::write(&toml_path, VALID_TOML).unwrap();
        assert_eq!(load_roster(&toml_path).unwrap().roster.len(), 3);

        let txt_path = dir.path().join("class.txt");
        std::fs::write(&txt_path, "One\nTwo\n").unwrap();
        let file = load_roster(&txt_path).unwrap();
        assert_eq!(file.name, "class");
        assert_eq!(file.roster.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        assert!(load_roster(Path::new("nonexistent.toml")).is_err());
    }
}
