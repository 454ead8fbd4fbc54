//! The fixed skill scale students pick from when answering the survey.
//!
//! Levels are plain tags; everything a level "knows" about itself lives in
//! [`SKILL_TABLE`] and is reached through [`skill_info`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A self-reported skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Novice,
    Intermediate,
    Advanced,
    Expert,
}

/// Immutable per-level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillInfo {
    /// Ordering rank, 1 (lowest) through 4.
    pub rank: u8,
    /// Survey answer shown next to the level.
    pub label: &'static str,
    /// Decorative marker used when rendering students and groups.
    pub emblem: &'static str,
}

/// Every level in ascending rank order, paired with its data.
pub static SKILL_TABLE: [(SkillLevel, SkillInfo); 4] = [
    (
        SkillLevel::Novice,
        SkillInfo {
            rank: 1,
            label: "I'm stalling a bit",
            emblem: "🐢",
        },
    ),
    (
        SkillLevel::Intermediate,
        SkillInfo {
            rank: 2,
            label: "I'm shifting gears",
            emblem: "⚙️",
        },
    ),
    (
        SkillLevel::Advanced,
        SkillInfo {
            rank: 3,
            label: "I'm cruising",
            emblem: "🚀",
        },
    ),
    (
        SkillLevel::Expert,
        SkillInfo {
            rank: 4,
            label: "I'm in the fast lane",
            emblem: "🏁",
        },
    ),
];

/// Look up the data for a level.
pub fn skill_info(level: SkillLevel) -> &'static SkillInfo {
    let idx = match level {
        SkillLevel::Novice => 0,
        SkillLevel::Intermediate => 1,
        SkillLevel::Advanced => 2,
        SkillLevel::Expert => 3,
    };
    &SKILL_TABLE[idx].1
}

/// All levels, lowest rank first.
pub fn all_levels() -> impl DoubleEndedIterator<Item = SkillLevel> {
    SKILL_TABLE.iter().map(|(level, _)| *level)
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Novice => write!(f, "novice"),
            SkillLevel::Intermediate => write!(f, "intermediate"),
            SkillLevel::Advanced => write!(f, "advanced"),
            SkillLevel::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    /// Accepts the level name (any case) or its rank as a digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "novice" | "1" => Ok(SkillLevel::Novice),
            "intermediate" | "2" => Ok(SkillLevel::Intermediate),
            "advanced" | "3" => Ok(SkillLevel::Advanced),
            "expert" | "4" => Ok(SkillLevel::Expert),
            other => Err(format!("unknown skill level: {other}")),
        }
    }
}
