//! Serializable snapshot of a formation run.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Group, SkillTier};
use crate::query::ResponseCount;
use crate::skill::{skill_info, SkillLevel};

/// A complete formation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the groups were formed.
    pub created_at: DateTime<Utc>,
    /// Requested students per group.
    pub group_size: usize,
    /// Seed used, when formation was reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Survey status at formation time.
    pub status: ResponseCount,
    /// Groups in breakout-room order.
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// 1-based breakout room number.
    pub room: usize,
    pub name: String,
    pub tier: SkillTier,
    pub emblem: String,
    pub average_skill_level: f64,
    pub members: Vec<MemberSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummary {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub skill_level: Option<SkillLevel>,
    /// Survey answer text for the member's level.
    #[serde(default)]
    pub skill_label: Option<String>,
}

impl GroupSummary {
    pub fn from_group(room: usize, group: &Group) -> Self {
        let tier = group.skill_tier();
        Self {
            room,
            name: group.name().to_string(),
            tier,
            emblem: tier.emblem().to_string(),
            average_skill_level: group.average_skill_level(),
            members: group
                .members()
                .iter()
                .map(|m| MemberSummary {
                    name: m.name().to_string(),
                    email: m.email().map(str::to_string),
                    skill_level: m.skill_level(),
                    skill_label: m.skill_level().map(|l| skill_info(l).label.to_string()),
                })
                .collect(),
        }
    }
}

impl FormationReport {
    pub fn new(
        groups: &[Group],
        group_size: usize,
        seed: Option<u64>,
        status: ResponseCount,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            group_size,
            seed,
            status,
            groups: groups
                .iter()
                .enumerate()
                .map(|(idx, g)| GroupSummary::from_group(idx + 1, g))
                .collect(),
        }
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}
