//! Roster and group entities.
//!
//! Students are shared, never copied: a [`Group`] holds the same
//! `Arc<Student>` handles as the [`Roster`] it was formed from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ShuffleError};
use crate::skill::{skill_info, SkillLevel};

/// A tracked student and their survey response.
///
/// A student with a skill level has responded; there is no separate flag
/// to drift out of sync with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    email: Option<String>,
    skill_level: Option<SkillLevel>,
}

impl Student {
    /// A student who has not yet answered the survey.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            skill_level: None,
        }
    }

    /// A student whose response is already known (e.g. loaded from a file).
    pub fn responded(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            email: None,
            skill_level: Some(level),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn skill_level(&self) -> Option<SkillLevel> {
        self.skill_level
    }

    pub fn has_responded(&self) -> bool {
        self.skill_level.is_some()
    }

    /// Record the student's one and only response.
    pub fn submit_response(&mut self, level: SkillLevel) -> Result<()> {
        if self.has_responded() {
            return Err(ShuffleError::AlreadyResponded {
                name: self.name.clone(),
            });
        }
        self.skill_level = Some(level);
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.skill_level {
            Some(level) => write!(f, "{} {}", self.name, skill_info(level).emblem),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The ordered set of students for one session.
///
/// Duplicate names are allowed here; de-duplication is a caller policy.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Arc<Student>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, student: Student) {
        self.students.push(Arc::new(student));
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Arc<Student>] {
        &self.students
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter().map(|s| s.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// First student with this name.
    pub fn find(&self, name: &str) -> Option<&Student> {
        self.iter().find(|s| s.name() == name)
    }

    /// Mutable access to the first student with this name.
    ///
    /// If the student is currently shared with a formed group, the roster
    /// gets its own copy and the group keeps the old snapshot.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.name() == name)
            .map(Arc::make_mut)
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Coarse display bucket for a group's average skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Bottom,
    LowerMid,
    UpperMid,
    Top,
}

impl SkillTier {
    /// Classify an average rank; boundaries belong to the higher tier.
    pub fn from_average(average: f64) -> Self {
        if average >= 3.5 {
            SkillTier::Top
        } else if average >= 2.5 {
            SkillTier::UpperMid
        } else if average >= 1.5 {
            SkillTier::LowerMid
        } else {
            SkillTier::Bottom
        }
    }

    /// Same markers as the skill scale, one per tier.
    pub fn emblem(self) -> &'static str {
        match self {
            SkillTier::Top => skill_info(SkillLevel::Expert).emblem,
            SkillTier::UpperMid => skill_info(SkillLevel::Advanced).emblem,
            SkillTier::LowerMid => skill_info(SkillLevel::Intermediate).emblem,
            SkillTier::Bottom => skill_info(SkillLevel::Novice).emblem,
        }
    }
}

/// A breakout group produced by the formation engine.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    members: Vec<Arc<Student>>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Arc<Student>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append a member. No capacity or duplicate checks.
    pub fn add_member(&mut self, student: Arc<Student>) {
        self.members.push(student);
    }

    /// Mean member rank, or 0.0 when empty or when any member lacks a level.
    pub fn average_skill_level(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let mut total = 0u32;
        for member in &self.members {
            match member.skill_level() {
                Some(level) => total += u32::from(skill_info(level).rank),
                None => return 0.0,
            }
        }
        f64::from(total) / self.members.len() as f64
    }

    pub fn skill_tier(&self) -> SkillTier {
        SkillTier::from_average(self.average_skill_level())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (Avg: {:.1})",
            self.name,
            self.skill_tier().emblem(),
            self.average_skill_level()
        )
    }
}
