//! Per-session state: the roster, the last formed groups, and settings.
//!
//! A session is plain owned data passed by `&mut` to every mutating call.
//! Sharing one across threads needs an outer lock (e.g. `Mutex<Session>`)
//! around response submission and group formation.

use tracing::info;

use crate::config::ShuffleConfig;
use crate::engine::create_stratified_groups;
use crate::error::{Result, ShuffleError};
use crate::model::{Group, Roster, Student};
use crate::query::{self, ResponseCount};
use crate::random::RandomSource;
use crate::skill::SkillLevel;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub roster: Roster,
    pub groups: Vec<Group>,
    pub config: ShuffleConfig,
}

impl Session {
    pub fn new(config: ShuffleConfig) -> Self {
        Self {
            roster: Roster::new(),
            groups: Vec::new(),
            config,
        }
    }

    pub fn with_roster(roster: Roster, config: ShuffleConfig) -> Self {
        Self {
            roster,
            groups: Vec::new(),
            config,
        }
    }

    /// Add students by name, skipping blanks and names already enrolled.
    ///
    /// Returns how many students were added.
    pub fn enroll<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || self.roster.contains(name) {
                continue;
            }
            self.roster.push(Student::new(name));
            added += 1;
        }
        info!(added, total = self.roster.len(), "students enrolled");
        added
    }

    /// Record a response for the first student with this name.
    ///
    /// The response state is checked before taking a mutable handle, so a
    /// rejected submission never detaches the roster entry from its groups.
    pub fn submit_response(&mut self, name: &str, level: SkillLevel) -> Result<()> {
        let unknown = || ShuffleError::UnknownStudent {
            name: name.to_string(),
        };
        let existing = self.roster.find(name).ok_or_else(unknown)?;
        if existing.has_responded() {
            return Err(ShuffleError::AlreadyResponded {
                name: existing.name().to_string(),
            });
        }
        self.roster
            .find_mut(name)
            .ok_or_else(unknown)?
            .submit_response(level)
    }

    pub fn status(&self) -> ResponseCount {
        query::count_responses(&self.roster)
    }

    pub fn all_responded(&self) -> bool {
        query::all_responded(&self.roster)
    }

    pub fn pending(&self) -> Vec<&str> {
        query::pending_names(&self.roster)
    }

    /// Form groups at the configured size. Previous groups survive a failure.
    pub fn form_groups(&mut self, rng: &mut dyn RandomSource) -> Result<&[Group]> {
        let groups = create_stratified_groups(&self.roster, self.config.group_size, rng)?;
        info!(groups = groups.len(), "groups formed");
        self.groups = groups;
        Ok(&self.groups)
    }

    pub fn clear(&mut self) {
        self.roster.clear();
        self.groups.clear();
    }
}
