//! shuffle-core — Roster model and stratified group formation.
//!
//! This crate holds the survey state (students, responses, rosters) and the
//! round-robin engine that turns a fully responded roster into balanced
//! breakout groups. It performs no I/O beyond the optional roster, config
//! and report file helpers.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod query;
pub mod random;
pub mod report;
pub mod session;
pub mod skill;

pub use engine::create_stratified_groups;
pub use error::ShuffleError;
pub use model::{Group, Roster, SkillTier, Student};
pub use query::{all_responded, count_responses, ResponseCount};
pub use random::{RandomSource, Xorshift64};
pub use session::Session;
pub use skill::{skill_info, SkillInfo, SkillLevel};
