//! Stratified round-robin group formation.
//!
//! Students are bucketed by skill level, each bucket is shuffled, and the
//! buckets are dealt out highest rank first onto a single cursor that cycles
//! over the groups. The cursor carries over between buckets and always
//! starts at group 0, so scarce high-rank students land in distinct groups
//! and earlier groups lean slightly stronger.
//!
//! This is a greedy heuristic. It keeps group sizes within one of each other
//! for any skill distribution but does not minimise the spread of group
//! averages.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, ShuffleError};
use crate::model::{Group, Roster, Student};
use crate::query::count_responses;
use crate::random::{group_name, shuffle, RandomSource};
use crate::skill::{all_levels, SkillLevel};

/// Number of groups formed for `num_students` at `group_size` (at least one).
pub fn group_count(num_students: usize, group_size: usize) -> usize {
    num_students.div_ceil(group_size).max(1)
}

/// Partition a fully responded roster into balanced groups.
///
/// Fails with [`ShuffleError::InvalidGroupSize`] for a zero size and with
/// [`ShuffleError::IncompleteRoster`] while any student has not responded.
/// Nothing is mutated on failure.
pub fn create_stratified_groups(
    roster: &Roster,
    group_size: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Group>> {
    if group_size == 0 {
        return Err(ShuffleError::InvalidGroupSize(group_size));
    }

    let status = count_responses(roster);
    if !status.is_complete() {
        return Err(ShuffleError::IncompleteRoster {
            pending: status.pending(),
        });
    }

    let num_groups = group_count(roster.len(), group_size);
    let mut groups: Vec<Group> = (0..num_groups).map(|_| Group::new(group_name(rng))).collect();
    debug!(
        students = roster.len(),
        group_size, num_groups, "forming stratified groups"
    );

    let mut buckets: BTreeMap<SkillLevel, Vec<Arc<Student>>> =
        all_levels().map(|level| (level, Vec::new())).collect();
    for student in roster.students() {
        if let Some(level) = student.skill_level() {
            buckets.entry(level).or_default().push(Arc::clone(student));
        }
    }

    for bucket in buckets.values_mut() {
        shuffle(bucket, rng);
    }

    let mut cursor = 0;
    for (level, bucket) in buckets.into_iter().rev() {
        debug!(%level, count = bucket.len(), start_group = cursor, "dealing bucket");
        for student in bucket {
            groups[cursor].add_member(student);
            cursor = (cursor + 1) % num_groups;
        }
    }

    Ok(groups)
}
