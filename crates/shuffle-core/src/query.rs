//! Read-only roster status queries.

use serde::{Deserialize, Serialize};

use crate::model::Roster;

/// Survey progress for a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCount {
    pub responded: usize,
    pub total: usize,
}

impl ResponseCount {
    pub fn is_complete(&self) -> bool {
        self.responded == self.total
    }

    pub fn pending(&self) -> usize {
        self.total - self.responded
    }

    /// Responded share in `0.0..=1.0`; an empty roster counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.responded as f64 / self.total as f64
    }
}

/// Count responses in a single pass.
pub fn count_responses(roster: &Roster) -> ResponseCount {
    let responded = roster.iter().filter(|s| s.has_responded()).count();
    ResponseCount {
        responded,
        total: roster.len(),
    }
}

/// `true` when every student has responded (vacuously so for an empty roster).
pub fn all_responded(roster: &Roster) -> bool {
    roster.iter().all(|s| s.has_responded())
}

/// Names of students still owing a response, in roster order.
pub fn pending_names(roster: &Roster) -> Vec<&str> {
    roster
        .iter()
        .filter(|s| !s.has_responded())
        .map(|s| s.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::skill::SkillLevel;

    fn responded_roster() -> Roster {
        vec![
            Student::responded("Expert 1", SkillLevel::Expert),
            Student::responded("Expert 2", SkillLevel::Expert),
            Student::responded("Advanced 1", SkillLevel::Advanced),
            Student::responded("Advanced 2", SkillLevel::Advanced),
            Student::responded("Intermediate 1", SkillLevel::Intermediate),
            Student::responded("Intermediate 2", SkillLevel::Intermediate),
            Student::responded("Novice 1", SkillLevel::Novice),
            Student::responded("Novice 2", SkillLevel::Novice),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_roster() {
        let roster = Roster::new();
        let count = count_responses(&roster);
        assert_eq!(count, ResponseCount { responded: 0, total: 0 });
        assert!(all_responded(&roster));
        assert!(count.is_complete());
        assert_eq!(count.fraction(), 1.0);
    }

    #[test]
    fn counts_track_non_responders() {
        let mut roster = responded_roster();
        let count = count_responses(&roster);
        assert_eq!((count.responded, count.total), (8, 8));
        assert!(all_responded(&roster));

        roster.push(Student::new("No Response"));
        let count = count_responses(&roster);
        assert_eq!((count.responded, count.total), (8, 9));
        assert_eq!(count.pending(), 1);
        assert!(!all_responded(&roster));
        assert_eq!(pending_names(&roster), vec!["No Response"]);
    }

    #[test]
    fn all_responded_agrees_with_counts() {
        let mut roster = Roster::new();
        roster.push(Student::new("A"));
        roster.push(Student::responded("B", SkillLevel::Novice));
        for _ in 0..2 {
            let count = count_responses(&roster);
            assert!(count.responded <= count.total);
            assert_eq!(count.total, roster.len());
            assert_eq!(all_responded(&roster), count.is_complete());
        }
        roster
            .find_mut("A")
            .unwrap()
            .submit_response(SkillLevel::Advanced)
            .unwrap();
        assert_eq!(all_responded(&roster), count_responses(&roster).is_complete());
        assert!(all_responded(&roster));
    }

    #[test]
    fn queries_are_repeatable() {
        let roster = responded_roster();
        assert_eq!(count_responses(&roster), count_responses(&roster));
        assert_eq!(all_responded(&roster), all_responded(&roster));
    }
}
