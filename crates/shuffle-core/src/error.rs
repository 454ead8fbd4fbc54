//! Roster and formation error types.
//!
//! Every variant is a synchronous precondition failure: the operation that
//! returns it leaves roster and group state untouched.

use thiserror::Error;

/// Errors raised by response submission, group formation and session lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// The student already submitted a skill level.
    #[error("student {name} has already submitted a response")]
    AlreadyResponded { name: String },

    /// Group formation was requested while responses are outstanding.
    #[error("all students must respond before groups can be formed ({pending} pending)")]
    IncompleteRoster { pending: usize },

    /// The requested group size cannot produce any group.
    #[error("invalid group size: {0} (must be at least 1)")]
    InvalidGroupSize(usize),

    /// No student with this name is on the roster.
    #[error("no student named {name} on the roster")]
    UnknownStudent { name: String },
}

pub type Result<T, E = ShuffleError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ShuffleError::AlreadyResponded {
            name: "Ada".into(),
        };
        assert_eq!(err.to_string(), "student Ada has already submitted a response");

        let err = ShuffleError::IncompleteRoster { pending: 2 };
        assert!(err.to_string().contains("2 pending"));

        assert!(ShuffleError::InvalidGroupSize(0).to_string().contains('0'));
    }
}
