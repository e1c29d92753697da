use std::fmt;

use serde::Serialize;

use crate::id::{ActivityName, Email};

/// An extracurricular activity and its current roster.
///
/// The name is the registry key and is not part of the serialized form;
/// serialized activities carry only `description`, `schedule`,
/// `max_participants` and `participants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Activity {
    /// Registry key, matched exactly.
    #[serde(skip)]
    pub name: ActivityName,
    /// Free-text description.
    pub description: String,
    /// Free-text meeting days and times.
    pub schedule: String,
    /// Advisory capacity. Never enforced.
    pub max_participants: u32,
    /// Enrolled emails in registration order.
    pub participants: Vec<Email>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    pub fn new(
        name: impl Into<ActivityName>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replaces the roster, keeping the given order.
    #[must_use]
    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `email` is on the roster.
    #[must_use]
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Which membership transition a [`Confirmation`] acknowledges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfirmationKind {
    SignedUp,
    Unregistered,
}

/// Acknowledgement of a successful enroll or withdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Confirmation {
    pub kind: ConfirmationKind,
    pub activity: ActivityName,
    pub email: Email,
}

impl Confirmation {
    #[must_use]
    pub fn signed_up(activity: ActivityName, email: Email) -> Self {
        Self { kind: ConfirmationKind::SignedUp, activity, email }
    }

    #[must_use]
    pub fn unregistered(activity: ActivityName, email: Email) -> Self {
        Self { kind: ConfirmationKind::Unregistered, activity, email }
    }

    /// Human-readable message, e.g. `Signed up a@b for Chess Club`.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConfirmationKind::SignedUp => {
                write!(f, "Signed up {} for {}", self.email, self.activity)
            }
            ConfirmationKind::Unregistered => {
                write!(f, "Unregistered {} from {}", self.email, self.activity)
            }
        }
    }
}
