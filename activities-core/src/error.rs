use crate::id::{ActivityName, Email};

/// Errors returned by registry operations.
///
/// `ActivityNotFound` is a lookup failure; the other variants reject a
/// membership transition that is invalid for the current roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No activity is registered under this exact name.
    #[error("activity not found: {name}")]
    ActivityNotFound { name: ActivityName },

    /// The email is already on the activity's roster.
    #[error("student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: ActivityName, email: Email },

    /// The email is not on the activity's roster.
    #[error("student {email} is not registered for {activity}")]
    NotRegistered { activity: ActivityName, email: Email },
}

impl RegistryError {
    /// `true` for lookups of an unknown activity.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActivityNotFound { .. })
    }

    /// `true` for rejected membership transitions.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadySignedUp { .. } | Self::NotRegistered { .. })
    }
}

/// Errors produced while building a registry from a catalog.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// An activity was declared with an empty name.
    #[error("activity name must not be empty")]
    EmptyName,

    /// Two activities share the same name.
    #[error("duplicate activity '{name}' in catalog")]
    DuplicateActivity { name: ActivityName },

    /// An activity's seed roster lists the same email twice.
    #[error("duplicate participant {email} in seed roster of '{activity}'")]
    DuplicateParticipant { activity: ActivityName, email: Email },
}
