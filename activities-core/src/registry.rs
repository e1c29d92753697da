//! In-memory activity registry.
//!
//! The key set is fixed at construction. Each activity sits behind its own
//! mutex, so a membership check and the mutation it guards happen under one
//! lock and concurrent signups for the same activity cannot both succeed.

use std::sync::{Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::{
    activity::{Activity, Confirmation},
    error::{CatalogError, RegistryError},
    id::{ActivityName, Email},
    seed::seed_activities,
};

/// Thread-safe registry of activities keyed by exact name.
#[derive(Debug)]
pub struct Registry {
    entries: IndexMap<ActivityName, Mutex<Activity>>,
}

impl Registry {
    /// Build a registry from a catalog, keeping catalog order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if a name is empty, a name repeats, or a seed
    /// roster lists an email twice.
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Result<Self, CatalogError> {
        let mut entries = IndexMap::new();
        for activity in activities {
            if activity.name.as_str().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            for (i, email) in activity.participants.iter().enumerate() {
                if activity.participants[..i].contains(email) {
                    return Err(CatalogError::DuplicateParticipant {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    });
                }
            }
            if entries.contains_key(&activity.name) {
                return Err(CatalogError::DuplicateActivity { name: activity.name });
            }
            entries.insert(activity.name.clone(), Mutex::new(activity));
        }
        Ok(Self { entries })
    }

    /// Build a registry over the school's seed catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] only if the seed catalog itself is malformed.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_activities())
    }

    /// Number of activities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every activity, including live rosters, in catalog order.
    ///
    /// # Panics
    /// Panics if an activity lock is poisoned.
    #[must_use]
    pub fn list_activities(&self) -> IndexMap<ActivityName, Activity> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), lock(entry).clone()))
            .collect()
    }

    /// Snapshot of a single activity.
    ///
    /// # Panics
    /// Panics if the activity lock is poisoned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.entries.get(name).map(|entry| lock(entry).clone())
    }

    /// Append `email` to the roster of `activity`.
    ///
    /// # Errors
    /// - [`RegistryError::ActivityNotFound`] if no activity has this exact name.
    /// - [`RegistryError::AlreadySignedUp`] if the email is already enrolled;
    ///   the roster is left untouched.
    ///
    /// # Panics
    /// Panics if the activity lock is poisoned.
    pub fn enroll(&self, activity: &str, email: &str) -> Result<Confirmation, RegistryError> {
        let (name, entry) = self.entry(activity)?;
        let mut state = lock(entry);
        if state.is_enrolled(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.clone(),
                email: Email::from(email),
            });
        }
        state.participants.push(Email::from(email));
        Ok(Confirmation::signed_up(name.clone(), Email::from(email)))
    }

    /// Remove `email` from the roster of `activity`.
    ///
    /// # Errors
    /// - [`RegistryError::ActivityNotFound`] if no activity has this exact name.
    /// - [`RegistryError::NotRegistered`] if the email is not enrolled.
    ///
    /// # Panics
    /// Panics if the activity lock is poisoned.
    pub fn withdraw(&self, activity: &str, email: &str) -> Result<Confirmation, RegistryError> {
        let (name, entry) = self.entry(activity)?;
        let mut state = lock(entry);
        let Some(pos) = state.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: name.clone(),
                email: Email::from(email),
            });
        };
        let removed = state.participants.remove(pos);
        Ok(Confirmation::unregistered(name.clone(), removed))
    }

    fn entry(&self, activity: &str) -> Result<(&ActivityName, &Mutex<Activity>), RegistryError> {
        self.entries
            .get_key_value(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound { name: ActivityName::from(activity) })
    }
}

#[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
fn lock(entry: &Mutex<Activity>) -> MutexGuard<'_, Activity> {
    entry.lock().expect("activity lock poisoned")
}
