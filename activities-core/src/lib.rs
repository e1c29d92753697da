//! Core types for the Mergington High School activity registry.
//!
//! Defines activities, the in-memory registry that owns their rosters,
//! the error taxonomy for enroll and withdraw, and the seed catalog.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod error;
pub mod id;
pub mod registry;
pub mod seed;

pub use activity::{Activity, Confirmation, ConfirmationKind};
pub use error::{CatalogError, RegistryError};
pub use id::{ActivityName, Email};
pub use registry::Registry;
pub use seed::seed_activities;
