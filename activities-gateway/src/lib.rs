//! HTTP API for the Mergington High School activity registry.
//!
//! Lists activities and lets students sign up for or unregister from them.
//! Static front-end assets are served under `/static`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
