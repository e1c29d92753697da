//! Process configuration read from the environment.

use std::path::PathBuf;

/// Environment variable holding the `host:port` to bind.
pub const LISTEN_ADDR_VAR: &str = "ACTIVITIES_LISTEN_ADDR";
/// Environment variable holding the directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "ACTIVITIES_STATIC_DIR";

/// Gateway startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address to listen on.
    pub listen_addr: String,
    /// Directory of front-end assets.
    pub static_dir: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_owned(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl GatewayConfig {
    /// Read settings from the process environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());
        Self {
            listen_addr: get(LISTEN_ADDR_VAR).unwrap_or(defaults.listen_addr),
            static_dir: get(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from),
        }
    }
}
