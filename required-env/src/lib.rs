//! Environment variable lookups with deferred reporting of missing variables.
//!
//! Lookups never fail because a variable is unset. Variables requested
//! without a default are remembered instead, and one call at the end of
//! startup reports all of them at once.
//!
//! ```
//! use required_env::{Env, host::MapEnv};
//!
//! let env = Env::new(MapEnv::new([("PORT", "8080")]));
//!
//! assert_eq!(env.get("PORT", None).unwrap().as_deref(), Some("8080"));
//! assert_eq!(env.get("HOST", Some("0.0.0.0")).unwrap().as_deref(), Some("0.0.0.0"));
//! assert_eq!(env.get("DATABASE_URL", None).unwrap(), None);
//!
//! let err = env.check().unwrap_err();
//! assert_eq!(err.to_string(), "Environment variable required: DATABASE_URL");
//! ```
//!
//! The free function [`env`] does the same against a process-wide [`Env`]
//! reachable through [`global`].

pub mod accessor;
pub mod error;
pub mod host;
pub mod tracker;

use once_cell::sync::Lazy;

pub use accessor::Env;
pub use error::{EnvironmentVariableError, MissingVariables};
pub use host::{GetterEnv, Host, HostError, MapEnv, ProcessEnv, ReadEnv, Terminate};
pub use tracker::Tracker;

static GLOBAL: Lazy<Env> = Lazy::new(Env::detect);

/// The process-wide accessor, bound to [`Host::detect`] on first use.
pub fn global() -> &'static Env {
    &GLOBAL
}

/// Looks `key` up through [`global`].
pub fn env(key: &str, default: Option<&str>) -> Result<Option<String>, HostError> {
    GLOBAL.get(key, default)
}
