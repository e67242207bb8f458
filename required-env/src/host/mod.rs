//! Host facilities that can answer "what is the value of this variable".
//!
//! A [`Host`] is picked once, usually with [`Host::detect`], and every lookup
//! goes through that single facility. There is no fallthrough from one
//! facility to another within a call.
//!
//! ```
//! use required_env::host::{Host, MapEnv, ReadEnv};
//!
//! let host = Host::from(MapEnv::new([("DATABASE_URL", "postgres://localhost")]));
//! assert_eq!(
//!     host.var("DATABASE_URL").unwrap().as_deref(),
//!     Some("postgres://localhost"),
//! );
//! assert_eq!(host.var("MISSING").unwrap(), None);
//! ```

mod getter;
#[cfg(test)]
mod in_memory;
mod map;
mod process;

use std::{error::Error, fmt};

pub use getter::GetterEnv;
#[cfg(test)]
pub(crate) use in_memory::InMemoryEnv;
pub use map::MapEnv;
pub use process::ProcessEnv;

/// Read access to a named variable.
///
/// `Ok(None)` means the facility has no value for `key`. Failures of the
/// facility itself are returned as [`HostError`] with the original error kept
/// as its source.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostError>;
}

/// Ends the process with the given exit status.
pub trait Terminate {
    fn exit(&self, code: i32) -> !;
}

#[derive(Debug, thiserror::Error)]
#[error("failed to read environment variable '{key}'")]
pub struct HostError {
    key: String,
    #[source]
    source: Box<dyn Error + Send + Sync>,
}

impl HostError {
    pub fn new(key: impl Into<String>, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            key: key.into(),
            source: source.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// The facility selected for this process.
pub enum Host {
    Process(ProcessEnv),
    Getter(GetterEnv),
    Map(MapEnv),
    /// No environment facility on this target; every key resolves to absent.
    Unavailable,
}

impl Host {
    /// Picks the facility the compilation target provides.
    ///
    /// `wasm32-unknown-unknown` has no process environment at all, so it gets
    /// [`Host::Unavailable`]. Every other target reads the process environment.
    pub fn detect() -> Self {
        if cfg!(all(target_family = "wasm", target_os = "unknown")) {
            Host::Unavailable
        } else {
            Host::Process(ProcessEnv)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Host::Process(_) => "process",
            Host::Getter(_) => "getter",
            Host::Map(_) => "map",
            Host::Unavailable => "unavailable",
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Host").field(&self.name()).finish()
    }
}

impl ReadEnv for Host {
    fn var(&self, key: &str) -> Result<Option<String>, HostError> {
        match self {
            Host::Process(env) => env.var(key),
            Host::Getter(env) => env.var(key),
            Host::Map(env) => env.var(key),
            Host::Unavailable => Ok(None),
        }
    }
}

impl Terminate for Host {
    // All hosts end the same process.
    fn exit(&self, code: i32) -> ! {
        ProcessEnv.exit(code)
    }
}

impl From<ProcessEnv> for Host {
    fn from(env: ProcessEnv) -> Self {
        Host::Process(env)
    }
}

impl From<GetterEnv> for Host {
    fn from(env: GetterEnv) -> Self {
        Host::Getter(env)
    }
}

impl From<MapEnv> for Host {
    fn from(env: MapEnv) -> Self {
        Host::Map(env)
    }
}
