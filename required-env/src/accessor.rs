use tracing::{debug, trace, warn};

use crate::{
    error::{EnvironmentVariableError, MissingVariables},
    host::{Host, HostError, ReadEnv, Terminate},
    tracker::Tracker,
};

/// Looks variables up through one host facility and remembers the ones that
/// were required but not set.
///
/// Lookups never fail because a variable is missing. Call [`Env::check`] (or
/// one of the exiting variants) once all lookups are done to get a single
/// report covering every missing variable.
#[derive(Debug, Default)]
pub struct Env<R = Host> {
    host: R,
    missing: Tracker,
}

impl Env<Host> {
    pub fn detect() -> Self {
        Self::new(Host::detect())
    }
}

impl<R: ReadEnv> Env<R> {
    pub fn new(host: R) -> Self {
        Self {
            host,
            missing: Tracker::new(),
        }
    }

    pub fn host(&self) -> &R {
        &self.host
    }

    pub fn missing(&self) -> &Tracker {
        &self.missing
    }

    /// Resolves `key`, falling back to `default`.
    ///
    /// With no value and no default the key is tracked as missing and
    /// `Ok(None)` is returned. `Some("")` is a usable default.
    pub fn get(&self, key: &str, default: Option<&str>) -> Result<Option<String>, HostError> {
        if let Some(value) = self.host.var(key)? {
            trace!(key, "environment variable resolved");
            return Ok(Some(value));
        }

        match default {
            Some(default) => Ok(Some(default.to_string())),
            None => {
                if self.missing.insert(key) {
                    debug!(key, "environment variable not set, tracking as missing");
                }
                Ok(None)
            }
        }
    }

    pub fn var(&self, key: &str) -> Result<Option<String>, HostError> {
        self.get(key, None)
    }

    pub fn var_or(&self, key: &str, default: &str) -> Result<String, HostError> {
        Ok(self.get(key, Some(default))?.unwrap_or_else(|| default.to_string()))
    }

    /// Fails with every variable tracked so far. The tracker is left as is.
    pub fn check(&self) -> Result<(), EnvironmentVariableError> {
        match EnvironmentVariableError::new(self.missing.names()) {
            None => Ok(()),
            Some(error) => {
                warn!(
                    count = error.names().len(),
                    "required environment variables are not set"
                );
                Err(error)
            }
        }
    }

    pub fn check_fatal(&self) -> Result<(), MissingVariables> {
        self.check().map_err(MissingVariables::from)
    }
}

impl<R: ReadEnv + Terminate> Env<R> {
    /// Prints the summary to stderr and exits with status 1 when anything is
    /// missing. Returns only when nothing is.
    pub fn check_or_exit(&self) {
        if let Err(fatal) = self.check_fatal() {
            fatal.exit(&self.host)
        }
    }
}
