use std::{error::Error, fmt};

use super::{HostError, ReadEnv};

type Getter = dyn Fn(&str) -> Result<Option<String>, HostError> + Send + Sync;

/// A facility exposed by an embedding runtime as a `get(key)` method.
pub struct GetterEnv {
    get: Box<Getter>,
}

impl GetterEnv {
    pub fn new<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            get: Box::new(move |key: &str| -> Result<Option<String>, HostError> {
                Ok(get(key))
            }),
        }
    }

    /// For getters that can fail. The error is handed back as the source of
    /// a [`HostError`] for the key being read.
    pub fn fallible<F, E>(get: F) -> Self
    where
        F: Fn(&str) -> Result<Option<String>, E> + Send + Sync + 'static,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self {
            get: Box::new(move |key: &str| get(key).map_err(|e| HostError::new(key, e))),
        }
    }
}

impl fmt::Debug for GetterEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetterEnv").finish_non_exhaustive()
    }
}

impl ReadEnv for GetterEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostError> {
        (self.get)(key)
    }
}
