use std::collections::HashMap;

use super::{HostError, ReadEnv};

/// A name/value map handed over by an alternate runtime.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Copies the current process environment. Entries that are not valid
    /// unicode are skipped.
    pub fn snapshot() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.vars.get(key).cloned())
    }
}
