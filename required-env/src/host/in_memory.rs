use std::{cell::RefCell, collections::BTreeMap};

use super::{HostError, ReadEnv};

/// Host double whose variables can be changed while an [`Env`](crate::Env)
/// is holding it.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<BTreeMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn unset(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.vars.borrow().get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_reads_as_absent() {
        let host = InMemoryEnv::new();
        host.set("REDIS_URL", "redis://localhost");
        host.unset("REDIS_URL");

        assert_eq!(host.var("REDIS_URL").unwrap(), None);
    }

    #[test]
    fn test_later_set_replaces_value() {
        let host = InMemoryEnv::new();
        host.set("LOG_FORMAT", "text");
        host.set("LOG_FORMAT", "json");

        assert_eq!(host.var("LOG_FORMAT").unwrap().as_deref(), Some("json"));
    }
}
