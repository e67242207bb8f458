use std::env::{self, VarError};

use super::{HostError, ReadEnv, Terminate};

/// Zero-sized type, delegates to `std::env` and `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ReadEnv for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(HostError::new(key, e)),
        }
    }
}

impl Terminate for ProcessEnv {
    fn exit(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}
