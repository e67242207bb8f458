use std::{
    io::{self, Write},
    process::ExitCode,
};

use indexmap::IndexSet;

use crate::host::Terminate;

/// Required environment variables that never resolved to a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EnvironmentVariableError {
    names: Vec<String>,
    message: String,
}

impl EnvironmentVariableError {
    pub const NAME: &'static str = "EnvironmentVariableError";

    /// Builds the error from a set of names, keeping their order and dropping
    /// repeats. Returns `None` when there are no names.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: IndexSet<String> = names.into_iter().map(Into::into).collect();
        let message = match names.len() {
            0 => return None,
            1 => format!("Environment variable required: {}", names[0]),
            _ => format!(
                "Environment variables required: {}",
                names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
            ),
        };

        Some(Self {
            names: names.into_iter().collect(),
            message,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Type name followed by one indented line per variable.
    pub fn report(&self) -> String {
        let mut out = String::from(Self::NAME);
        for name in &self.names {
            out.push_str("\n  ");
            out.push_str(name);
        }
        out
    }
}

/// Returned instead of ending the process so that the outermost caller can
/// decide when to exit.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct MissingVariables {
    error: EnvironmentVariableError,
}

impl MissingVariables {
    pub const EXIT_STATUS: u8 = 1;

    pub fn error(&self) -> &EnvironmentVariableError {
        &self.error
    }

    /// Writes the summary line that precedes termination.
    pub fn report_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.error)
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(Self::EXIT_STATUS)
    }

    /// Prints the summary to stderr and ends the process through `host`.
    pub fn exit<T: Terminate + ?Sized>(self, host: &T) -> ! {
        let _ = self.report_to(&mut io::stderr().lock());
        host.exit(i32::from(Self::EXIT_STATUS))
    }
}

impl From<EnvironmentVariableError> for MissingVariables {
    fn from(error: EnvironmentVariableError) -> Self {
        Self { error }
    }
}
