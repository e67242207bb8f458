use std::collections::HashMap;

use clap::{Parser, ValueEnum};

/// Looks up environment variables and fails if any of them is not set.
#[derive(Parser, Debug)]
#[command(name = "env-check", version)]
pub struct Args {
    /// Variables to look up
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Fallback value for a variable, as KEY=VALUE. May be repeated.
    #[arg(short, long = "default", value_name = "KEY=VALUE", value_parser = parse_default)]
    pub defaults: Vec<(String, String)>,

    /// How to finish when variables are missing
    #[arg(short, long, value_enum, default_value_t = Mode::Exit)]
    pub mode: Mode,

    /// Do not print resolved values
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Return the error from main
    Raise,
    /// Print the summary and exit from inside the library
    Exit,
    /// Print the summary and return an exit code from main
    Report,
}

impl Args {
    /// Later `--default` flags for the same key win.
    pub fn default_map(&self) -> HashMap<&str, &str> {
        self.defaults
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

fn parse_default(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("invalid default '{input}', expected KEY=VALUE"))?;
    if key.is_empty() {
        return Err(format!("invalid default '{input}', key is empty"));
    }
    Ok((key.to_string(), value.to_string()))
}
