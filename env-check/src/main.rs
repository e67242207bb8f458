use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use required_env::{Env, ReadEnv};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Mode};

mod cli;

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

fn print_resolved<R: ReadEnv>(env: &Env<R>, args: &Args) -> Result<()> {
    let defaults = args.default_map();
    for key in &args.keys {
        let value = env.get(key, defaults.get(key.as_str()).copied())?;
        match value {
            Some(value) if !args.quiet => println!("{key}={value}"),
            _ => {}
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    setup_logging();
    let args = Args::parse();

    let env = Env::detect();
    debug!(host = env.host().name(), "environment host selected");

    print_resolved(&env, &args)?;

    match args.mode {
        Mode::Raise => env.check()?,
        Mode::Exit => env.check_or_exit(),
        Mode::Report => {
            if let Err(fatal) = env.check_fatal() {
                fatal.report_to(&mut io::stderr().lock())?;
                return Ok(fatal.exit_code());
            }
        }
    }

    info!(count = args.keys.len(), "all environment variables resolved");
    Ok(ExitCode::SUCCESS)
}
