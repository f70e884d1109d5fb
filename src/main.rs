use std::io;
use std::process::ExitCode;

use clap::Parser;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hospital_report::cli::Args;
use hospital_report::config::{PostgresConfig, DEFAULT_LOG_FILTER};
use hospital_report::db::{DatabaseBackend, HospitalDb};
use hospital_report::repl::{run_once, Repl};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = PostgresConfig::resolve(args.config.as_deref())?;
    config.apply(&args.to_overrides());

    let mut db = HospitalDb::connect(&config)?;
    info!(db = db.target(), backend = db.backend_name(), "ready");

    if !args.command.is_empty() {
        let ok = run_once(&mut db, &args.command, args.format, &mut io::stdout())?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let mut editor = DefaultEditor::new()?;
    Repl::new(&mut db, args.format).run(&mut editor, &mut io::stdout())?;
    Ok(ExitCode::SUCCESS)
}
