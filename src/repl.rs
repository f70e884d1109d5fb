//! Interactive command loop.
//!
//! Reads one line per iteration, parses it into a [`ReplCommand`] and writes
//! the rendered result. Line editing is abstracted behind [`LineReader`] so
//! the loop can be driven by a script in tests.

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::{ReplCommand, UNKNOWN_COMMAND};
use crate::db::DatabaseBackend;
use crate::output::OutputFormat;

pub const PROMPT: &str = "> ";

/// Outcome of one attempt to read a line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C: drop the current line
    Interrupted,
    /// Ctrl-D or closed stdin
    Eof,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadOutcome>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadOutcome> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    // history is best effort
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

pub struct Repl<'a> {
    db: &'a mut dyn DatabaseBackend,
    format: OutputFormat,
    state: RunState,
}

impl<'a> Repl<'a> {
    pub fn new(db: &'a mut dyn DatabaseBackend, format: OutputFormat) -> Self {
        Self {
            db,
            format,
            state: RunState::Running,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Prompt and dispatch until `exit` or end of input.
    pub fn run(&mut self, reader: &mut dyn LineReader, out: &mut dyn Write) -> io::Result<()> {
        while self.state == RunState::Running {
            match reader.read_line(PROMPT)? {
                ReadOutcome::Line(line) => self.handle_line(&line, out)?,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => self.state = RunState::Stopped,
            }
        }
        Ok(())
    }

    /// Parse and execute one line, writing its output or error.
    ///
    /// Command failures are reported on `out` and leave the loop running;
    /// only a failed write is returned as an error.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> io::Result<()> {
        let command = match ReplCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(e) => return report(out, &e),
        };
        debug!(?command, "dispatching");

        if command == ReplCommand::Exit {
            self.state = RunState::Stopped;
            return Ok(());
        }

        match command.run(&mut *self.db, self.format) {
            Ok(rendered) => writeln!(out, "{rendered}"),
            Err(e) => report(out, e.as_ref()),
        }
    }
}

/// Run the words given on the command line as one command, without a prompt.
///
/// Output and errors go to `out` exactly as in the loop. Returns `false`
/// when the command was unknown or failed.
pub fn run_once(
    db: &mut dyn DatabaseBackend,
    words: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> io::Result<bool> {
    let command = match ReplCommand::from_words(words) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(e) => {
            report(out, &e)?;
            return Ok(false);
        }
    };

    match command {
        ReplCommand::Exit => Ok(true),
        ReplCommand::Unknown(word) => {
            writeln!(out, "{UNKNOWN_COMMAND}: {word}")?;
            Ok(false)
        }
        command => match command.run(db, format) {
            Ok(rendered) => {
                writeln!(out, "{rendered}")?;
                Ok(true)
            }
            Err(e) => {
                report(out, e.as_ref())?;
                Ok(false)
            }
        },
    }
}

// printed for the user; logged only at debug
fn report(out: &mut dyn Write, error: &dyn std::error::Error) -> io::Result<()> {
    debug!(%error, "command failed");
    writeln!(out, "Error: {error}")
}
