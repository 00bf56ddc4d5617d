//! Interactive shell.

use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::{Command, ExitStatus},
};

use tracing::{debug, instrument};

use crate::config::ClientIdentity;

use super::CliError;

/// Message printed when the input stream ends.
pub const FAREWELL: &str = "Have a nice day!";

/// Runs one shell command in an isolated process.
pub trait CommandSpawner {
    /// Runs the CLI with `--<flag>` and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while creating or waiting for the process.
    fn run(&self, flag: &str) -> io::Result<ExitStatus>;
}

/// Spawns a fresh copy of this program for every command.
#[derive(Debug, Clone)]
pub struct ProcessSpawner {
    program: PathBuf,
    client: ClientIdentity,
}

impl ProcessSpawner {
    /// Spawner re-running `program` against `client`.
    pub fn new(program: impl Into<PathBuf>, client: ClientIdentity) -> Self {
        Self {
            program: program.into(),
            client,
        }
    }

    /// Spawner re-running the current executable.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Spawn` if the executable path cannot be determined.
    pub fn current(client: ClientIdentity) -> Result<Self, CliError> {
        let program = env::current_exe().map_err(CliError::Spawn)?;
        Ok(Self::new(program, client))
    }
}

impl CommandSpawner for ProcessSpawner {
    fn run(&self, flag: &str) -> io::Result<ExitStatus> {
        Command::new(&self.program)
            .arg("--client")
            .arg(self.client.as_str())
            .arg(format!("--{flag}"))
            .status()
    }
}

/// Interactive read loop running one child process per entered command.
///
/// Alternates between prompting for a line and waiting for the child that
/// runs it. The shell keeps no state between commands, so a crashing
/// command cannot affect the next one.
pub struct Shell<R, W, S> {
    input: R,
    output: W,
    spawner: S,
    prompt: String,
}

impl<R: BufRead, W: Write, S: CommandSpawner> Shell<R, W, S> {
    /// Creates a shell prompting with the client name.
    pub fn new(input: R, output: W, spawner: S, client: &ClientIdentity) -> Self {
        Self {
            input,
            output,
            spawner,
            prompt: format!("{client} > "),
        }
    }

    /// Runs until the input ends.
    ///
    /// Blank lines re-prompt without spawning. A leading `--` typed by the
    /// user is accepted and ignored.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Spawn` if a command process cannot be started and
    /// `CliError::IoError` if the terminal cannot be read or written.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            let Some(line) = self.prompt_line()? else {
                writeln!(self.output, "{FAREWELL}")?;
                self.output.flush()?;
                return Ok(());
            };

            let line = line.trim();
            let flag = line.strip_prefix("--").unwrap_or(line);
            if flag.is_empty() {
                continue;
            }

            let status = self.spawner.run(flag).map_err(CliError::Spawn)?;
            debug!(flag, %status, "Command process finished");
        }
    }

    fn prompt_line(&mut self) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the farewell off the prompt line.
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line))
    }
}
