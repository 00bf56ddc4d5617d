//! spotifycli - command line interface to MPRIS media players
//!
//! Runs the given flags once and prints their joined output, or opens the
//! interactive shell when no command flag is given.

use std::{
    env,
    io::{self, IsTerminal},
    process::ExitCode,
};

use spotifycli::{
    cli::{self, CliService, Invocation, ProcessSpawner, Shell, formatting::format_error},
    core::AppError,
    services::MediaService,
    tracing_config,
};
use tracing::debug;

fn main() -> ExitCode {
    let invocation = match cli::parse(env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    if let Err(e) = tracing_config::init_cli_mode() {
        report(&e.to_string());
    }

    let result = if invocation.launches_shell() {
        run_shell(&invocation)
    } else {
        run_commands(invocation)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Invocation failed: {e:?}");
            report(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Runs the interactive shell on the terminal.
///
/// # Errors
/// Returns error if a command process cannot be started or the terminal fails.
fn run_shell(invocation: &Invocation) -> Result<(), AppError> {
    let client = &invocation.config.client;
    let spawner = ProcessSpawner::current(client.clone())?;

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), spawner, client);
    shell.run()?;

    Ok(())
}

/// Runs the flags of one invocation and prints the joined line.
///
/// Bus calls are awaited one after another on a single-threaded runtime.
///
/// # Errors
/// Returns error if the runtime cannot start or a query fails.
fn run_commands(invocation: Invocation) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let media = MediaService::session(invocation.config.client);
    let service = CliService::with_default_lyrics(media);

    let output = runtime.block_on(service.execute(&invocation.flags))?;
    println!("{output}");

    Ok(())
}

fn report(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", format_error(message));
    } else {
        eprintln!("{message}");
    }
}
