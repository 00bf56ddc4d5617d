//! Command-line parsing.
//!
//! The clap command is generated from the command table; the flag order of
//! an invocation is read back from argv afterwards.

use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, builder::NonEmptyStringValueParser, error::ErrorKind};

use crate::config::{ClientIdentity, Config, DEFAULT_CLIENT};

use super::{CommandRegistry, types::CommandSpec};

const CLIENT_ARG: &str = "client";

/// A parsed command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Configuration selected by the options.
    pub config: Config,

    /// Recognised flags in the order they were given, repeats included.
    pub flags: Vec<&'static CommandSpec>,
}

impl Invocation {
    /// An invocation without any command flag opens the interactive shell.
    pub fn launches_shell(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Builds the clap command from the command table.
///
/// Every table entry becomes a boolean `--flag` that may be repeated.
/// clap's own `--version` is disabled because the table provides one.
pub fn command(registry: &CommandRegistry) -> Command {
    let base = Command::new("spotifycli")
        .about("a command line interface to Spotify on Linux")
        .disable_version_flag(true)
        .arg(
            Arg::new(CLIENT_ARG)
                .long(CLIENT_ARG)
                .value_name("NAME")
                .help("sets client's dbus name")
                .default_value(DEFAULT_CLIENT)
                .value_parser(NonEmptyStringValueParser::new()),
        );

    registry.commands().iter().fold(base, |command, spec| {
        command.arg(
            Arg::new(spec.flag)
                .long(spec.flag)
                .help(spec.help)
                .action(ArgAction::Count),
        )
    })
}

/// Parses a full argument vector, program name included.
///
/// # Errors
///
/// Returns the clap error for unknown flags, missing or empty `--client`
/// values, and for `--help`; callers usually hand it to `clap::Error::exit`.
pub fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let registry = CommandRegistry::new();
    let mut command = command(&registry);

    let matches = command.try_get_matches_from_mut(&args)?;

    let client = matches
        .get_one::<String>(CLIENT_ARG)
        .map_or(DEFAULT_CLIENT, String::as_str);
    let client = ClientIdentity::new(client)
        .map_err(|e| command.error(ErrorKind::InvalidValue, e.to_string()))?;

    let raw: Vec<String> = args
        .iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    Ok(Invocation {
        config: Config::new(client),
        flags: registry.ordered_flags(&raw),
    })
}
