//! Integration tests for the interactive shell loop.

#![cfg(unix)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{
    cell::RefCell,
    fs,
    io::{self, Cursor},
    os::unix::{fs::PermissionsExt, process::ExitStatusExt},
    path::Path,
    process::ExitStatus,
};

use spotifycli::{
    cli::{CliError, CommandSpawner, FAREWELL, ProcessSpawner, Shell},
    config::ClientIdentity,
};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingSpawner {
    flags: RefCell<Vec<String>>,
    broken: bool,
}

impl CommandSpawner for &RecordingSpawner {
    fn run(&self, flag: &str) -> io::Result<ExitStatus> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
        }

        self.flags.borrow_mut().push(flag.to_string());
        Ok(ExitStatus::from_raw(0))
    }
}

fn run_shell(input: &str, spawner: &RecordingSpawner) -> (Result<(), CliError>, String) {
    let client = ClientIdentity::default();
    let mut output = Vec::new();

    let result = Shell::new(Cursor::new(input.to_string()), &mut output, spawner, &client).run();

    (result, String::from_utf8(output).unwrap())
}

#[test]
fn immediate_eof_says_goodbye_without_spawning() {
    let spawner = RecordingSpawner::default();
    let (result, output) = run_shell("", &spawner);

    assert!(result.is_ok());
    assert_eq!(output, format!("spotify > \n{FAREWELL}\n"));
    assert!(spawner.flags.borrow().is_empty());
}

#[test]
fn each_line_runs_one_command() {
    let spawner = RecordingSpawner::default();
    let (result, output) = run_shell("status\nplaypause\n", &spawner);

    assert!(result.is_ok());
    assert_eq!(spawner.flags.borrow().as_slice(), ["status", "playpause"]);
    assert_eq!(output.matches("spotify > ").count(), 3);
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn blank_lines_and_dashes_are_tolerated() {
    let spawner = RecordingSpawner::default();
    let (result, _) = run_shell("\n   \n--song\n  artist  \n", &spawner);

    assert!(result.is_ok());
    assert_eq!(spawner.flags.borrow().as_slice(), ["song", "artist"]);
}

#[test]
fn only_one_leading_dash_pair_is_stripped() {
    let spawner = RecordingSpawner::default();
    let (result, _) = run_shell("----status\n", &spawner);

    assert!(result.is_ok());
    assert_eq!(spawner.flags.borrow().as_slice(), ["--status"]);
}

#[test]
fn last_line_without_newline_still_runs() {
    let spawner = RecordingSpawner::default();
    let (result, _) = run_shell("next", &spawner);

    assert!(result.is_ok());
    assert_eq!(spawner.flags.borrow().as_slice(), ["next"]);
}

#[test]
fn prompt_names_the_client() {
    let spawner = RecordingSpawner::default();
    let client = ClientIdentity::new("vlc").unwrap();
    let mut output = Vec::new();

    Shell::new(Cursor::new(String::new()), &mut output, &spawner, &client)
        .run()
        .unwrap();

    assert!(String::from_utf8(output).unwrap().starts_with("vlc > "));
}

#[test]
fn spawn_failure_ends_the_shell() {
    let spawner = RecordingSpawner {
        broken: true,
        ..RecordingSpawner::default()
    };
    let (result, output) = run_shell("status\nsong\n", &spawner);

    assert!(matches!(result, Err(CliError::Spawn(_))));
    assert!(!output.contains(FAREWELL));
}

/// Writes a script that records its arguments next to itself and exits with
/// `code`.
fn argv_recorder(dir: &Path, code: i32) -> std::path::PathBuf {
    let script = dir.join("record-argv");
    fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/argv\"\nexit {code}\n"),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

mod process_spawner {
    use super::*;

    #[test]
    fn forwards_client_and_flag_to_the_child() {
        let dir = TempDir::new().unwrap();
        let script = argv_recorder(dir.path(), 0);
        let spawner = ProcessSpawner::new(&script, ClientIdentity::new("vlc").unwrap());

        let status = spawner.run("status").unwrap();

        assert!(status.success());
        let argv = fs::read_to_string(dir.path().join("argv")).unwrap();
        assert_eq!(argv, "--client\nvlc\n--status\n");
    }

    #[test]
    fn returns_the_child_exit_status() {
        let dir = TempDir::new().unwrap();
        let script = argv_recorder(dir.path(), 3);
        let spawner = ProcessSpawner::new(&script, ClientIdentity::default());

        let status = spawner.run("next").unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn shell_waits_for_each_child_before_prompting() {
        let dir = TempDir::new().unwrap();
        let script = argv_recorder(dir.path(), 1);
        let client = ClientIdentity::default();
        let spawner = ProcessSpawner::new(&script, client.clone());
        let mut output = Vec::new();

        Shell::new(Cursor::new("song\n"), &mut output, spawner, &client)
            .run()
            .unwrap();

        // A failing child does not end the shell.
        let argv = fs::read_to_string(dir.path().join("argv")).unwrap();
        assert_eq!(argv, "--client\nspotify\n--song\n");
        assert!(String::from_utf8(output).unwrap().ends_with(&format!("{FAREWELL}\n")));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let spawner = ProcessSpawner::new(dir.path().join("absent"), ClientIdentity::default());
        let client = ClientIdentity::default();
        let mut output = Vec::new();

        let result = Shell::new(Cursor::new("status\n"), &mut output, spawner, &client).run();
        assert!(matches!(result, Err(CliError::Spawn(_))));
    }
}
