use crate::services::mpris::PlayerCommand;

use super::types::{CommandSpec, Handler, Query};

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        flag: "version",
        help: "shows version number",
        handler: Handler::Query(Query::Version),
    },
    CommandSpec {
        flag: "status",
        help: "shows song name and artist",
        handler: Handler::Query(Query::Status),
    },
    CommandSpec {
        flag: "statusposition",
        help: "shows song name and artist, with current playback position",
        handler: Handler::Query(Query::StatusPosition),
    },
    CommandSpec {
        flag: "statusshort",
        help: "shows status in a short way",
        handler: Handler::Query(Query::StatusShort),
    },
    CommandSpec {
        flag: "song",
        help: "shows the song name",
        handler: Handler::Query(Query::Song),
    },
    CommandSpec {
        flag: "songshort",
        help: "shows the song name in a short way",
        handler: Handler::Query(Query::SongShort),
    },
    CommandSpec {
        flag: "artist",
        help: "shows artist name",
        handler: Handler::Query(Query::Artist),
    },
    CommandSpec {
        flag: "artistshort",
        help: "shows artist name in a short way",
        handler: Handler::Query(Query::ArtistShort),
    },
    CommandSpec {
        flag: "album",
        help: "shows album name",
        handler: Handler::Query(Query::Album),
    },
    CommandSpec {
        flag: "position",
        help: "shows song position",
        handler: Handler::Query(Query::Position),
    },
    CommandSpec {
        flag: "arturl",
        help: "shows album image url",
        handler: Handler::Query(Query::ArtUrl),
    },
    CommandSpec {
        flag: "playbackstatus",
        help: "shows playback status",
        handler: Handler::Query(Query::PlaybackStatus),
    },
    CommandSpec {
        flag: "play",
        help: "plays the song",
        handler: Handler::Action(PlayerCommand::Play),
    },
    CommandSpec {
        flag: "pause",
        help: "pauses the song",
        handler: Handler::Action(PlayerCommand::Pause),
    },
    CommandSpec {
        flag: "playpause",
        help: "plays or pauses the song (toggles a state)",
        handler: Handler::Action(PlayerCommand::PlayPause),
    },
    CommandSpec {
        flag: "lyrics",
        help: "shows the lyrics for the song",
        handler: Handler::Query(Query::Lyrics),
    },
    CommandSpec {
        flag: "next",
        help: "plays the next song",
        handler: Handler::Action(PlayerCommand::Next),
    },
    CommandSpec {
        flag: "prev",
        help: "plays the previous song",
        handler: Handler::Action(PlayerCommand::Previous),
    },
];

/// Registry of every flag the CLI understands.
///
/// Backed by a static table built at compile time, so lookups never depend
/// on runtime name resolution. Table order is also the order flags appear in
/// the generated help.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRegistry;

impl CommandRegistry {
    /// Creates a handle to the command table.
    pub fn new() -> Self {
        Self
    }

    /// All commands in help order.
    pub fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    /// Finds the command bound to `flag` (without the leading `--`).
    pub fn lookup(&self, flag: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|spec| spec.flag == flag)
    }

    /// Collects the recognised flags in `args`, in the order they appear.
    ///
    /// Repeated flags are kept; anything that is not a `--flag` from the
    /// table (including option values) is skipped.
    pub fn ordered_flags<S: AsRef<str>>(&self, args: &[S]) -> Vec<&'static CommandSpec> {
        args.iter()
            .filter_map(|arg| arg.as_ref().strip_prefix("--"))
            .filter_map(|flag| self.lookup(flag))
            .collect()
    }
}
