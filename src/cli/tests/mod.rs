//! Unit tests for CLI module
//!
//! Tests formatting, the command table and argument parsing.
//! No bus access or process spawning.

#![allow(clippy::unwrap_used)]

use crate::cli::{
    CliError, CommandRegistry, Handler, Query,
    args::parse,
    formatting::{
        ELLIPSIS, convert_duration, format_album, format_art_url, format_artist,
        format_artist_short, format_playback_status, format_position, format_song,
        format_song_short, format_status, format_status_position, format_status_short, truncate,
    },
};
use crate::config::ClientIdentity;
use crate::services::mpris::{MediaError, MediaMetadata, PlaybackState, PlayerCommand};

fn metadata(artist: &str, title: &str, length_micros: u64) -> MediaMetadata {
    MediaMetadata {
        artist: artist.to_string(),
        title: title.to_string(),
        album: "Discovery".to_string(),
        art_url: "https://i.scdn.co/image/ab67616d".to_string(),
        length_micros,
    }
}

mod formatting {
    use super::*;

    #[test]
    fn convert_duration_splits_hours_minutes_seconds() {
        let parts = convert_duration(3_661_000_000);
        assert_eq!(
            parts,
            ("01".to_string(), "01".to_string(), "01".to_string())
        );

        let parts = convert_duration(0);
        assert_eq!(
            parts,
            ("00".to_string(), "00".to_string(), "00".to_string())
        );
    }

    #[test]
    fn convert_duration_drops_sub_second_remainder() {
        let (_, minutes, seconds) = convert_duration(59_999_999);
        assert_eq!(minutes, "00");
        assert_eq!(seconds, "59");
    }

    #[test]
    fn convert_duration_folds_days_into_hours() {
        let (hours, minutes, seconds) = convert_duration(26 * 3600 * 1_000_000 + 5_000_000);
        assert_eq!(hours, "26");
        assert_eq!(minutes, "00");
        assert_eq!(seconds, "05");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Daft Punk", 16), "Daft Punk");
        assert_eq!(truncate("exactly sixteen!", 16), "exactly sixteen!");
        assert_eq!(truncate("", 12), "");
    }

    #[test]
    fn truncate_cuts_and_marks_long_text() {
        assert_eq!(
            truncate("Red Hot Chili Peppers", 16),
            format!("Red Hot Chili Pe{ELLIPSIS}")
        );
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Sigur Rós – Hoppípolla", 12), "Sigur Rós – …");
        assert_eq!(truncate("坂本龍一", 4), "坂本龍一");
        assert_eq!(truncate("坂本龍一", 2), "坂本…");
    }

    #[test]
    fn status_joins_artist_and_title() {
        let track = metadata("Daft Punk", "One More Time", 320_000_000);
        assert_eq!(format_status(&track), "Daft Punk - One More Time");
    }

    #[test]
    fn status_short_truncates_artist_at_sixteen_and_title_at_twelve() {
        let track = metadata("Red Hot Chili Peppers", "Californication", 0);
        assert_eq!(
            format_status_short(&track),
            "Red Hot Chili Pe… - Californicat…"
        );

        let track = metadata("Daft Punk", "Around", 0);
        assert_eq!(format_status_short(&track), "Daft Punk - Around");
    }

    #[test]
    fn status_position_appends_bracketed_times() {
        let track = metadata("Daft Punk", "One More Time", 320_000_000);
        assert_eq!(
            format_status_position(&track, 10_000_000),
            "Daft Punk - One More Time (00:10/05:20)"
        );
    }

    #[test]
    fn hours_shown_only_when_length_reaches_an_hour() {
        assert_eq!(format_position(10_000_000, 3_600_000_000), "(00:00:10/01:00:00)");
        assert_eq!(format_position(3_599_000_000, 3_599_000_000), "(59:59/59:59)");

        // A stale, shorter length never promotes the position to hours.
        assert_eq!(format_position(3_720_000_000, 240_000_000), "(02:00/04:00)");
    }

    #[test]
    fn negative_position_counts_as_zero() {
        assert_eq!(format_position(-1, 60_000_000), "(00:00/01:00)");
    }

    #[test]
    fn bare_fields_pass_through() {
        let track = metadata("Daft Punk", "One More Time", 0);
        assert_eq!(format_song(&track), "One More Time");
        assert_eq!(format_artist(&track), "Daft Punk");
        assert_eq!(format_album(&track), "Discovery");
        assert_eq!(format_art_url(&track), "https://i.scdn.co/image/ab67616d");
    }

    #[test]
    fn short_song_and_artist_use_their_own_limits() {
        let track = metadata("Godspeed You! Black Emperor", "Storm Sleep Is The Cousin", 0);
        assert_eq!(format_song_short(&track), "Storm Sleep …");
        assert_eq!(format_artist_short(&track), "Godspeed You! B…");
    }

    #[test]
    fn playback_glyphs_are_distinct() {
        let playing = format_playback_status(PlaybackState::Playing);
        let paused = format_playback_status(PlaybackState::Paused);
        let stopped = format_playback_status(PlaybackState::Stopped);

        assert_eq!(playing, "\u{f040a}");
        assert_eq!(paused, "\u{f03e4}");
        assert_eq!(stopped, "\u{f04db}");
    }
}

mod registry {
    use super::*;

    #[test]
    fn table_binds_queries_and_actions() {
        let registry = CommandRegistry::new();

        assert_eq!(
            registry.lookup("statusposition").unwrap().handler,
            Handler::Query(Query::StatusPosition)
        );
        assert_eq!(
            registry.lookup("prev").unwrap().handler,
            Handler::Action(PlayerCommand::Previous)
        );
        assert!(registry.lookup("client").is_none());
        assert!(registry.lookup("--status").is_none());
    }

    #[test]
    fn table_covers_every_flag_once() {
        let registry = CommandRegistry::new();
        let flags: Vec<&str> = registry.commands().iter().map(|spec| spec.flag).collect();

        assert_eq!(
            flags,
            [
                "version",
                "status",
                "statusposition",
                "statusshort",
                "song",
                "songshort",
                "artist",
                "artistshort",
                "album",
                "position",
                "arturl",
                "playbackstatus",
                "play",
                "pause",
                "playpause",
                "lyrics",
                "next",
                "prev",
            ]
        );
    }

    #[test]
    fn ordered_flags_keep_argv_order_and_repeats() {
        let registry = CommandRegistry::new();
        let flags = registry.ordered_flags(&["--song", "--client", "vlc", "--artist", "--song"]);
        let names: Vec<&str> = flags.iter().map(|spec| spec.flag).collect();

        assert_eq!(names, ["song", "artist", "song"]);
    }
}

mod args {
    use super::*;

    #[test]
    fn no_flags_launches_shell() {
        let invocation = parse(["spotifycli"]).unwrap();
        assert!(invocation.launches_shell());
        assert_eq!(invocation.config.client.as_str(), "spotify");
    }

    #[test]
    fn client_alone_still_launches_shell() {
        let invocation = parse(["spotifycli", "--client", "vlc"]).unwrap();
        assert!(invocation.launches_shell());
        assert_eq!(invocation.config.client.as_str(), "vlc");
    }

    #[test]
    fn flags_are_collected_in_order() {
        let invocation =
            parse(["spotifycli", "--playpause", "--status", "--client", "vlc", "--status"])
                .unwrap();

        let names: Vec<&str> = invocation.flags.iter().map(|spec| spec.flag).collect();
        assert_eq!(names, ["playpause", "status", "status"]);
        assert_eq!(invocation.config.client.as_str(), "vlc");
    }

    #[test]
    fn version_flag_comes_from_the_table() {
        let invocation = parse(["spotifycli", "--version"]).unwrap();
        assert_eq!(invocation.flags[0].handler, Handler::Query(Query::Version));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(["spotifycli", "--shuffle"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn empty_client_is_rejected() {
        assert!(parse(["spotifycli", "--client", "", "--status"]).is_err());
    }

    #[test]
    fn option_like_client_is_rejected() {
        let err = parse(["spotifycli", "--client=--song"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_player_gets_the_no_client_message() {
        let client = ClientIdentity::new("spotify").unwrap();
        let err = CliError::from_media(
            &client,
            MediaError::NoMatchingPlayer {
                prefix: "spotify".to_string(),
            },
        );

        assert!(matches!(err, CliError::NoPlayer { .. }));
        assert_eq!(err.to_string(), "No mpris clients found for client spotify");
    }

    #[test]
    fn unknown_status_stays_a_protocol_violation() {
        let client = ClientIdentity::default();
        let err = CliError::from_media(&client, MediaError::ProtocolViolation("Buffering".into()));

        assert!(matches!(
            err,
            CliError::ProtocolViolation { ref status, .. } if status == "Buffering"
        ));
    }

    #[test]
    fn other_failures_mean_the_player_is_off() {
        let client = ClientIdentity::new("vlc").unwrap();
        let err = CliError::from_media(
            &client,
            MediaError::InvalidProperty {
                property: crate::services::mpris::PlayerProperty::Position,
                reason: "expected an integer".to_string(),
            },
        );

        assert!(matches!(err, CliError::PlayerUnavailable { .. }));
        assert_eq!(err.to_string(), "vlc is off");
    }
}
