use tracing::{debug, instrument};

use crate::config::ClientIdentity;

use super::{MPRIS_PREFIX, MediaError, PlayerAddress, PlayerBus};

/// Pick the first bus name belonging to the player selected by `prefix`
///
/// Names are scanned in the order given; a name matches when it starts with
/// `org.mpris.MediaPlayer2.` followed by `prefix`, so `spotify` also matches
/// instance-suffixed names such as `org.mpris.MediaPlayer2.spotify.instance42`.
pub fn select_player<I, S>(names: I, prefix: &str) -> Option<PlayerAddress>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().find_map(|name| {
        let name = name.as_ref();
        name.strip_prefix(MPRIS_PREFIX)
            .is_some_and(|player| player.starts_with(prefix))
            .then(|| PlayerAddress::from_bus_name(name))
    })
}

/// Resolve the bus name of the player selected by `client`
///
/// Enumerates the names currently registered on the bus on every call;
/// nothing is cached between calls.
///
/// # Errors
/// Returns `MediaError::BusUnreachable` if the names cannot be listed, or
/// `MediaError::NoMatchingPlayer` if no registered name matches
#[instrument(skip(bus), fields(client = %client))]
pub async fn resolve(
    bus: &dyn PlayerBus,
    client: &ClientIdentity,
) -> Result<PlayerAddress, MediaError> {
    let names = bus.list_names().await?;
    debug!(count = names.len(), "Listed bus names");

    let player = select_player(&names, client.as_str()).ok_or_else(|| {
        MediaError::NoMatchingPlayer {
            prefix: client.to_string(),
        }
    })?;

    debug!(bus_name = %player, "Resolved MPRIS player");
    Ok(player)
}
