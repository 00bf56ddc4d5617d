use zbus::{
    Connection, Proxy,
    fdo::{DBusProxy, PropertiesProxy},
};

use super::{MPRIS_PATH, MPRIS_PLAYER_INTERFACE, PlayerAddress};

/// Proxy for the bus daemon itself, used to enumerate registered names
///
/// # Errors
/// Returns error if the proxy cannot be created on the connection
pub async fn bus_daemon(connection: &Connection) -> zbus::Result<DBusProxy<'static>> {
    DBusProxy::new(connection).await
}

/// `org.freedesktop.DBus.Properties` proxy on a player's MPRIS object
///
/// Every `Get` through this proxy is a real round trip to the player.
///
/// # Errors
/// Returns error if the destination is not a valid bus name or proxy creation fails
pub async fn player_properties(
    connection: &Connection,
    player: &PlayerAddress,
) -> zbus::Result<PropertiesProxy<'static>> {
    PropertiesProxy::builder(connection)
        .destination(player.bus_name().to_string())?
        .path(MPRIS_PATH)?
        .build()
        .await
}

/// Generic proxy on `org.mpris.MediaPlayer2.Player` for method calls by name
///
/// # Errors
/// Returns error if the destination is not a valid bus name or proxy creation fails
pub async fn player_control(
    connection: &Connection,
    player: &PlayerAddress,
) -> zbus::Result<Proxy<'static>> {
    Proxy::new(
        connection,
        player.bus_name().to_string(),
        MPRIS_PATH,
        MPRIS_PLAYER_INTERFACE,
    )
    .await
}
