use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};
use zbus::{
    Connection,
    names::InterfaceName,
    zvariant::{OwnedValue, Value},
};

use crate::config::ClientIdentity;

use super::{
    MPRIS_PLAYER_INTERFACE, MediaError, MediaMetadata, PlaybackState, PlayerAddress,
    PlayerCommand, PlayerProperty, discovery, proxy,
};

/// Transport operations the MPRIS layer needs from the session bus
///
/// Implemented over D-Bus by [`DbusPlayerBus`]; tests substitute an
/// in-memory bus.
#[async_trait]
pub trait PlayerBus: Send + Sync {
    /// List every name currently registered on the bus, in bus order
    ///
    /// # Errors
    /// Returns `MediaError::BusUnreachable` if the bus cannot be queried
    async fn list_names(&self) -> Result<Vec<String>, MediaError>;

    /// Read one property of `org.mpris.MediaPlayer2.Player`
    ///
    /// # Errors
    /// Returns `MediaError::PropertyUnavailable` if the read fails
    async fn get_property(
        &self,
        player: &PlayerAddress,
        property: PlayerProperty,
    ) -> Result<OwnedValue, MediaError>;

    /// Invoke a player method without waiting for its reply
    ///
    /// # Errors
    /// Returns `MediaError::ControlFailed` if the call cannot be sent
    async fn call_method(
        &self,
        player: &PlayerAddress,
        command: PlayerCommand,
    ) -> Result<(), MediaError>;
}

/// [`PlayerBus`] backed by the D-Bus session bus
///
/// The connection is opened on first use and shared by the remaining calls
/// of the same invocation.
#[derive(Default)]
pub struct DbusPlayerBus {
    connection: OnceCell<Connection>,
}

impl DbusPlayerBus {
    /// Create a bus handle; no connection is made until the first call
    pub fn new() -> Self {
        Self::default()
    }

    async fn connection(&self) -> Result<&Connection, MediaError> {
        self.connection
            .get_or_try_init(|| async {
                debug!("Connecting to D-Bus session bus");
                Connection::session()
                    .await
                    .map_err(MediaError::BusUnreachable)
            })
            .await
    }
}

#[async_trait]
impl PlayerBus for DbusPlayerBus {
    #[instrument(skip(self))]
    async fn list_names(&self) -> Result<Vec<String>, MediaError> {
        let connection = self.connection().await?;
        let daemon = proxy::bus_daemon(connection)
            .await
            .map_err(MediaError::BusUnreachable)?;

        let names = daemon
            .list_names()
            .await
            .map_err(|e| MediaError::BusUnreachable(e.into()))?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    #[instrument(skip(self, player), fields(bus_name = %player))]
    async fn get_property(
        &self,
        player: &PlayerAddress,
        property: PlayerProperty,
    ) -> Result<OwnedValue, MediaError> {
        let unavailable = |source: zbus::Error| MediaError::PropertyUnavailable {
            player: player.clone(),
            property,
            source,
        };

        let connection = self.connection().await?;
        let properties = proxy::player_properties(connection, player)
            .await
            .map_err(unavailable)?;

        let interface = InterfaceName::from_static_str_unchecked(MPRIS_PLAYER_INTERFACE);
        properties
            .get(interface, property.name())
            .await
            .map_err(|e| unavailable(e.into()))
    }

    #[instrument(skip(self, player), fields(bus_name = %player))]
    async fn call_method(
        &self,
        player: &PlayerAddress,
        command: PlayerCommand,
    ) -> Result<(), MediaError> {
        let failed = |source: zbus::Error| MediaError::ControlFailed {
            player: player.clone(),
            command,
            source,
        };

        let connection = self.connection().await?;
        let control = proxy::player_control(connection, player)
            .await
            .map_err(failed)?;

        control
            .call_noreply(command.method_name(), &())
            .await
            .map_err(failed)
    }
}

/// Read access to the player selected by a [`ClientIdentity`]
///
/// Nothing is cached: every read resolves the player again and performs its
/// own property round trip, so metadata and position come from separate,
/// non-atomic reads.
#[derive(Clone)]
pub struct MediaService {
    bus: Arc<dyn PlayerBus>,
    client: ClientIdentity,
}

impl MediaService {
    /// Bind a bus to the player selected by `client`
    pub fn new(bus: Arc<dyn PlayerBus>, client: ClientIdentity) -> Self {
        Self { bus, client }
    }

    /// Bind the D-Bus session bus to the player selected by `client`
    pub fn session(client: ClientIdentity) -> Self {
        Self::new(Arc::new(DbusPlayerBus::new()), client)
    }

    /// Client identity this service is bound to
    pub fn client(&self) -> &ClientIdentity {
        &self.client
    }

    pub(crate) fn bus(&self) -> &dyn PlayerBus {
        self.bus.as_ref()
    }

    /// Resolve the bus name of the configured player
    ///
    /// # Errors
    /// Returns `MediaError::BusUnreachable` or `MediaError::NoMatchingPlayer`
    pub async fn resolve(&self) -> Result<PlayerAddress, MediaError> {
        discovery::resolve(self.bus(), &self.client).await
    }

    /// Fetch a raw player property
    ///
    /// # Errors
    /// Returns error if the player cannot be resolved or the read fails
    pub async fn property(&self, property: PlayerProperty) -> Result<OwnedValue, MediaError> {
        let player = self.resolve().await?;
        self.bus.get_property(&player, property).await
    }

    /// Fetch and decode the current track metadata
    ///
    /// # Errors
    /// Returns error if the read fails or the property is not a dictionary
    pub async fn metadata(&self) -> Result<MediaMetadata, MediaError> {
        let value = self.property(PlayerProperty::Metadata).await?;
        MediaMetadata::try_from(value)
    }

    /// Fetch the playback position in microseconds
    ///
    /// # Errors
    /// Returns error if the read fails or the value is not an integer
    pub async fn position(&self) -> Result<i64, MediaError> {
        let value = self.property(PlayerProperty::Position).await?;

        match &*value {
            Value::I64(micros) => Ok(*micros),
            Value::U64(micros) => Ok(i64::try_from(*micros).unwrap_or(i64::MAX)),
            Value::I32(micros) => Ok(i64::from(*micros)),
            other => Err(MediaError::InvalidProperty {
                property: PlayerProperty::Position,
                reason: format!("expected an integer, got signature {}", other.value_signature()),
            }),
        }
    }

    /// Fetch the playback state
    ///
    /// # Errors
    /// Returns `MediaError::ProtocolViolation` for a status other than
    /// Playing, Paused or Stopped, or a read error
    pub async fn playback_state(&self) -> Result<PlaybackState, MediaError> {
        let value = self.property(PlayerProperty::PlaybackStatus).await?;

        match &*value {
            Value::Str(status) => PlaybackState::try_from(status.as_str()),
            other => Err(MediaError::InvalidProperty {
                property: PlayerProperty::PlaybackStatus,
                reason: format!("expected a string, got signature {}", other.value_signature()),
            }),
        }
    }
}
