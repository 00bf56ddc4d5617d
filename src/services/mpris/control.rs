use tracing::{debug, instrument, warn};

use super::{MediaError, MediaService, PlayerCommand};

impl MediaService {
    /// Send a playback command to the configured player
    ///
    /// Best effort: the call is sent without waiting for a reply, and
    /// failures to resolve the player or send the call are only logged. A
    /// player that is already in the requested state is not an error either.
    #[instrument(skip(self), fields(client = %self.client()))]
    pub async fn dispatch(&self, command: PlayerCommand) {
        if let Err(e) = self.try_dispatch(command).await {
            warn!("Playback command {command} was not delivered: {e}");
        }
    }

    /// Send a playback command, reporting why it could not be sent
    ///
    /// # Errors
    /// Returns error if the player cannot be resolved or the call fails to send
    pub async fn try_dispatch(&self, command: PlayerCommand) -> Result<(), MediaError> {
        let player = self.resolve().await?;
        self.bus().call_method(&player, command).await?;

        debug!(bus_name = %player, "Sent {command}");
        Ok(())
    }
}
