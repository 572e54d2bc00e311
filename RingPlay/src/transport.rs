//! Console playback transport.
//!
//! Stands in for the audio and video elements of a graphical host: it keeps
//! one source per player, shows only the player matching the last loaded
//! entry, and reports every transition through `tracing`.

use ringqueue::{MediaKind, MediaTransport, TransportError};
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
    Paused,
    Stopped,
}

#[derive(Debug, Default)]
struct Player {
    source: Option<String>,
    state: PlayerState,
}

#[derive(Debug, Default)]
pub struct ConsoleTransport {
    audio: Player,
    video: Player,
    visible: Option<MediaKind>,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn player(&self, kind: MediaKind) -> &Player {
        match kind {
            MediaKind::Audio => &self.audio,
            MediaKind::Video => &self.video,
        }
    }

    fn player_mut(&mut self, kind: MediaKind) -> &mut Player {
        match kind {
            MediaKind::Audio => &mut self.audio,
            MediaKind::Video => &mut self.video,
        }
    }

    /// Player currently shown to the user.
    pub fn visible(&self) -> Option<MediaKind> {
        self.visible
    }

    pub fn source(&self, kind: MediaKind) -> Option<&str> {
        self.player(kind).source.as_deref()
    }

    pub fn state(&self, kind: MediaKind) -> PlayerState {
        self.player(kind).state
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        match self.visible {
            Some(kind) => format!(
                "[{kind} player: {:?}] {}",
                self.state(kind),
                self.source(kind).unwrap_or("-")
            ),
            None => "[no media loaded]".to_string(),
        }
    }
}

impl MediaTransport for ConsoleTransport {
    fn load(&mut self, kind: MediaKind, locator: &str) -> Result<(), TransportError> {
        if locator.is_empty() {
            return Err(TransportError::load(locator, "empty source"));
        }

        let player = self.player_mut(kind);
        player.source = Some(locator.to_string());
        player.state = PlayerState::Idle;

        // Le lecteur masqué ne continue pas en arrière-plan
        let hidden = match kind {
            MediaKind::Audio => &mut self.video,
            MediaKind::Video => &mut self.audio,
        };
        if hidden.state == PlayerState::Playing {
            hidden.state = PlayerState::Paused;
        }
        self.visible = Some(kind);

        info!(%kind, source = locator, "Media loaded");
        Ok(())
    }

    fn play(&mut self, kind: MediaKind) -> Result<(), TransportError> {
        let player = self.player_mut(kind);
        if player.source.is_none() {
            return Err(TransportError::Unavailable(kind));
        }
        player.state = PlayerState::Playing;
        info!(%kind, "Playback started");
        Ok(())
    }

    fn pause(&mut self) -> Result<(), TransportError> {
        for player in [&mut self.audio, &mut self.video] {
            if player.state == PlayerState::Playing {
                player.state = PlayerState::Paused;
            }
        }
        info!("Playback paused");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), TransportError> {
        self.audio.state = PlayerState::Stopped;
        self.video.state = PlayerState::Stopped;
        info!("Playback stopped");
        Ok(())
    }
}
