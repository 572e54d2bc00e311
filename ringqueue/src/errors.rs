use ringlist::MediaKind;
use thiserror::Error;

/// Failures reported by a playback transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("No {0} player available")]
    Unavailable(MediaKind),
    #[error("Cannot load '{0}': {1}")]
    Load(String, String),
}

impl TransportError {
    pub fn load(locator: &str, reason: &str) -> Self {
        TransportError::Load(locator.to_string(), reason.to_string())
    }
}

/// Errors surfaced by the queue controller.
///
/// Out-of-range indices, empty playlists and boundary moves are not errors:
/// they come back as `Ok(false)` from the controller actions.
#[derive(Error, Debug)]
pub enum QueueError {
    // Only reachable if the current pointer and the playlist disagree
    #[error("Playlist Error: {0}")]
    Playlist(#[from] ringlist::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
