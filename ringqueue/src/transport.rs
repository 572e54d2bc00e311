//! Playback transport seam.
//!
//! The controller never decodes or plays media itself. It hands the
//! current entry to a `MediaTransport`, which owns one audio player and
//! one video player and routes each request to the player matching the
//! entry's `MediaKind`.

use ringlist::{Entry, MediaKind};

use crate::errors::TransportError;

/// Generic abstraction over the audio/video players of the host.
pub trait MediaTransport {
    /// Loads `locator` into the player for `kind`, hiding the other player.
    ///
    /// Loading does not start playback.
    fn load(&mut self, kind: MediaKind, locator: &str) -> Result<(), TransportError>;

    /// Starts or resumes the player for `kind`.
    fn play(&mut self, kind: MediaKind) -> Result<(), TransportError>;

    /// Pauses both players.
    fn pause(&mut self) -> Result<(), TransportError>;

    /// Pauses both players and rewinds them to the start.
    fn stop(&mut self) -> Result<(), TransportError>;

    fn load_entry(&mut self, entry: &Entry) -> Result<(), TransportError> {
        self.load(entry.kind(), entry.source_locator())
    }
}

impl<T: MediaTransport + ?Sized> MediaTransport for Box<T> {
    fn load(&mut self, kind: MediaKind, locator: &str) -> Result<(), TransportError> {
        (**self).load(kind, locator)
    }

    fn play(&mut self, kind: MediaKind) -> Result<(), TransportError> {
        (**self).play(kind)
    }

    fn pause(&mut self) -> Result<(), TransportError> {
        (**self).pause()
    }

    fn stop(&mut self) -> Result<(), TransportError> {
        (**self).stop()
    }
}

/// Maps file names to a `MediaKind` using a list of video suffixes.
///
/// Classification happens once, when media is ingested; the result is
/// stored on the `Entry` and travels with it when entries are swapped.
#[derive(Clone, Debug)]
pub struct MediaClassifier {
    video_suffixes: Vec<String>,
}

impl Default for MediaClassifier {
    fn default() -> Self {
        Self::new(MediaKind::DEFAULT_VIDEO_SUFFIXES.iter().copied())
    }
}

impl MediaClassifier {
    pub fn new<I, S>(video_suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            video_suffixes: video_suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classify(&self, display_name: &str) -> MediaKind {
        MediaKind::classify(display_name, self.video_suffixes.as_slice())
    }

    pub fn video_suffixes(&self) -> &[String] {
        &self.video_suffixes
    }
}
