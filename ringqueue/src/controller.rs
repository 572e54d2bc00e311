//! Queue controller.
//!
//! `QueueController` is the explicit context object that pairs a
//! `Playlist` with the `current` pointer. It is the only writer of both:
//! UI actions, ingestion and end-of-media signals all go through it, and
//! each action runs to completion before the next one is handled.
//!
//! After every mutation the controller broadcasts a `QueueEvent` so that
//! renderers can redraw from `queue_view()` / `up_next()`.
//!
//! Invariant: `current` is either `None` (empty playlist) or a live node
//! of the playlist. Deletion captures the replacement for `current`
//! before the node is removed.

use ringlist::{Entry, MediaKind, NodeId, Playlist};
use tracing::{debug, info, warn};

use crate::errors::QueueError;
use crate::events::{QueueEvent, QueueEventBus};
use crate::transport::{MediaClassifier, MediaTransport};
use crate::view::{QueueRow, QueueView};

/// Title used when the playlist is given an empty name.
pub const DEFAULT_TITLE: &str = "My Playlist";

/// Construction-time settings of a controller.
#[derive(Clone, Debug)]
pub struct QueueSettings {
    pub title: String,
    pub video_suffixes: Vec<String>,
    /// Advance to the next entry when playback of the current one ends.
    pub auto_advance: bool,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            video_suffixes: MediaKind::DEFAULT_VIDEO_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            auto_advance: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Forward,
    Backward,
}

pub struct QueueController<T: MediaTransport> {
    playlist: Playlist,
    current: Option<NodeId>,
    title: String,
    transport: T,
    classifier: MediaClassifier,
    events: QueueEventBus,
    auto_advance: bool,
}

impl<T: MediaTransport> QueueController<T> {
    /// Creates a controller with an empty playlist and no current entry.
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, QueueSettings::default())
    }

    pub fn with_settings(transport: T, settings: QueueSettings) -> Self {
        Self {
            playlist: Playlist::new(),
            current: None,
            title: normalize_title(&settings.title),
            transport,
            classifier: MediaClassifier::new(settings.video_suffixes),
            events: QueueEventBus::new(),
            auto_advance: settings.auto_advance,
        }
    }

    // =====================================================================
    //  ACCESSORS
    // =====================================================================

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.current.and_then(|id| self.playlist.entry(id))
    }

    /// Position (0-based) of the current entry, counted from the head.
    pub fn current_index(&self) -> Option<usize> {
        self.current.and_then(|id| self.playlist.index_of(id))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Registers a new observer of queue events.
    pub fn subscribe(&self) -> crossbeam_channel::Receiver<QueueEvent> {
        self.events.subscribe()
    }

    // =====================================================================
    //  RENDER VIEWS
    // =====================================================================

    /// Every entry from the head, exactly `len` rows, current one flagged.
    pub fn queue_view(&self) -> QueueView {
        let mut current_index = None;
        let rows = self
            .playlist
            .iter()
            .enumerate()
            .map(|(position, (id, entry))| {
                let is_current = self.current == Some(id);
                if is_current {
                    current_index = Some(position);
                }
                QueueRow {
                    position,
                    display_name: entry.display_name().to_string(),
                    kind: entry.kind(),
                    is_current,
                }
            })
            .collect();

        QueueView {
            title: self.title.clone(),
            rows,
            current_index,
        }
    }

    /// Rotated view starting at the current entry.
    ///
    /// Returns at most `count` rows, never more than the playlist length,
    /// and nothing when the playlist is empty.
    pub fn up_next(&self, count: usize) -> Vec<QueueRow> {
        let (Some(current), Some(start)) = (self.current, self.current_index()) else {
            return Vec::new();
        };
        let len = self.playlist.len();

        self.playlist
            .iter_from(current, count)
            .enumerate()
            .map(|(offset, (_, entry))| QueueRow {
                position: (start + offset) % len,
                display_name: entry.display_name().to_string(),
                kind: entry.kind(),
                is_current: offset == 0,
            })
            .collect()
    }

    // =====================================================================
    //  QUEUE ACTIONS
    // =====================================================================

    /// Appends newly ingested media, in order.
    ///
    /// When nothing was current before the batch, the head becomes current
    /// and is loaded on the transport. Returns `Ok(false)` for an empty batch.
    pub fn on_media_added<I, N, L>(&mut self, items: I) -> Result<bool, QueueError>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        let was_empty = self.current.is_none();
        let mut added = 0usize;

        for (name, locator) in items {
            let name = name.into();
            let kind = self.classifier.classify(&name);
            let id = self
                .playlist
                .add_entry(Entry::with_kind(name.as_str(), locator, kind));
            debug!(node = %id, name = name.as_str(), %kind, "Entry appended");
            added += 1;
        }

        if added == 0 {
            return Ok(false);
        }

        info!(added, total = self.playlist.len(), "Media added to playlist");

        if was_empty {
            self.current = self.playlist.head();
        }
        self.events.broadcast(QueueEvent::QueueChanged);

        if was_empty {
            self.load_current()?;
        }
        Ok(true)
    }

    /// Makes the entry at `index` current, loads it and starts playback.
    pub fn select_by_index(&mut self, index: usize) -> Result<bool, QueueError> {
        let Some(node) = self.playlist.get(index) else {
            debug!(index, len = self.playlist.len(), "select: index out of range");
            return Ok(false);
        };

        self.current = Some(node);
        info!(index, node = %node, "Entry selected");
        self.load_current()?;
        self.start_playback()?;
        Ok(true)
    }

    /// Moves `current` to its successor, wrapping from the last entry to
    /// the first, then starts playback.
    pub fn advance(&mut self) -> Result<bool, QueueError> {
        self.step(Direction::Forward)
    }

    /// Moves `current` to its predecessor, wrapping from the first entry
    /// to the last, then starts playback.
    pub fn retreat(&mut self) -> Result<bool, QueueError> {
        self.step(Direction::Backward)
    }

    /// Handles the end of playback of the current entry.
    ///
    /// With auto-advance enabled this loops through the playlist forever.
    pub fn on_playback_ended(&mut self) -> Result<bool, QueueError> {
        if !self.auto_advance {
            debug!("Playback ended, auto-advance disabled");
            self.stop()?;
            return Ok(false);
        }
        self.advance()
    }

    /// Removes the entry at `index`.
    ///
    /// If it was current, its successor becomes current (or nothing when
    /// it was the last entry). The transport is stopped once the playlist
    /// is empty.
    pub fn delete_by_index(&mut self, index: usize) -> Result<bool, QueueError> {
        let Some(node) = self.playlist.get(index) else {
            debug!(index, len = self.playlist.len(), "delete: index out of range");
            return Ok(false);
        };

        if self.current == Some(node) {
            self.current = self.playlist.next(node).filter(|&next| next != node);
        }

        let entry = self.playlist.remove(node)?;
        info!(
            index,
            name = entry.display_name(),
            remaining = self.playlist.len(),
            "Entry deleted"
        );
        self.events.broadcast(QueueEvent::QueueChanged);

        if self.current.is_some() {
            self.load_current()?;
        } else {
            self.transport.stop()?;
            self.events.broadcast(QueueEvent::PlaybackStopped);
        }
        Ok(true)
    }

    /// Swaps the entry at `index` with its predecessor. No-op on the head.
    pub fn move_up(&mut self, index: usize) -> Result<bool, QueueError> {
        let Some(node) = self.playlist.get(index) else {
            return Ok(false);
        };
        if self.playlist.head() == Some(node) {
            debug!(index, "move_up: already at the head");
            return Ok(false);
        }

        let prev = self.playlist.prev(node).ok_or(ringlist::Error::InvalidHandle(node))?;
        self.playlist.swap_entries(node, prev)?;
        debug!(index, "Entry moved up");
        self.events.broadcast(QueueEvent::QueueChanged);
        Ok(true)
    }

    /// Swaps the entry at `index` with its successor. No-op on the tail.
    pub fn move_down(&mut self, index: usize) -> Result<bool, QueueError> {
        let Some(node) = self.playlist.get(index) else {
            return Ok(false);
        };
        let next = self.playlist.next(node).ok_or(ringlist::Error::InvalidHandle(node))?;
        if self.playlist.head() == Some(next) {
            debug!(index, "move_down: already at the tail");
            return Ok(false);
        }

        self.playlist.swap_entries(node, next)?;
        debug!(index, "Entry moved down");
        self.events.broadcast(QueueEvent::QueueChanged);
        Ok(true)
    }

    // =====================================================================
    //  TRANSPORT CONTROLS
    // =====================================================================

    /// Starts playback of the current entry. No-op on an empty playlist.
    pub fn play(&mut self) -> Result<bool, QueueError> {
        self.start_playback()
    }

    pub fn pause(&mut self) -> Result<(), QueueError> {
        self.transport.pause()?;
        self.events.broadcast(QueueEvent::PlaybackPaused);
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), QueueError> {
        self.transport.stop()?;
        self.events.broadcast(QueueEvent::PlaybackStopped);
        Ok(())
    }

    /// Renames the playlist; a blank name falls back to `DEFAULT_TITLE`.
    pub fn set_title(&mut self, title: &str) {
        self.title = normalize_title(title);
        info!(title = self.title.as_str(), "Playlist renamed");
        self.events
            .broadcast(QueueEvent::TitleChanged(self.title.clone()));
    }

    // =====================================================================
    //  INTERNALS
    // =====================================================================

    fn step(&mut self, direction: Direction) -> Result<bool, QueueError> {
        let Some(current) = self.current else {
            debug!(?direction, "step on empty playlist ignored");
            return Ok(false);
        };

        let target = match direction {
            Direction::Forward => self.playlist.next(current),
            Direction::Backward => self.playlist.prev(current),
        }
        .ok_or(ringlist::Error::InvalidHandle(current))?;

        self.current = Some(target);
        debug!(?direction, from = %current, to = %target, "Current entry moved");
        self.load_current()?;
        self.start_playback()?;
        Ok(true)
    }

    fn load_current(&mut self) -> Result<bool, QueueError> {
        let Some(id) = self.current else {
            return Ok(false);
        };
        let entry = self
            .playlist
            .entry(id)
            .ok_or(ringlist::Error::InvalidHandle(id))?;

        if let Err(err) = self.transport.load_entry(entry) {
            warn!(name = entry.display_name(), error = %err, "Failed to load media");
            return Err(err.into());
        }

        self.events.broadcast(QueueEvent::MediaLoaded {
            name: entry.display_name().to_string(),
            kind: entry.kind(),
        });
        Ok(true)
    }

    fn start_playback(&mut self) -> Result<bool, QueueError> {
        let Some(id) = self.current else {
            debug!("play on empty playlist ignored");
            return Ok(false);
        };
        let entry = self
            .playlist
            .entry(id)
            .ok_or(ringlist::Error::InvalidHandle(id))?;

        if let Err(err) = self.transport.play(entry.kind()) {
            warn!(name = entry.display_name(), error = %err, "Failed to start playback");
            return Err(err.into());
        }

        self.events.broadcast(QueueEvent::PlaybackStarted {
            name: entry.display_name().to_string(),
            kind: entry.kind(),
        });
        Ok(true)
    }
}

fn normalize_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}
