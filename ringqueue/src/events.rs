use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender, unbounded};
use ringlist::MediaKind;

/// Notifications emitted by the queue controller after each action.
///
/// Renderers treat every event as a redraw request; the payloads let a
/// status line show what happened without querying the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueEvent {
    /// Entries were added, removed or reordered.
    QueueChanged,
    /// The current entry was handed to the transport.
    MediaLoaded { name: String, kind: MediaKind },
    PlaybackStarted { name: String, kind: MediaKind },
    PlaybackPaused,
    PlaybackStopped,
    TitleChanged(String),
}

#[derive(Clone, Default)]
pub struct QueueEventBus {
    subscribers: Arc<Mutex<Vec<Sender<QueueEvent>>>>,
}

impl QueueEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self) -> Receiver<QueueEvent> {
        let (tx, rx) = unbounded::<QueueEvent>();
        {
            let mut subscribers = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.push(tx);
        }
        rx
    }

    /// Sends `event` to every live subscriber and drops the disconnected ones.
    pub fn broadcast(&self, event: QueueEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
