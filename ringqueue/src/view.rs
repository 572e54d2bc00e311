use ringlist::MediaKind;
use serde::Serialize;

/// One rendered row of the queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueueRow {
    /// Position (0-based) counted from the playlist head.
    ///
    /// This is the index UI actions send back to the controller.
    pub position: usize,
    pub display_name: String,
    pub kind: MediaKind,
    pub is_current: bool,
}

/// Snapshot of the whole queue, in traversal order from the head.
///
/// This is what the render collaborator draws after every change. It is
/// detached from the playlist, so holding it does not borrow the
/// controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueueView {
    pub title: String,
    pub rows: Vec<QueueRow>,
    /// Index (0-based) of the current entry in `rows`, or `None` when the
    /// playlist is empty.
    pub current_index: Option<usize>,
}

impl QueueView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn current(&self) -> Option<&QueueRow> {
        self.current_index.and_then(|i| self.rows.get(i))
    }
}
