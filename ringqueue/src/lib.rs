//! # ringqueue - Contrôleur de file de lecture
//!
//! Associe une [`Playlist`] circulaire à un pointeur `current` et expose les
//! actions de l'utilisateur (sélection, suivant/précédent, suppression,
//! déplacement), l'enchaînement automatique en fin de média et les vues
//! utilisées par le rendu.
//!
//! La lecture elle-même est déléguée à un [`MediaTransport`]; chaque
//! mutation est annoncée sur un [`QueueEventBus`].

mod controller;
mod events;

pub mod errors;
pub mod transport;
pub mod view;

pub use controller::{DEFAULT_TITLE, QueueController, QueueSettings};
pub use errors::{QueueError, TransportError};
pub use events::{QueueEvent, QueueEventBus};
pub use transport::{MediaClassifier, MediaTransport};
pub use view::{QueueRow, QueueView};

pub use ringlist::{Entry, MediaKind, NodeId, Playlist};
