//! # ringlist - Playlist circulaire doublement chaînée
//!
//! Cette crate fournit le noyau de stockage d'une playlist média :
//! - Liste circulaire doublement chaînée (CDLL) allouée dans une arène
//! - Handles `NodeId` non propriétaires, avec détection des handles périmés
//! - Ajout en fin et suppression d'un nœud en O(1)
//! - Recherche positionnelle en O(index), toujours bornée par la taille
//! - Parcours depuis la tête ou depuis n'importe quel nœud (vue pivotée)
//!
//! # Architecture
//!
//! - **Playlist** : propriétaire unique de tous les nœuds (arène + liste libre)
//! - **NodeId** : référence copiable vers un nœud (slot + génération)
//! - **Entry** : contenu d'un nœud (nom affiché, source, type de média)
//! - **MediaKind** : classification audio / vidéo calculée à l'ingestion
//!
//! # Exemple d'utilisation
//!
//! ```
//! use ringlist::{MediaKind, Playlist};
//!
//! let mut playlist = Playlist::new();
//! playlist.add("a.mp3", "blob:a");
//! let b = playlist.add("b.mp4", "blob:b");
//! playlist.add("c.mp3", "blob:c");
//!
//! assert_eq!(playlist.get(1), Some(b));
//! assert_eq!(playlist.entry(b).map(|e| e.kind()), Some(MediaKind::Video));
//!
//! playlist.remove(b)?;
//! let names: Vec<_> = playlist.iter().map(|(_, e)| e.display_name()).collect();
//! assert_eq!(names, ["a.mp3", "c.mp3"]);
//! # Ok::<(), ringlist::Error>(())
//! ```

mod entry;
mod error;
mod playlist;

// Réexports publics
pub use entry::{Entry, MediaKind};
pub use error::{Error, Result};
pub use playlist::{Iter, NodeId, Playlist};
