//! Types d'erreurs pour ringlist

use crate::NodeId;

/// Erreurs de manipulation de la playlist
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Le handle ne désigne pas un nœud vivant de cette playlist
    /// (nœud déjà supprimé, ou handle émis par une autre playlist).
    #[error("Invalid node handle: {0}")]
    InvalidHandle(NodeId),

    #[error("Playlist links corrupted: {0}")]
    Corrupted(String),
}

/// Type Result spécialisé pour ringlist
pub type Result<T> = std::result::Result<T, Error>;
