//! Entry : élément média stocké dans un nœud de la playlist

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type de média, déterminé une seule fois à la construction de l'entrée.
///
/// Le transport de lecture s'en sert pour choisir le lecteur audio ou vidéo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Suffixes routés vers le lecteur vidéo par défaut.
    pub const DEFAULT_VIDEO_SUFFIXES: &'static [&'static str] = &[".mp4"];

    /// Classe un nom de fichier avec les suffixes vidéo par défaut.
    pub fn from_name(name: &str) -> Self {
        Self::classify(name, Self::DEFAULT_VIDEO_SUFFIXES)
    }

    /// Classe un nom de fichier d'après une liste de suffixes vidéo.
    ///
    /// La comparaison ignore la casse : `Clip.MP4` est une vidéo.
    /// Tout nom qui ne se termine par aucun des suffixes est de l'audio.
    pub fn classify<S: AsRef<str>>(name: &str, video_suffixes: &[S]) -> Self {
        let lower = name.to_lowercase();
        let is_video = video_suffixes
            .iter()
            .map(|suffix| suffix.as_ref().to_lowercase())
            .any(|suffix| !suffix.is_empty() && lower.ends_with(&suffix));

        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Audio
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Un élément média de la playlist
///
/// Possédé exclusivement par la `Playlist` ; l'extérieur n'y accède que
/// par emprunt via un `NodeId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Nom affiché (en général le nom du fichier)
    display_name: String,

    /// Localisateur opaque transmis au transport de lecture
    source_locator: String,

    kind: MediaKind,
}

impl Entry {
    /// Crée une entrée, classée avec les suffixes vidéo par défaut
    pub fn new(display_name: impl Into<String>, source_locator: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let kind = MediaKind::from_name(&display_name);
        Self::with_kind(display_name, source_locator, kind)
    }

    /// Crée une entrée dont le type a déjà été déterminé par l'appelant
    pub fn with_kind(
        display_name: impl Into<String>,
        source_locator: impl Into<String>,
        kind: MediaKind,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            source_locator: source_locator.into(),
            kind,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn source_locator(&self) -> &str {
        &self.source_locator
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
