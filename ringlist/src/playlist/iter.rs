//! Parcours borné de la liste circulaire

use super::{NodeId, Playlist};
use crate::entry::Entry;
use std::iter::FusedIterator;

/// Itérateur sur les nœuds, dans l'ordre des liens `next`
///
/// Le nombre de pas est fixé à la création et ne dépasse jamais la taille
/// de la playlist : l'itération se termine même si les liens circulaires
/// ramènent au nœud de départ.
pub struct Iter<'a> {
    playlist: &'a Playlist,
    slot: usize,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(playlist: &'a Playlist, start: Option<usize>, steps: usize) -> Self {
        match start {
            Some(slot) => Self {
                playlist,
                slot,
                remaining: steps.min(playlist.len()),
            },
            None => Self {
                playlist,
                slot: 0,
                remaining: 0,
            },
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.playlist.slots.get(self.slot)?;
        let entry = slot.entry.as_ref()?;
        let id = NodeId {
            owner: self.playlist.owner,
            slot: self.slot,
            generation: slot.generation,
        };

        self.slot = slot.next;
        self.remaining -= 1;
        Some((id, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Playlist {
    type Item = (NodeId, &'a Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
