//! Nœuds de la liste et handles non propriétaires

use crate::entry::Entry;
use std::fmt;

/// Handle vers un nœud de la playlist
///
/// Un `NodeId` ne possède rien : c'est un indice de slot dans l'arène de
/// la playlist, accompagné de la génération du slot au moment de
/// l'allocation. Quand le nœud est supprimé, la génération du slot est
/// incrémentée et tous les handles existants deviennent périmés.
///
/// Le handle porte aussi l'identifiant de la playlist qui l'a émis : il
/// n'est accepté par aucune autre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) owner: u64,
    pub(crate) slot: usize,
    pub(crate) generation: u64,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.slot, self.generation)
    }
}

/// Emplacement de l'arène
///
/// Les liens `next`/`prev` sont des indices de slots. Un slot est vivant
/// tant que `entry` est `Some`; un slot libéré se boucle sur lui-même.
#[derive(Debug)]
pub(crate) struct Slot {
    pub(crate) generation: u64,
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) entry: Option<Entry>,
}

impl Slot {
    pub(crate) fn is_live(&self) -> bool {
        self.entry.is_some()
    }
}
