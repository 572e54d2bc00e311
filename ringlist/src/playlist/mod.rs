//! Playlist : liste circulaire doublement chaînée sur une arène

mod iter;
mod node;

pub use iter::Iter;
pub use node::NodeId;

use self::node::Slot;
use crate::entry::Entry;
use crate::error::{Error, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Identifiant unique de chaque playlist, recopié dans ses handles
static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Playlist ordonnée et circulaire
///
/// La playlist est l'unique propriétaire de ses nœuds. Ils vivent dans
/// une arène (`Vec<Slot>`) et se référencent par indices, ce qui permet
/// le cycle `next`/`prev` sans cycle de propriété. Les slots libérés
/// sont recyclés via une liste libre.
///
/// Invariants, dès que `len >= 1` :
/// - pour tout nœud `n`, `n.next.prev == n` et `n.prev.next == n` ;
/// - suivre `next` (ou `prev`) `len` fois depuis un nœud ramène à ce nœud ;
/// - la queue est toujours `head.prev`.
///
/// Quand `len == 0`, `head` est `None`.
pub struct Playlist {
    owner: u64,
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }
}

impl Playlist {
    /// Crée une playlist vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Nombre de nœuds
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nœud de départ canonique du parcours
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|slot| self.id_of(slot))
    }

    /// Dernier nœud (`head.prev`)
    pub fn tail(&self) -> Option<NodeId> {
        self.head.map(|slot| self.id_of(self.slots[slot].prev))
    }

    /// Vérifie que le handle désigne un nœud vivant de cette playlist
    pub fn contains(&self, id: NodeId) -> bool {
        self.live_slot(id).is_some()
    }

    /// Ajoute un média en fin de playlist (juste avant la tête)
    pub fn add(
        &mut self,
        display_name: impl Into<String>,
        source_locator: impl Into<String>,
    ) -> NodeId {
        self.add_entry(Entry::new(display_name, source_locator))
    }

    /// Ajoute une entrée déjà construite en fin de playlist
    ///
    /// O(1) : la queue est atteinte par `head.prev`.
    pub fn add_entry(&mut self, entry: Entry) -> NodeId {
        let slot = self.allocate(entry);

        match self.head {
            None => {
                // Premier nœud : bouclé sur lui-même dans les deux sens
                self.slots[slot].next = slot;
                self.slots[slot].prev = slot;
                self.head = Some(slot);
            }
            Some(head) => {
                let tail = self.slots[head].prev;

                self.slots[tail].next = slot;
                self.slots[slot].prev = tail;

                self.slots[slot].next = head;
                self.slots[head].prev = slot;
            }
        }

        self.len += 1;
        self.id_of(slot)
    }

    /// Supprime un nœud et rend son entrée
    ///
    /// O(1). Si le nœud était la tête, la tête passe à son successeur.
    /// Le slot est libéré : tout handle vers ce nœud devient périmé.
    ///
    /// # Errors
    ///
    /// `Error::InvalidHandle` si `id` est périmé ou émis par une autre
    /// playlist ; la structure n'est alors pas modifiée.
    pub fn remove(&mut self, id: NodeId) -> Result<Entry> {
        let slot = self.live_slot(id).ok_or(Error::InvalidHandle(id))?;

        if self.len == 1 {
            self.head = None;
        } else {
            let prev = self.slots[slot].prev;
            let next = self.slots[slot].next;

            self.slots[prev].next = next;
            self.slots[next].prev = prev;

            if self.head == Some(slot) {
                self.head = Some(next);
            }
        }

        self.len -= 1;
        self.release(slot).ok_or(Error::InvalidHandle(id))
    }

    /// Recherche positionnelle (base 0) depuis la tête
    ///
    /// Le parcours fait au plus `index` pas et `index` doit être dans
    /// `[0, len)` : une playlist incohérente ne peut pas faire boucler
    /// indéfiniment cette méthode.
    pub fn get(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        let mut slot = self.head?;
        for _ in 0..index {
            slot = self.slots[slot].next;
        }
        Some(self.id_of(slot))
    }

    /// Position (base 0) d'un nœud, comptée depuis la tête
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        let target = self.live_slot(id)?;
        self.iter().position(|(node, _)| node.slot == target)
    }

    /// Successeur du nœud (la tête pour la queue)
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.live_slot(id)
            .map(|slot| self.id_of(self.slots[slot].next))
    }

    /// Prédécesseur du nœud (la queue pour la tête)
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.live_slot(id)
            .map(|slot| self.id_of(self.slots[slot].prev))
    }

    pub fn entry(&self, id: NodeId) -> Option<&Entry> {
        let slot = self.live_slot(id)?;
        self.slots[slot].entry.as_ref()
    }

    pub fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        let slot = self.live_slot(id)?;
        self.slots[slot].entry.as_mut()
    }

    /// Échange le contenu de deux nœuds sans toucher aux liens
    ///
    /// C'est le mécanisme de réordonnancement : la position logique des
    /// entrées change, la structure chaînée reste identique.
    pub fn swap_entries(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let slot_a = self.live_slot(a).ok_or(Error::InvalidHandle(a))?;
        let slot_b = self.live_slot(b).ok_or(Error::InvalidHandle(b))?;

        if slot_a != slot_b {
            let entry_a = self.slots[slot_a].entry.take();
            let entry_b = self.slots[slot_b].entry.take();
            self.slots[slot_a].entry = entry_b;
            self.slots[slot_b].entry = entry_a;
        }
        Ok(())
    }

    /// Parcours complet depuis la tête (exactement `len` éléments)
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self, self.head, self.len)
    }

    /// Parcours pivoté : `count` éléments au plus, à partir de `start`
    ///
    /// `count` est plafonné à `len`, chaque nœud apparaît donc au plus une
    /// fois. Un handle périmé donne un parcours vide.
    pub fn iter_from(&self, start: NodeId, count: usize) -> Iter<'_> {
        Iter::new(self, self.live_slot(start), count)
    }

    /// Vérifie l'intégrité de la structure chaînée
    ///
    /// Contrôle la cohérence mutuelle des liens, la circularité dans les
    /// deux sens et l'exactitude du compteur de taille.
    pub fn verify(&self) -> Result<()> {
        let live = self.slots.iter().filter(|slot| slot.is_live()).count();
        if live != self.len {
            return Err(Error::Corrupted(format!(
                "{} live nodes but size is {}",
                live, self.len
            )));
        }

        let Some(head) = self.head else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(Error::Corrupted(format!(
                    "no head but size is {}",
                    self.len
                )))
            };
        };

        let mut visited = vec![false; self.slots.len()];
        let mut slot = head;
        for step in 0..self.len {
            let current = self.slot(slot)?;
            if !current.is_live() {
                return Err(Error::Corrupted(format!("step {step}: slot {slot} is free")));
            }
            if visited[slot] {
                return Err(Error::Corrupted(format!(
                    "step {step}: slot {slot} reached twice"
                )));
            }
            visited[slot] = true;

            let next = current.next;
            if self.slot(next)?.prev != slot {
                return Err(Error::Corrupted(format!(
                    "slot {slot}: next.prev does not point back"
                )));
            }
            if self.slot(current.prev)?.next != slot {
                return Err(Error::Corrupted(format!(
                    "slot {slot}: prev.next does not point back"
                )));
            }
            slot = next;
        }
        if slot != head {
            return Err(Error::Corrupted(format!(
                "following next {} times does not return to head",
                self.len
            )));
        }

        for _ in 0..self.len {
            slot = self.slot(slot)?.prev;
        }
        if slot != head {
            return Err(Error::Corrupted(format!(
                "following prev {} times does not return to head",
                self.len
            )));
        }

        Ok(())
    }

    fn slot(&self, slot: usize) -> Result<&Slot> {
        self.slots
            .get(slot)
            .ok_or_else(|| Error::Corrupted(format!("link to unknown slot {slot}")))
    }

    fn id_of(&self, slot: usize) -> NodeId {
        NodeId {
            owner: self.owner,
            slot,
            generation: self.slots[slot].generation,
        }
    }

    fn live_slot(&self, id: NodeId) -> Option<usize> {
        if id.owner != self.owner {
            return None;
        }
        self.slots
            .get(id.slot)
            .filter(|slot| slot.generation == id.generation && slot.is_live())
            .map(|_| id.slot)
    }

    fn allocate(&mut self, entry: Entry) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot].entry = Some(entry);
                slot
            }
            None => {
                let slot = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    next: slot,
                    prev: slot,
                    entry: Some(entry),
                });
                slot
            }
        }
    }

    fn release(&mut self, slot: usize) -> Option<Entry> {
        let released = &mut self.slots[slot];
        released.generation += 1;
        released.next = slot;
        released.prev = slot;
        let entry = released.entry.take();
        self.free.push(slot);
        entry
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("len", &self.len)
            .field("head", &self.head())
            .field(
                "entries",
                &self
                    .iter()
                    .map(|(_, entry)| entry.display_name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Extend<Entry> for Playlist {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, entries: I) {
        for entry in entries {
            self.add_entry(entry);
        }
    }
}

impl FromIterator<Entry> for Playlist {
    fn from_iter<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut playlist = Playlist::new();
        playlist.extend(entries);
        playlist
    }
}
