//! Generational slot storage.
//!
//! Entries live in a flat `Vec` and are addressed by [`SlotId`]s that pair the
//! slot index with the generation it was filled in. Removing an entry bumps
//! the generation and pushes the index onto a free list, so ids handed out
//! before the removal stop resolving even after the slot is reused.

use smallvec::SmallVec;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    index: u32,
    generation: u32,
}

impl SlotId {
    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32 },
}

impl<T> Slot<T> {
    fn generation(&self) -> u32 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation } => *generation,
        }
    }
}

pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free: SmallVec<[u32; 8]>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: SmallVec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: SmallVec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` in a free slot, reusing vacated ones first. O(1).
    pub fn insert(&mut self, value: T) -> SlotId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = slot.generation();
            *slot = Slot::Occupied { generation, value };
            return SlotId { index, generation };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        debug_assert!(index < u32::MAX, "slot arena index space exhausted");
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        SlotId {
            index,
            generation: 0,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.index())? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.vacate(id.index)
    }

    /// Visit every occupied slot exactly once, in index order, dropping the
    /// entries for which `keep` returns `false`. Returns how many were dropped.
    ///
    /// Removal only rewrites the visited slot, so neighbours are neither
    /// skipped nor visited twice.
    pub fn sweep(&mut self, mut keep: impl FnMut(SlotId, &mut T) -> bool) -> usize {
        let mut removed = 0;
        for index in 0..self.slots.len() {
            let retain = match &mut self.slots[index] {
                Slot::Occupied { generation, value } => {
                    let id = SlotId {
                        index: index as u32,
                        generation: *generation,
                    };
                    keep(id, value)
                }
                Slot::Vacant { .. } => continue,
            };
            if !retain && self.vacate(index as u32).is_some() {
                removed += 1;
            }
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied { generation, value } => Some((
                    SlotId {
                        index: index as u32,
                        generation: *generation,
                    },
                    value,
                )),
                Slot::Vacant { .. } => None,
            })
    }

    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            self.vacate(index as u32);
        }
    }

    fn vacate(&mut self, index: u32) -> Option<T> {
        let slot = &mut self.slots[index as usize];
        let next_generation = slot.generation().wrapping_add(1);
        match std::mem::replace(
            slot,
            Slot::Vacant {
                generation: next_generation,
            },
        ) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                self.free.push(index);
                Some(value)
            }
            vacant @ Slot::Vacant { .. } => {
                *slot = vacant;
                None
            }
        }
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SlotArena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotArena")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .field("free", &self.free.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/slot_arena_tests.rs"]
mod tests;
