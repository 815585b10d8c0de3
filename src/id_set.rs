//! Bounded, ordered, duplicate-free set of NAIF body identifiers.
//!
//! Elements are kept in ascending order so `element_at` is a stable,
//! deterministic traversal for a given content.

use std::fmt;

use itertools::Itertools;

use crate::constants::{NaifId, MAX_OBJECT_IDS};
use crate::spk_errors::{CapacityKind, SpkError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSet {
    ids: Vec<NaifId>,
    capacity: usize,
}

impl Default for IdSet {
    fn default() -> Self {
        Self::with_capacity(MAX_OBJECT_IDS)
    }
}

impl IdSet {
    pub fn with_capacity(capacity: usize) -> Self {
        IdSet {
            ids: Vec::new(),
            capacity,
        }
    }

    /// Insert `id`, keeping the set sorted.
    ///
    /// Return
    /// ----------
    /// * `Ok(true)` if `id` was added, `Ok(false)` if it was already present.
    /// * [`SpkError::CapacityExceeded`] if a new element does not fit; the set
    ///   is left unchanged.
    pub fn insert(&mut self, id: NaifId) -> Result<bool, SpkError> {
        match self.ids.binary_search(&id) {
            Ok(_) => Ok(false),
            Err(pos) => {
                if self.ids.len() >= self.capacity {
                    return Err(SpkError::CapacityExceeded {
                        kind: CapacityKind::ObjectIds,
                        required: self.ids.len() + 1,
                        capacity: self.capacity,
                    });
                }
                self.ids.insert(pos, id);
                Ok(true)
            }
        }
    }

    /// Number of elements.
    pub fn cardinality(&self) -> usize {
        self.ids.len()
    }

    /// Element of rank `index` (0-based, ascending order).
    pub fn element_at(&self, index: usize) -> Option<NaifId> {
        self.ids.get(index).copied()
    }

    pub fn contains(&self, id: NaifId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = NaifId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[NaifId] {
        &self.ids
    }
}

impl fmt::Display for IdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.ids.iter().join(", "))
    }
}
