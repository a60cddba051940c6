//! Stable first-seen indices for object identifiers.

use std::collections::HashMap;

/// First-seen insertion-order index per object id
///
/// Grows monotonically and never forgets an id, so an object keeps its
/// index (and therefore its display color) across recognition cycles. The
/// table is plain owned state; hold it inside the assembler or pass your
/// own via [`MsgAssembler::with_index`](crate::MsgAssembler::with_index).
#[derive(Debug, Clone, Default)]
pub struct ObjectIndexTable {
    indices: HashMap<String, usize>,
}

impl ObjectIndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `object_id` if unseen and return its stable index.
    ///
    /// A fresh id gets the table size at insertion time; a known id keeps
    /// the index it was first given.
    pub fn register(&mut self, object_id: &str) -> usize {
        if let Some(&index) = self.indices.get(object_id) {
            return index;
        }
        let index = self.indices.len();
        self.indices.insert(object_id.to_string(), index);
        index
    }

    /// Index of an already-registered id
    pub fn index_of(&self, object_id: &str) -> Option<usize> {
        self.indices.get(object_id).copied()
    }

    /// Number of distinct objects seen so far
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
