use std::hash::Hash;

use hashlink::LinkedHashSet;

pub trait Replacer<ID: Eq + Hash + Copy> {
    fn evict(&mut self) -> Option<ID>;
    fn record_access(&mut self, entry_id: ID) -> bool;
    fn remove(&mut self, entry_id: ID) -> bool;
    fn contains(&self, entry_id: ID) -> bool;
    fn size(&self) -> usize;
}

/// Fixed-capacity LRU ordering. The front of `node_store` is the least
/// recently used entry, the back the most recently used.
///
/// The replacer never evicts on its own: callers check `is_full` and decide
/// what to do with the victim before making room.
#[derive(Debug)]
pub struct LRUReplacer<ID: Eq + Hash + Copy> {
    node_store: LinkedHashSet<ID>,
    replacer_size: usize,
}

impl<ID: Eq + Hash + Copy> LRUReplacer<ID> {
    pub fn new(number_of_entries: usize) -> Self {
        LRUReplacer {
            node_store: LinkedHashSet::with_capacity(number_of_entries),
            replacer_size: number_of_entries,
        }
    }

    pub fn capacity(&self) -> usize {
        self.replacer_size
    }

    pub fn is_full(&self) -> bool {
        self.node_store.len() >= self.replacer_size
    }

    // LRU to MRU
    pub fn entries(&self) -> Vec<ID> {
        self.node_store.iter().copied().collect()
    }
}

impl<ID: Eq + Hash + Copy> Replacer<ID> for LRUReplacer<ID> {
    // Moves `entry_id` to the MRU end. Returns false when the entry is new
    // and there is no room for it.
    fn record_access(&mut self, entry_id: ID) -> bool {
        if self.node_store.remove(&entry_id) {
            self.node_store.insert(entry_id);
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.node_store.insert(entry_id);
        true
    }

    fn evict(&mut self) -> Option<ID> {
        self.node_store.pop_front()
    }

    fn remove(&mut self, entry_id: ID) -> bool {
        self.node_store.remove(&entry_id)
    }

    fn contains(&self, entry_id: ID) -> bool {
        self.node_store.contains(&entry_id)
    }

    fn size(&self) -> usize {
        self.node_store.len()
    }
}
