use std::collections::HashSet;

use crate::{
    storage::disk::disk_model::Sector,
    utils::replacer::{LRUReplacer, Replacer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessType {
    Read,
    Write,
}

impl AccessType {
    pub fn is_write(self) -> bool {
        matches!(self, AccessType::Write)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Hot,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    // Already in the hot segment
    Hit,
    // Found in the cold segment and moved to the hot one
    Promotion,
    // Not resident, loaded into the cold segment
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    pub sector: Sector,
    pub segment: Segment,
    // The sector was dirty and had to be flushed before its slot was reused
    pub written_back: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheAccess {
    pub classification: Classification,
    pub eviction: Option<Eviction>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub promotions: u64,
    pub misses: u64,
    pub evictions: u64,
    pub write_backs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheState {
    pub hot: Vec<Sector>,
    pub cold: Vec<Sector>,
}

/// Two-segment LRU buffer cache.
///
/// New sectors land in the cold segment; a second touch while still cold
/// promotes them into the hot segment. Each segment evicts its own LRU
/// entry when full, and evicting a dirty sector writes it back.
#[derive(Debug)]
pub struct BufferCache {
    hot: LRUReplacer<Sector>,
    cold: LRUReplacer<Sector>,
    modified: HashSet<Sector>,
    stats: CacheStats,
}

impl BufferCache {
    pub fn new(num_buffers: usize) -> Self {
        let segment_size = num_buffers / 2;
        Self {
            hot: LRUReplacer::new(segment_size),
            cold: LRUReplacer::new(segment_size),
            modified: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn access(&mut self, sector: Sector, access_type: AccessType) -> CacheAccess {
        let (classification, eviction) = if self.hot.contains(sector) {
            log::trace!("Accessing sector {} in hot cache. (Hit)", sector);
            self.hot.record_access(sector);
            self.stats.hits += 1;
            (Classification::Hit, None)
        } else if self.cold.contains(sector) {
            log::trace!("Promoting sector {} from cold cache to hot cache.", sector);
            self.cold.remove(sector);
            let eviction = self.make_room(Segment::Hot);
            self.hot.record_access(sector);
            self.stats.promotions += 1;
            (Classification::Promotion, eviction)
        } else {
            log::trace!("Loading sector {} into cold cache. (Miss)", sector);
            let eviction = self.make_room(Segment::Cold);
            self.cold.record_access(sector);
            self.stats.misses += 1;
            (Classification::Miss, eviction)
        };

        if access_type.is_write() {
            self.modified.insert(sector);
        }

        CacheAccess {
            classification,
            eviction,
        }
    }

    // Evicts the LRU entry of `segment` if it has no free slot
    fn make_room(&mut self, segment: Segment) -> Option<Eviction> {
        let replacer = match segment {
            Segment::Hot => &mut self.hot,
            Segment::Cold => &mut self.cold,
        };
        if !replacer.is_full() {
            return None;
        }
        let sector = replacer.evict()?;
        log::debug!("Evicting sector {} from {:?} cache.", sector, segment);

        // The dirty flag is cleared in the same step the sector leaves the cache
        let written_back = self.modified.remove(&sector);
        if written_back {
            log::debug!("Writing modified sector {} to disk.", sector);
            self.stats.write_backs += 1;
        }
        self.stats.evictions += 1;

        Some(Eviction {
            sector,
            segment,
            written_back,
        })
    }

    pub fn contains(&self, sector: Sector) -> bool {
        self.hot.contains(sector) || self.cold.contains(sector)
    }

    pub fn segment_of(&self, sector: Sector) -> Option<Segment> {
        if self.hot.contains(sector) {
            Some(Segment::Hot)
        } else if self.cold.contains(sector) {
            Some(Segment::Cold)
        } else {
            None
        }
    }

    pub fn is_dirty(&self, sector: Sector) -> bool {
        self.modified.contains(&sector)
    }

    pub fn dirty_count(&self) -> usize {
        self.modified.len()
    }

    pub fn len(&self) -> usize {
        self.hot.size() + self.cold.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn segment_capacity(&self) -> usize {
        self.hot.capacity()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn state(&self) -> CacheState {
        CacheState {
            hot: self.hot.entries(),
            cold: self.cold.entries(),
        }
    }
}
