use std::collections::{HashMap, VecDeque};

use crate::frame::fingerprint::RequestFingerprint;

/// Default number of frames kept.
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Decides which cached frame to drop when the cache is full.
pub trait EvictionPolicy: std::fmt::Debug {
    fn on_insert(&mut self, key: RequestFingerprint);

    fn on_hit(&mut self, _key: RequestFingerprint) {}

    /// Key to evict next, removed from the policy's bookkeeping.
    fn evict(&mut self) -> Option<RequestFingerprint>;

    fn clear(&mut self);
}

/// Oldest insertion goes first; hits do not refresh an entry.
#[derive(Debug, Default)]
pub struct Fifo {
    order: VecDeque<RequestFingerprint>,
}

impl EvictionPolicy for Fifo {
    fn on_insert(&mut self, key: RequestFingerprint) {
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
        }
        self.order.push_back(key);
    }

    fn evict(&mut self) -> Option<RequestFingerprint> {
        self.order.pop_front()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}

/// Snapshot of a fully painted surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedFrame {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA8 rows.
    pub pixels: Vec<u8>,
}

/// Bounded map from request fingerprint to painted frame.
#[derive(Debug)]
pub struct RenderCache {
    entries: HashMap<RequestFingerprint, CachedFrame>,
    policy: Box<dyn EvictionPolicy>,
    capacity: usize,
}

impl RenderCache {
    /// FIFO cache holding up to `capacity` frames; `0` disables caching.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, Box::new(Fifo::default()))
    }

    pub fn with_policy(capacity: usize, policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            capacity,
        }
    }

    pub fn get(&mut self, key: RequestFingerprint) -> Option<&CachedFrame> {
        let frame = self.entries.get(&key)?;
        self.policy.on_hit(key);
        Some(frame)
    }

    pub fn contains(&self, key: RequestFingerprint) -> bool {
        self.entries.contains_key(&key)
    }

    /// Store `frame`, evicting first when full. Returns the evicted key, if any.
    pub fn insert(
        &mut self,
        key: RequestFingerprint,
        frame: CachedFrame,
    ) -> Option<RequestFingerprint> {
        if self.capacity == 0 {
            return None;
        }
        let mut evicted = None;
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.capacity {
                let Some(victim) = self.policy.evict() else {
                    break;
                };
                if self.entries.remove(&victim).is_some() {
                    tracing::debug!(?victim, "render cache eviction");
                    evicted = Some(victim);
                }
            }
        }
        self.entries.insert(key, frame);
        self.policy.on_insert(key);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.policy.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/cache.rs"]
mod tests;
