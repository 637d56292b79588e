//! Pre-warmed free-list pool for reusable per-frame resources.
//!
//! Slots are created once and never deallocated; they only move between the
//! free and active sets. The two sets partition the pool — a slot is in
//! exactly one of them at any time, which is what makes releases safe to
//! repeat and spawns safe to interleave with despawns.

use log::warn;

/// Index of a pool slot. Stable for the life of the pool.
pub type PoolSlot = usize;

/// Generic object pool with a grow-on-starvation free list.
pub struct ResourcePool<T> {
    items: Vec<T>,
    active: Vec<bool>,
    free: Vec<PoolSlot>,
    label: &'static str,
}

impl<T: Default> ResourcePool<T> {
    /// Create a pool pre-warmed with `capacity` default items, all free.
    pub fn prewarmed(label: &'static str, capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, T::default);
        Self {
            items,
            active: vec![false; capacity],
            // Reversed so the first acquires hand out slots 0, 1, 2, ...
            free: (0..capacity).rev().collect(),
            label,
        }
    }

    /// Move one slot from the free set to the active set. When the free set
    /// is empty the pool grows by one item instead of failing — memory is
    /// traded for never refusing a spawn, and the growth is logged.
    pub fn acquire(&mut self) -> PoolSlot {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                warn!(
                    "{} pool exhausted at {} items, growing",
                    self.label,
                    self.items.len()
                );
                self.items.push(T::default());
                self.active.push(false);
                self.items.len() - 1
            }
        };
        self.active[slot] = true;
        slot
    }
}

impl<T> ResourcePool<T> {
    /// Return a slot to the free set. Releasing a slot that is not active
    /// (already free, or out of range) is a no-op — it must never corrupt
    /// either set.
    pub fn release(&mut self, slot: PoolSlot) {
        if self.active.get(slot).copied().unwrap_or(false) {
            self.active[slot] = false;
            self.free.push(slot);
        }
    }

    pub fn is_active(&self, slot: PoolSlot) -> bool {
        self.active.get(slot).copied().unwrap_or(false)
    }

    pub fn get(&self, slot: PoolSlot) -> &T {
        &self.items[slot]
    }

    pub fn get_mut(&mut self, slot: PoolSlot) -> &mut T {
        &mut self.items[slot]
    }

    /// Total items ever created (free + active). Never decreases.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.items.len() - self.free.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Token;

    #[test]
    fn prewarmed_pool_starts_all_free() {
        let pool: ResourcePool<Token> = ResourcePool::prewarmed("test", 8);
        assert_eq!(pool.len(), 8);
        assert_eq!(pool.free_count(), 8);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn acquire_release_keeps_sets_partitioned() {
        let mut pool: ResourcePool<Token> = ResourcePool::prewarmed("test", 4);

        let a = pool.acquire();
        let b = pool.acquire();
        assert_ne!(a, b, "Two live acquisitions must hand out distinct slots");
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.free_count(), 2);

        pool.release(a);
        assert!(!pool.is_active(a));
        assert!(pool.is_active(b));
        assert_eq!(pool.active_count() + pool.free_count(), pool.len());
    }

    #[test]
    fn double_release_is_a_no_op() {
        let mut pool: ResourcePool<Token> = ResourcePool::prewarmed("test", 2);
        let slot = pool.acquire();

        pool.release(slot);
        let free_after_first = pool.free_count();
        pool.release(slot);
        assert_eq!(
            pool.free_count(),
            free_after_first,
            "Releasing an already-free slot must not grow the free set"
        );

        // Out-of-range releases are equally harmless.
        pool.release(999);
        assert_eq!(pool.free_count(), free_after_first);
    }

    #[test]
    fn exhausted_pool_grows_instead_of_failing() {
        let mut pool: ResourcePool<Token> = ResourcePool::prewarmed("test", 2);
        let _a = pool.acquire();
        let _b = pool.acquire();

        let c = pool.acquire();
        assert_eq!(pool.len(), 3, "Pool should grow by one under starvation");
        assert!(pool.is_active(c));
    }

    #[test]
    fn pool_never_net_shrinks() {
        let mut pool: ResourcePool<Token> = ResourcePool::prewarmed("test", 3);
        let mut held = Vec::new();

        // Arbitrary interleaving of acquires and releases.
        for step in 0u32..50 {
            if step % 3 == 0 {
                held.push(pool.acquire());
            } else if let Some(slot) = held.pop() {
                pool.release(slot);
            }
            assert!(pool.len() >= 3);
            assert_eq!(
                pool.active_count() + pool.free_count(),
                pool.len(),
                "Free and active sets must partition the pool"
            );
        }
    }

    #[test]
    fn slots_are_reused_after_release() {
        let mut pool: ResourcePool<Token> = ResourcePool::prewarmed("test", 1);
        let a = pool.acquire();
        pool.release(a);
        let b = pool.acquire();
        assert_eq!(a, b, "A released slot should be handed out again");
        assert_eq!(pool.len(), 1, "Reuse must not allocate");
    }
}
