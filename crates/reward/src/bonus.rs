//! Per-cell first-visit bonuses for the dense policy.
//!
//! A bonus table is generated once per grid size and then shared, read-only,
//! by every dense environment of that size. [`BonusCache`] is a cheap handle
//! onto that shared map; clones refer to the same tables. Callers that want
//! isolation (tests, independent experiments) create their own cache, the
//! rest use [`BonusCache::global`].

use crate::DENSE_RANGE;
use parking_lot::RwLock;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Bonus per cell index, each in `0..DENSE_RANGE`.
pub type BonusTable = Arc<[u32]>;

#[derive(Debug, Clone, Default)]
pub struct BonusCache {
    tables: Arc<RwLock<HashMap<(usize, usize), BonusTable>>>,
}

impl BonusCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache, created on first use.
    #[must_use]
    pub fn global() -> &'static BonusCache {
        static GLOBAL: OnceLock<BonusCache> = OnceLock::new();
        GLOBAL.get_or_init(BonusCache::new)
    }

    /// Returns the table for a `width x height` grid, generating it with
    /// `rng` if this cache has not seen that size yet. Only the first caller
    /// for a given size draws from its generator.
    pub fn get_or_create<R: Rng>(&self, width: usize, height: usize, rng: &mut R) -> BonusTable {
        if let Some(table) = self.tables.read().get(&(width, height)) {
            return Arc::clone(table);
        }
        let mut tables = self.tables.write();
        let table = tables.entry((width, height)).or_insert_with(|| {
            debug!(width, height, "generating dense bonus table");
            (0..width * height).map(|_| rng.gen_range(0..DENSE_RANGE)).collect()
        });
        Arc::clone(table)
    }

    #[must_use]
    pub fn get(&self, width: usize, height: usize) -> Option<BonusTable> {
        self.tables.read().get(&(width, height)).cloned()
    }

    /// Number of grid sizes with a table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
