//! Shared cache of compiled styles
//!
//! Cloning a [`StyleCache`] clones the handle, not the entries, so every
//! scheme built from it sees the same compiled styles.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::style::{compile, CompiledCode};

type Entries = HashMap<String, Arc<CompiledCode>>;

/// Thread-safe map from style descriptor to compiled sequence.
#[derive(Debug, Clone, Default)]
pub struct StyleCache {
    entries: Arc<RwLock<Entries>>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled sequence for `style`, compiling it on first use.
    ///
    /// Compilation happens outside the lock. Two threads racing on the same
    /// new style may both compile it; the first insert wins and both get the
    /// same entry back.
    pub fn get_or_compile(&self, style: &str) -> Arc<CompiledCode> {
        if let Some(code) = self.read().get(style) {
            trace!(style, "Style cache hit");
            return Arc::clone(code);
        }

        let compiled = Arc::new(compile(style));
        let mut entries = self.write();
        let code = entries.entry(style.to_string()).or_insert_with(|| {
            debug!(style, len = compiled.as_str().len(), "Compiled style");
            compiled
        });
        Arc::clone(code)
    }

    /// Whether `style` has been compiled.
    pub fn contains(&self, style: &str) -> bool {
        self.read().contains_key(style)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether `self` and `other` are handles to the same cache.
    pub fn shares_with(&self, other: &StyleCache) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    // Entries are only ever inserted whole, so a poisoned lock still guards
    // a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
