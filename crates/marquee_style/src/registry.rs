//! Style registration surface
//!
//! The document-level place where declarative rules live. It is shared by
//! every mounted marquee; each instance only ever touches the entry under its
//! own key, so the key namespace is the isolation mechanism and no caller
//! holds a lock across operations.
//!
//! Components receive the surface as a [`SharedStyleRegistry`] so tests can
//! hand in a private [`StyleSheet`], while applications can use the
//! process-wide one from [`global_style_sheet`].

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

/// Outcome of [`StyleRegistry::upsert_rule`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// No entry existed under the key
    Inserted,
    /// An existing entry was overwritten in place
    Replaced,
}

/// Keyed, insert-or-replace store of style rules
pub trait StyleRegistry: Send + Sync {
    /// Install `content` under `key`, overwriting any existing entry
    fn upsert_rule(&self, key: &str, content: &str) -> Upsert;

    /// Remove the entry under `key`. Returns whether an entry was removed;
    /// removing a missing key is a no-op.
    fn remove_rule(&self, key: &str) -> bool;

    /// Current content under `key`
    fn rule(&self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.rule(key).is_some()
    }

    /// Number of installed rules
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared handle to a registry
pub type SharedStyleRegistry = Arc<dyn StyleRegistry>;

/// In-memory style surface preserving document order
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: RwLock<IndexMap<String, String>>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys in document order
    pub fn keys(&self) -> Vec<String> {
        self.rules.read().keys().cloned().collect()
    }

    /// Concatenated stylesheet text in document order
    pub fn to_css(&self) -> String {
        self.rules
            .read()
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Remove every rule
    pub fn clear(&self) {
        self.rules.write().clear();
    }
}

impl StyleRegistry for StyleSheet {
    fn upsert_rule(&self, key: &str, content: &str) -> Upsert {
        let previous = self
            .rules
            .write()
            .insert(key.to_string(), content.to_string());
        let outcome = match previous {
            Some(_) => Upsert::Replaced,
            None => Upsert::Inserted,
        };
        trace!(key, ?outcome, "style rule upserted");
        outcome
    }

    fn remove_rule(&self, key: &str) -> bool {
        // shift_remove keeps the remaining rules in document order
        let removed = self.rules.write().shift_remove(key).is_some();
        trace!(key, removed, "style rule removed");
        removed
    }

    fn rule(&self, key: &str) -> Option<String> {
        self.rules.read().get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.rules.read().contains_key(key)
    }

    fn len(&self) -> usize {
        self.rules.read().len()
    }
}

static GLOBAL_STYLE_SHEET: OnceLock<Arc<StyleSheet>> = OnceLock::new();

/// The process-wide style surface, created on first use
pub fn global_style_sheet() -> Arc<StyleSheet> {
    Arc::clone(GLOBAL_STYLE_SHEET.get_or_init(|| Arc::new(StyleSheet::new())))
}
