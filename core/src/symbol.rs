//! Binding symbols.
//!
//! A symbol names a binding. Symbols compare by identity: two symbols created with the same
//! textual name are still different symbols.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A uniquely identified binding name.
#[derive(Clone)]
pub struct KeepBindingSymbol {
    id: u64,
    name: Arc<str>,
}

impl KeepBindingSymbol {
    /// Create a new symbol. Every call yields a distinct symbol.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }
    }

    /// The unique identity of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The textual name, used for diagnostics only.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for KeepBindingSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for KeepBindingSymbol {}

impl Hash for KeepBindingSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for KeepBindingSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

impl fmt::Display for KeepBindingSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
