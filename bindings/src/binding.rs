//! A single binding.

use keepanno_core::KeepBindingSymbol;
use keepanno_pattern::{KeepBindingReference, KeepItemPattern};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An item pattern bound to a symbol.
///
/// Bindings compare by symbol. Two bindings over equal patterns are still distinct, so every
/// reference to one binding denotes the same matched item.
#[derive(Debug, Clone)]
pub struct KeepBinding {
    symbol: KeepBindingSymbol,
    item: KeepItemPattern,
}

impl KeepBinding {
    pub(crate) fn new(symbol: KeepBindingSymbol, item: KeepItemPattern) -> Self {
        Self { symbol, item }
    }

    pub fn symbol(&self) -> &KeepBindingSymbol {
        &self.symbol
    }

    pub fn item(&self) -> &KeepItemPattern {
        &self.item
    }

    /// A reference to this binding, typed by the kind of the bound item.
    pub fn reference(&self) -> KeepBindingReference {
        KeepBindingReference::for_item(self.symbol.clone(), &self.item)
    }
}

impl PartialEq for KeepBinding {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for KeepBinding {}

impl Hash for KeepBinding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for KeepBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.symbol, self.item)
    }
}
