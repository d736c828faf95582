//! Binding resolution seam.

use crate::item::{KeepClassItemPattern, KeepItemPattern, KeepMemberItemPattern};
use keepanno_core::KeepBindingSymbol;

/// Looks up the item pattern bound to a symbol.
///
/// The binding table implements this; queries such as `is_any` go through it whenever they
/// meet a binding reference.
pub trait BindingResolver {
    fn resolve(&self, symbol: &KeepBindingSymbol) -> Option<&KeepItemPattern>;

    fn resolve_class(&self, symbol: &KeepBindingSymbol) -> Option<&KeepClassItemPattern> {
        self.resolve(symbol).and_then(KeepItemPattern::as_class_item)
    }

    fn resolve_member(&self, symbol: &KeepBindingSymbol) -> Option<&KeepMemberItemPattern> {
        self.resolve(symbol).and_then(KeepItemPattern::as_member_item)
    }
}

/// A resolver with no bindings. Every binding reference is unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBindings;

impl BindingResolver for NoBindings {
    fn resolve(&self, _symbol: &KeepBindingSymbol) -> Option<&KeepItemPattern> {
        None
    }
}
