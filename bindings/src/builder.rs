//! KeepBindingsBuilder for constructing an immutable binding table.

use crate::bindings::BindingTable;
use crate::{KeepBinding, KeepBindings};
use keepanno_core::{KeepBindingSymbol, KeepEdgeError, KeepResult};
use keepanno_pattern::{
    KeepBindingReference, KeepClassBindingReference, KeepClassItemPattern, KeepItemPattern,
    KeepMemberBindingReference, KeepMemberItemPattern,
};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Builder for a binding table.
///
/// Each binding is validated as it is added: it may refer only to bindings added before it.
/// Self, forward and undefined references are rejected at that point, which also rules out
/// cycles through several bindings.
#[derive(Debug, Default)]
pub struct KeepBindingsBuilder {
    /// Bindings added so far.
    table: BindingTable,
    /// Names handed out by `create` and `fresh_symbol`.
    reserved_names: HashSet<String>,
}

impl KeepBindingsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a symbol with exactly the given name.
    ///
    /// Symbols are unique even if names repeat, but a table holds at most one binding per
    /// name: adding a second symbol with a bound name fails.
    pub fn create(&mut self, name: impl Into<String>) -> KeepBindingSymbol {
        let name = name.into();
        let symbol = KeepBindingSymbol::new(name.as_str());
        self.reserved_names.insert(name);
        symbol
    }

    /// Create a symbol whose name is unique within this builder.
    ///
    /// The first use of a hint yields the hint itself, later uses `hint$1`, `hint$2` and so on.
    pub fn fresh_symbol(&mut self, hint: &str) -> KeepBindingSymbol {
        let mut name = hint.to_string();
        let mut suffix = 0;
        while self.reserved_names.contains(&name) {
            suffix += 1;
            name = format!("{}${}", hint, suffix);
        }
        self.create(name)
    }

    /// Bind a symbol to an item pattern and return a reference to the new binding.
    pub fn add_binding(
        &mut self,
        symbol: KeepBindingSymbol,
        item: impl Into<KeepItemPattern>,
    ) -> KeepResult<KeepBindingReference> {
        let item = item.into();
        if self.table.get(&symbol).is_some() || self.table.contains_name(symbol.name()) {
            return Err(KeepEdgeError::duplicate_binding(symbol.name()));
        }
        for reference in item.binding_references() {
            if reference.symbol() == &symbol {
                return Err(KeepEdgeError::self_recursive_binding(symbol.name()));
            }
            trace!(binding = %symbol, target = %reference.symbol(), "checking binding reference");
            self.table.check_reference(&reference)?;
        }
        debug!(binding = %symbol, %item, "adding binding");
        let binding = KeepBinding::new(symbol, item);
        let reference = binding.reference();
        self.table.insert(binding);
        Ok(reference)
    }

    pub fn add_class_binding(
        &mut self,
        symbol: KeepBindingSymbol,
        item: KeepClassItemPattern,
    ) -> KeepResult<KeepClassBindingReference> {
        self.add_binding(symbol.clone(), item)?;
        Ok(KeepClassBindingReference::new(symbol))
    }

    pub fn add_member_binding(
        &mut self,
        symbol: KeepBindingSymbol,
        item: KeepMemberItemPattern,
    ) -> KeepResult<KeepMemberBindingReference> {
        self.add_binding(symbol.clone(), item)?;
        Ok(KeepMemberBindingReference::new(symbol))
    }

    /// Returns true if the symbol is bound in this builder.
    pub fn is_bound(&self, symbol: &KeepBindingSymbol) -> bool {
        self.table.get(symbol).is_some()
    }

    /// Publish the table. An empty builder yields the canonical empty table.
    pub fn build(self) -> KeepBindings {
        debug!(bindings = self.table.len(), "built binding table");
        KeepBindings::from_table(self.table)
    }
}
