//! The binding table - immutable symbol lookup.

use crate::KeepBinding;
use keepanno_core::{KeepBindingSymbol, KeepEdgeError, KeepResult};
use keepanno_pattern::{
    BindingResolver, KeepBindingReference, KeepClassBindingReference, KeepClassItemReference,
    KeepItemPattern, KeepItemReference, KeepQualifiedClassNamePattern,
};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, LazyLock};

static NONE: LazyLock<KeepBindings> = LazyLock::new(|| KeepBindings {
    table: Arc::new(BindingTable::default()),
});

/// Insertion-ordered bindings with a symbol index. Shared by the builder and the table.
#[derive(Debug, Default)]
pub(crate) struct BindingTable {
    bindings: Vec<KeepBinding>,
    index: HashMap<KeepBindingSymbol, usize>,
    names: HashSet<String>,
}

impl BindingTable {
    pub(crate) fn get(&self, symbol: &KeepBindingSymbol) -> Option<&KeepBinding> {
        self.index.get(symbol).map(|&i| &self.bindings[i])
    }

    /// Returns true if some binding already uses this name.
    pub(crate) fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    pub(crate) fn insert(&mut self, binding: KeepBinding) {
        self.names.insert(binding.symbol().name().to_string());
        self.index.insert(binding.symbol().clone(), self.bindings.len());
        self.bindings.push(binding);
    }

    /// Fails unless the reference names a binding of the matching kind.
    pub(crate) fn check_reference(&self, reference: &KeepBindingReference) -> KeepResult<()> {
        let name = reference.symbol().name();
        let binding = self
            .get(reference.symbol())
            .ok_or_else(|| KeepEdgeError::undefined_binding(name))?;
        match reference {
            KeepBindingReference::Class(_) if !binding.item().is_class_item() => {
                Err(KeepEdgeError::binding_kind_mismatch(name, "class"))
            }
            KeepBindingReference::Member(_) if !binding.item().is_member_item() => {
                Err(KeepEdgeError::binding_kind_mismatch(name, "member"))
            }
            _ => Ok(()),
        }
    }
}

/// The binding table of one declaration.
///
/// Immutable once built and cheap to clone. The empty table is a single shared instance.
#[derive(Clone)]
pub struct KeepBindings {
    table: Arc<BindingTable>,
}

impl KeepBindings {
    /// The canonical empty table.
    pub fn none() -> Self {
        NONE.clone()
    }

    pub(crate) fn from_table(table: BindingTable) -> Self {
        if table.len() == 0 {
            return Self::none();
        }
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns true for the canonical empty table.
    pub fn is_none(&self) -> bool {
        Arc::ptr_eq(&self.table, &NONE.table)
    }

    pub fn get(&self, symbol: &KeepBindingSymbol) -> Option<&KeepBinding> {
        self.table.get(symbol)
    }

    pub fn contains(&self, symbol: &KeepBindingSymbol) -> bool {
        self.table.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.bindings.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KeepBinding> {
        self.table.bindings.iter()
    }

    /// Fails unless the reference names a binding of the matching kind in this table.
    pub fn check_reference(&self, reference: &KeepBindingReference) -> KeepResult<()> {
        self.table.check_reference(reference)
    }

    /// Returns true if the reference denotes the "any item" in this table.
    pub fn is_any(&self, reference: &KeepItemReference) -> bool {
        reference.is_any(self)
    }

    /// The class-name pattern of a class reference, following at most one binding.
    pub fn resolve_class_name<'a>(
        &'a self,
        reference: &'a KeepClassItemReference,
    ) -> Option<&'a KeepQualifiedClassNamePattern> {
        reference.class_name_pattern(self)
    }

    /// Every binding reachable from the reference, in first-visit order.
    pub fn transitive_references(&self, reference: &KeepItemReference) -> Vec<KeepBindingReference> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        let mut worklist = reference.binding_references();
        worklist.reverse();
        while let Some(next) = worklist.pop() {
            if !seen.insert(next.symbol().clone()) {
                continue;
            }
            if let Some(binding) = self.get(next.symbol()) {
                let mut nested = binding.item().binding_references();
                nested.reverse();
                worklist.extend(nested);
            }
            result.push(next);
        }
        result
    }

    /// The single class binding that a set of item references depends on, if any.
    ///
    /// Fails when the references reach two or more distinct class bindings.
    pub fn unique_class_binding<'a>(
        &self,
        references: impl IntoIterator<Item = &'a KeepItemReference>,
    ) -> KeepResult<Option<KeepClassBindingReference>> {
        let mut found: Option<KeepClassBindingReference> = None;
        for reference in references {
            for binding in self.transitive_references(reference) {
                let Some(class_binding) = binding.as_class() else {
                    continue;
                };
                match &found {
                    Some(existing) if existing != class_binding => {
                        return Err(KeepEdgeError::MultipleClassBindings);
                    }
                    Some(_) => {}
                    None => found = Some(class_binding.clone()),
                }
            }
        }
        Ok(found)
    }
}

impl BindingResolver for KeepBindings {
    fn resolve(&self, symbol: &KeepBindingSymbol) -> Option<&KeepItemPattern> {
        self.get(symbol).map(KeepBinding::item)
    }
}

impl Default for KeepBindings {
    fn default() -> Self {
        Self::none()
    }
}

impl PartialEq for KeepBindings {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.table, &other.table) || self.table.bindings == other.table.bindings
    }
}

impl Eq for KeepBindings {}

impl fmt::Debug for KeepBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for KeepBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, binding) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {}", binding)?;
        }
        f.write_str(" }")
    }
}
