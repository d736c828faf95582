//! Keep edges: preconditions implying consequences.

use crate::{KeepConsequences, KeepEdgeMetaInfo, KeepPreconditions};
use keepanno_bindings::KeepBindings;
use keepanno_core::{KeepEdgeError, KeepResult};
use keepanno_pattern::{KeepBindingReference, KeepClassBindingReference};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// A keep rule: if every precondition holds, keep every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepEdge {
    meta_info: KeepEdgeMetaInfo,
    bindings: KeepBindings,
    preconditions: KeepPreconditions,
    consequences: KeepConsequences,
}

impl KeepEdge {
    pub fn builder() -> KeepEdgeBuilder {
        KeepEdgeBuilder::default()
    }

    pub fn meta_info(&self) -> &KeepEdgeMetaInfo {
        &self.meta_info
    }

    pub fn bindings(&self) -> &KeepBindings {
        &self.bindings
    }

    pub fn preconditions(&self) -> &KeepPreconditions {
        &self.preconditions
    }

    pub fn consequences(&self) -> &KeepConsequences {
        &self.consequences
    }

    /// Returns true if the edge has no conditions at all.
    pub fn is_unconditional(&self) -> bool {
        self.preconditions.is_always()
    }

    /// Returns true if the preconditions hold for every program.
    pub fn has_trivial_preconditions(&self) -> bool {
        self.preconditions.is_trivial(&self.bindings)
    }

    /// The bindings named directly by conditions and targets, without duplicates.
    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        let mut seen = HashSet::new();
        self.preconditions
            .binding_references()
            .into_iter()
            .chain(self.consequences.binding_references())
            .filter(|reference| seen.insert(reference.symbol().clone()))
            .collect()
    }

    /// The single class binding shared by all targets, if they have one.
    pub fn consequences_class_binding(&self) -> KeepResult<Option<KeepClassBindingReference>> {
        self.bindings
            .unique_class_binding(self.consequences.iter().map(|target| target.item()))
    }
}

impl fmt::Display for KeepEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.meta_info)?;
        if !self.bindings.is_none() {
            writeln!(f, "bindings {}", self.bindings)?;
        }
        write!(f, "{} -> {}", self.preconditions, self.consequences)
    }
}

/// Builder for an edge. Defaults to no metadata, no bindings and no preconditions.
#[derive(Debug, Clone, Default)]
pub struct KeepEdgeBuilder {
    meta_info: KeepEdgeMetaInfo,
    bindings: KeepBindings,
    preconditions: KeepPreconditions,
    consequences: Option<KeepConsequences>,
}

impl KeepEdgeBuilder {
    pub fn set_meta_info(mut self, meta_info: KeepEdgeMetaInfo) -> Self {
        self.meta_info = meta_info;
        self
    }

    pub fn set_bindings(mut self, bindings: KeepBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn set_preconditions(mut self, preconditions: KeepPreconditions) -> Self {
        self.preconditions = preconditions;
        self
    }

    pub fn set_consequences(mut self, consequences: KeepConsequences) -> Self {
        self.consequences = Some(consequences);
        self
    }

    /// Fails without consequences, or if a condition or target names a binding the edge's
    /// table does not define with the right kind.
    pub fn build(self) -> KeepResult<KeepEdge> {
        let consequences = self.consequences.ok_or(KeepEdgeError::EmptyConsequences)?;
        for reference in self
            .preconditions
            .binding_references()
            .iter()
            .chain(consequences.binding_references().iter())
        {
            self.bindings.check_reference(reference)?;
        }
        debug!(
            bindings = self.bindings.len(),
            conditions = self.preconditions.conditions().len(),
            targets = consequences.len(),
            "built keep edge"
        );
        Ok(KeepEdge {
            meta_info: self.meta_info,
            bindings: self.bindings,
            preconditions: self.preconditions,
            consequences,
        })
    }
}
