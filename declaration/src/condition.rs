//! Preconditions of an edge.

use keepanno_core::{KeepEdgeError, KeepResult};
use keepanno_pattern::{BindingResolver, KeepBindingReference, KeepItemPattern, KeepItemReference};
use std::fmt;

/// A single precondition: the referenced item is live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepCondition {
    item: KeepItemReference,
}

impl KeepCondition {
    pub fn builder() -> KeepConditionBuilder {
        KeepConditionBuilder::default()
    }

    pub fn item(&self) -> &KeepItemReference {
        &self.item
    }
}

impl fmt::Display for KeepCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeepConditionBuilder {
    item: Option<KeepItemReference>,
}

impl KeepConditionBuilder {
    pub fn set_item_reference(mut self, item: KeepItemReference) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_item_pattern(self, item: KeepItemPattern) -> Self {
        self.set_item_reference(item.into())
    }

    pub fn build(self) -> KeepResult<KeepCondition> {
        let item = self
            .item
            .ok_or_else(|| KeepEdgeError::missing_item("condition"))?;
        Ok(KeepCondition { item })
    }
}

/// A non-empty conjunction of conditions. Only the preconditions builder creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepConditionList(Vec<KeepCondition>);

impl KeepConditionList {
    pub fn as_slice(&self) -> &[KeepCondition] {
        &self.0
    }
}

/// The preconditions of an edge: always true, or a non-empty conjunction of conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepPreconditions {
    #[default]
    Always,
    Conditions(KeepConditionList),
}

impl KeepPreconditions {
    pub fn always() -> Self {
        KeepPreconditions::Always
    }

    pub fn builder() -> KeepPreconditionsBuilder {
        KeepPreconditionsBuilder::default()
    }

    pub fn is_always(&self) -> bool {
        matches!(self, KeepPreconditions::Always)
    }

    /// The conditions in order. Empty for `Always`.
    pub fn conditions(&self) -> &[KeepCondition] {
        match self {
            KeepPreconditions::Always => &[],
            KeepPreconditions::Conditions(conditions) => conditions.as_slice(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeepCondition> {
        self.conditions().iter()
    }

    pub fn for_each(&self, f: impl FnMut(&KeepCondition)) {
        self.iter().for_each(f);
    }

    /// Returns true if the preconditions always hold: no conditions, or only "any item" ones.
    pub fn is_trivial(&self, resolver: &dyn BindingResolver) -> bool {
        self.iter().all(|condition| condition.item().is_any(resolver))
    }

    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        self.iter()
            .flat_map(|condition| condition.item().binding_references())
            .collect()
    }
}

impl fmt::Display for KeepPreconditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepPreconditions::Always => f.write_str("true"),
            KeepPreconditions::Conditions(conditions) => {
                for (i, condition) in conditions.as_slice().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{}", condition)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeepPreconditionsBuilder {
    conditions: Vec<KeepCondition>,
}

impl KeepPreconditionsBuilder {
    pub fn add_condition(mut self, condition: KeepCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Zero conditions yields `Always`.
    pub fn build(self) -> KeepPreconditions {
        if self.conditions.is_empty() {
            return KeepPreconditions::Always;
        }
        KeepPreconditions::Conditions(KeepConditionList(self.conditions))
    }
}
