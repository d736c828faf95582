//! Consequences of an edge: the targets to keep and their options.

use crate::KeepOptions;
use keepanno_core::{KeepEdgeError, KeepResult};
use keepanno_pattern::{KeepBindingReference, KeepItemPattern, KeepItemReference};
use std::fmt;

/// An item to keep, with the behaviors still permitted on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepTarget {
    item: KeepItemReference,
    options: KeepOptions,
}

impl KeepTarget {
    pub fn builder() -> KeepTargetBuilder {
        KeepTargetBuilder::default()
    }

    pub fn item(&self) -> &KeepItemReference {
        &self.item
    }

    pub fn options(&self) -> &KeepOptions {
        &self.options
    }
}

impl fmt::Display for KeepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.item, self.options)
    }
}

/// Builder for a target. Options default to keep-all.
#[derive(Debug, Clone, Default)]
pub struct KeepTargetBuilder {
    item: Option<KeepItemReference>,
    options: KeepOptions,
}

impl KeepTargetBuilder {
    pub fn set_item_reference(mut self, item: KeepItemReference) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_item_pattern(self, item: KeepItemPattern) -> Self {
        self.set_item_reference(item.into())
    }

    pub fn set_options(mut self, options: KeepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> KeepResult<KeepTarget> {
        let item = self
            .item
            .ok_or_else(|| KeepEdgeError::missing_item("target"))?;
        Ok(KeepTarget {
            item,
            options: self.options,
        })
    }
}

/// A non-empty ordered list of targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepConsequences {
    targets: Vec<KeepTarget>,
}

impl KeepConsequences {
    pub fn builder() -> KeepConsequencesBuilder {
        KeepConsequencesBuilder::default()
    }

    pub fn targets(&self) -> &[KeepTarget] {
        &self.targets
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeepTarget> {
        self.targets.iter()
    }

    pub fn for_each_target(&self, f: impl FnMut(&KeepTarget)) {
        self.iter().for_each(f);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false for a built value.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        self.iter()
            .flat_map(|target| target.item().binding_references())
            .collect()
    }
}

impl fmt::Display for KeepConsequences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", target)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeepConsequencesBuilder {
    targets: Vec<KeepTarget>,
}

impl KeepConsequencesBuilder {
    pub fn add_target(mut self, target: KeepTarget) -> Self {
        self.targets.push(target);
        self
    }

    pub fn build(self) -> KeepResult<KeepConsequences> {
        if self.targets.is_empty() {
            return Err(KeepEdgeError::EmptyConsequences);
        }
        Ok(KeepConsequences {
            targets: self.targets,
        })
    }
}
