//! Checks: assertions that an item was removed or optimized out.

use crate::KeepEdgeMetaInfo;
use keepanno_bindings::KeepBindings;
use keepanno_core::{KeepEdgeError, KeepResult};
use keepanno_pattern::KeepItemPattern;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepCheckKind {
    Removed,
    OptimizedOut,
}

impl KeepCheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeepCheckKind::Removed => "removed",
            KeepCheckKind::OptimizedOut => "optimized-out",
        }
    }
}

impl fmt::Display for KeepCheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An assertion about an item pattern. Checks have no consequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepCheck {
    kind: KeepCheckKind,
    meta_info: KeepEdgeMetaInfo,
    bindings: KeepBindings,
    item: KeepItemPattern,
}

impl KeepCheck {
    pub fn builder() -> KeepCheckBuilder {
        KeepCheckBuilder::default()
    }

    pub fn kind(&self) -> KeepCheckKind {
        self.kind
    }

    pub fn meta_info(&self) -> &KeepEdgeMetaInfo {
        &self.meta_info
    }

    pub fn bindings(&self) -> &KeepBindings {
        &self.bindings
    }

    pub fn item_pattern(&self) -> &KeepItemPattern {
        &self.item
    }
}

impl fmt::Display for KeepCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}check {} {}", self.meta_info, self.kind, self.item)
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeepCheckBuilder {
    kind: Option<KeepCheckKind>,
    meta_info: KeepEdgeMetaInfo,
    bindings: KeepBindings,
    item: Option<KeepItemPattern>,
}

impl KeepCheckBuilder {
    pub fn set_kind(mut self, kind: KeepCheckKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn set_meta_info(mut self, meta_info: KeepEdgeMetaInfo) -> Self {
        self.meta_info = meta_info;
        self
    }

    pub fn set_bindings(mut self, bindings: KeepBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn set_item_pattern(mut self, item: KeepItemPattern) -> Self {
        self.item = Some(item);
        self
    }

    pub fn build(self) -> KeepResult<KeepCheck> {
        let kind = self.kind.ok_or(KeepEdgeError::MissingCheckKind)?;
        let item = self
            .item
            .ok_or_else(|| KeepEdgeError::missing_item("check"))?;
        for reference in item.binding_references() {
            self.bindings.check_reference(&reference)?;
        }
        debug!(%kind, %item, "built keep check");
        Ok(KeepCheck {
            kind,
            meta_info: self.meta_info,
            bindings: self.bindings,
            item,
        })
    }
}
