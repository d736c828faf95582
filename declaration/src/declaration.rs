//! Top-level declarations.

use crate::{KeepCheck, KeepEdge, KeepEdgeMetaInfo};
use keepanno_bindings::KeepBindings;
use std::fmt;

/// A keep edge or a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepDeclaration {
    Edge(KeepEdge),
    Check(KeepCheck),
}

impl KeepDeclaration {
    pub fn is_edge(&self) -> bool {
        matches!(self, KeepDeclaration::Edge(_))
    }

    pub fn is_check(&self) -> bool {
        matches!(self, KeepDeclaration::Check(_))
    }

    pub fn as_edge(&self) -> Option<&KeepEdge> {
        match self {
            KeepDeclaration::Edge(edge) => Some(edge),
            KeepDeclaration::Check(_) => None,
        }
    }

    pub fn as_check(&self) -> Option<&KeepCheck> {
        match self {
            KeepDeclaration::Check(check) => Some(check),
            KeepDeclaration::Edge(_) => None,
        }
    }

    pub fn meta_info(&self) -> &KeepEdgeMetaInfo {
        match self {
            KeepDeclaration::Edge(edge) => edge.meta_info(),
            KeepDeclaration::Check(check) => check.meta_info(),
        }
    }

    pub fn bindings(&self) -> &KeepBindings {
        match self {
            KeepDeclaration::Edge(edge) => edge.bindings(),
            KeepDeclaration::Check(check) => check.bindings(),
        }
    }
}

impl From<KeepEdge> for KeepDeclaration {
    fn from(edge: KeepEdge) -> Self {
        KeepDeclaration::Edge(edge)
    }
}

impl From<KeepCheck> for KeepDeclaration {
    fn from(check: KeepCheck) -> Self {
        KeepDeclaration::Check(check)
    }
}

impl fmt::Display for KeepDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepDeclaration::Edge(edge) => write!(f, "{}", edge),
            KeepDeclaration::Check(check) => write!(f, "{}", check),
        }
    }
}
