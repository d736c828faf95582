//! Keepanno Declaration
//!
//! Keep edges and checks built from item patterns and a binding table.
//!
//! Responsibilities:
//! - Normalize keep options to the permitted set
//! - Preconditions with a single "always" form
//! - Non-empty consequences
//! - Validate binding references of edges and checks against their tables

mod check;
mod condition;
mod declaration;
mod edge;
mod meta;
mod options;
mod target;

pub use check::{KeepCheck, KeepCheckBuilder, KeepCheckKind};
pub use condition::{
    KeepCondition, KeepConditionBuilder, KeepConditionList, KeepPreconditions,
    KeepPreconditionsBuilder,
};
pub use declaration::KeepDeclaration;
pub use edge::{KeepEdge, KeepEdgeBuilder};
pub use meta::{KeepEdgeContext, KeepEdgeMetaInfo, KeepEdgeMetaInfoBuilder};
pub use options::{KeepOption, KeepOptionSet, KeepOptions, KeepOptionsBuilder};
pub use target::{KeepConsequences, KeepConsequencesBuilder, KeepTarget, KeepTargetBuilder};
