//! Integration test framework for keep declarations.
//!
//! A scenario is a list of named steps. Each step builds one declaration and checks the
//! outcome against an assertion.

mod assertion;
mod error;
pub mod fixtures;

pub use assertion::{Assertion, DeclarationKind};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Scenario, Step};

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::{Assertion, Scenario, ScenarioError, ScenarioResult};
    pub use keepanno_bindings::{KeepBinding, KeepBindings, KeepBindingsBuilder};
    pub use keepanno_core::{KeepBindingSymbol, KeepEdgeError, KeepResult};
    pub use keepanno_declaration::*;
    pub use keepanno_pattern::*;
}
