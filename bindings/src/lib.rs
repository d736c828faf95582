//! Keepanno Bindings
//!
//! Named item patterns shared by reference within one declaration.
//!
//! Responsibilities:
//! - Bind symbols to item patterns with identity semantics
//! - Reject self, forward, undefined and mistyped references as bindings are added
//! - Resolve binding references for queries on the built declaration

mod binding;
mod bindings;
mod builder;

pub use binding::KeepBinding;
pub use bindings::KeepBindings;
pub use builder::KeepBindingsBuilder;
