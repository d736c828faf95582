//! Keepanno Core Types
//!
//! This crate provides the foundational types shared by the keep-rule AST:
//! - The domain error type (KeepEdgeError) and result alias
//! - Binding symbols (identity-compared names for bindings)
//! - Type descriptor and identifier validation helpers

pub mod descriptor;
mod error;
mod symbol;

pub use error::*;
pub use symbol::*;
