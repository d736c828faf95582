//! Keep edge error types.

use thiserror::Error;

/// Result type for keep AST construction.
pub type KeepResult<T> = Result<T, KeepEdgeError>;

/// Errors raised while building keep declarations.
///
/// Every variant is a construction-time failure. Built nodes never produce errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeepEdgeError {
    /// A binding's pattern refers to the binding itself.
    #[error("Recursive binding for name '{name}'")]
    SelfRecursiveBinding { name: String },

    /// A binding reference names a symbol with no definition.
    #[error("Undefined binding for name '{name}'")]
    UndefinedBinding { name: String },

    /// A class reference names a member binding, or a member reference names a class binding.
    #[error("Binding '{name}' is not a {expected} binding")]
    BindingKindMismatch { name: String, expected: &'static str },

    /// A symbol, or another symbol with the same name, was bound twice.
    #[error("Duplicate binding for name '{name}'")]
    DuplicateBinding { name: String },

    /// An item reaches more than one class binding where a single holder is required.
    #[error("Unexpected reference to multiple class bindings")]
    MultipleClassBindings,

    /// Consequences must contain at least one target.
    #[error("Invalid empty consequence set")]
    EmptyConsequences,

    /// A field or method pattern was built without a name matcher.
    #[error("Invalid {member} pattern: missing name pattern")]
    MissingNamePattern { member: &'static str },

    /// A condition, target or check was built without an item.
    #[error("Invalid {context}: missing item")]
    MissingItem { context: &'static str },

    /// A check was built without a kind.
    #[error("Invalid check: missing kind")]
    MissingCheckKind,

    /// An exclusive instance-of over any class would match nothing.
    #[error("Invalid instance-of pattern: exclusive over any class matches nothing")]
    ExclusiveInstanceOfAny,

    /// The access constraints leave no visibility that could match.
    #[error("Invalid access pattern: empty set of visibilities")]
    EmptyVisibility,

    /// Allowing every option is the same as having no keep rule.
    #[error("Invalid keep options that allow everything")]
    AllowAllOptions,

    /// Disallowing nothing is the same as having no keep rule.
    #[error("Invalid keep options that disallow nothing")]
    DisallowNoOptions,

    /// A type descriptor that is not well formed.
    #[error("Invalid type descriptor '{descriptor}': {reason}")]
    InvalidDescriptor { descriptor: String, reason: String },

    /// A package, class or member name that is not well formed.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl KeepEdgeError {
    pub fn self_recursive_binding(name: impl Into<String>) -> Self {
        Self::SelfRecursiveBinding { name: name.into() }
    }

    pub fn undefined_binding(name: impl Into<String>) -> Self {
        Self::UndefinedBinding { name: name.into() }
    }

    pub fn binding_kind_mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Self::BindingKindMismatch {
            name: name.into(),
            expected,
        }
    }

    pub fn duplicate_binding(name: impl Into<String>) -> Self {
        Self::DuplicateBinding { name: name.into() }
    }

    pub fn missing_name_pattern(member: &'static str) -> Self {
        Self::MissingNamePattern { member }
    }

    pub fn missing_item(context: &'static str) -> Self {
        Self::MissingItem { context }
    }

    pub fn invalid_descriptor(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
