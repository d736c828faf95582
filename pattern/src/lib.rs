//! Keepanno Pattern
//!
//! Immutable patterns over classes, fields and methods.
//!
//! Responsibilities:
//! - Name, type, access and supertype patterns with canonical "any" values
//! - Validated names and descriptors; exact patterns cannot hold malformed text
//! - Members aggregates with any-field/any-method normalization
//! - Class and member item patterns
//! - Item references, inline or through bindings
//! - The `BindingResolver` seam used by queries that follow bindings

mod access;
mod class_name;
mod exact;
mod instance_of;
mod item;
mod member;
mod members;
mod reference;
mod resolve;
mod type_pattern;

pub use access::{
    AccessPatternBuilder, AccessPatternBuilderBase, AccessVisibility, AccessVisibilitySet,
    KeepFieldAccessPattern, KeepFieldAccessPatternBuilder, KeepMemberAccessPattern,
    KeepMemberAccessPatternBuilder, KeepMethodAccessPattern, KeepMethodAccessPatternBuilder,
    ModifierPattern,
};
pub use class_name::{
    KeepPackagePattern, KeepQualifiedClassNamePattern, KeepQualifiedClassNamePatternBuilder,
    KeepUnqualifiedClassNamePattern,
};
pub use exact::{ClassSimpleName, FieldName, MethodName, PackageName, TypeDescriptor};
pub use instance_of::{
    InstanceOfNamed, KeepExtendsPattern, KeepInstanceOfPattern, KeepInstanceOfPatternBuilder,
    SupertypeName,
};
pub use item::{
    KeepClassItemPattern, KeepClassItemPatternBuilder, KeepItemPattern, KeepMemberItemPattern,
    KeepMemberItemPatternBuilder,
};
pub use member::{
    KeepFieldNamePattern, KeepFieldPattern, KeepFieldPatternBuilder, KeepMemberPattern,
    KeepMethodNamePattern, KeepMethodPattern, KeepMethodPatternBuilder,
};
pub use members::{KeepMembersPattern, KeepMembersPatternBuilder, MemberPatternList};
pub use reference::{
    KeepBindingReference, KeepClassBindingReference, KeepClassItemReference,
    KeepItemReference, KeepMemberBindingReference, KeepMemberItemReference,
};
pub use resolve::{BindingResolver, NoBindings};
pub use type_pattern::{
    KeepMethodParametersPattern, KeepMethodParametersPatternBuilder,
    KeepMethodReturnTypePattern, KeepTypePattern,
};
