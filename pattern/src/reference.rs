//! References: an item given inline as a pattern, or by name through a binding.
//!
//! Class and member references are separate unions, so a class reference can never hold a
//! member binding and the other way around.

use crate::class_name::KeepQualifiedClassNamePattern;
use crate::item::{KeepClassItemPattern, KeepItemPattern, KeepMemberItemPattern};
use crate::resolve::BindingResolver;
use keepanno_core::KeepBindingSymbol;
use std::fmt;

/// A reference to a binding of a class item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepClassBindingReference {
    symbol: KeepBindingSymbol,
}

impl KeepClassBindingReference {
    pub fn new(symbol: KeepBindingSymbol) -> Self {
        Self { symbol }
    }

    pub fn symbol(&self) -> &KeepBindingSymbol {
        &self.symbol
    }

    pub fn to_item_reference(&self) -> KeepClassItemReference {
        KeepClassItemReference::Binding(self.clone())
    }
}

impl fmt::Display for KeepClassBindingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.symbol)
    }
}

/// A reference to a binding of a member item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepMemberBindingReference {
    symbol: KeepBindingSymbol,
}

impl KeepMemberBindingReference {
    pub fn new(symbol: KeepBindingSymbol) -> Self {
        Self { symbol }
    }

    pub fn symbol(&self) -> &KeepBindingSymbol {
        &self.symbol
    }

    pub fn to_item_reference(&self) -> KeepMemberItemReference {
        KeepMemberItemReference::Binding(self.clone())
    }
}

impl fmt::Display for KeepMemberBindingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.symbol)
    }
}

/// A reference to any binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeepBindingReference {
    Class(KeepClassBindingReference),
    Member(KeepMemberBindingReference),
}

impl KeepBindingReference {
    /// The reference kind follows the kind of the bound item.
    pub fn for_item(symbol: KeepBindingSymbol, item: &KeepItemPattern) -> Self {
        match item {
            KeepItemPattern::Class(_) => {
                KeepBindingReference::Class(KeepClassBindingReference::new(symbol))
            }
            KeepItemPattern::Member(_) => {
                KeepBindingReference::Member(KeepMemberBindingReference::new(symbol))
            }
        }
    }

    pub fn symbol(&self) -> &KeepBindingSymbol {
        match self {
            KeepBindingReference::Class(reference) => reference.symbol(),
            KeepBindingReference::Member(reference) => reference.symbol(),
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, KeepBindingReference::Class(_))
    }

    pub fn is_member(&self) -> bool {
        matches!(self, KeepBindingReference::Member(_))
    }

    pub fn as_class(&self) -> Option<&KeepClassBindingReference> {
        match self {
            KeepBindingReference::Class(reference) => Some(reference),
            KeepBindingReference::Member(_) => None,
        }
    }

    pub fn as_member(&self) -> Option<&KeepMemberBindingReference> {
        match self {
            KeepBindingReference::Member(reference) => Some(reference),
            KeepBindingReference::Class(_) => None,
        }
    }

    pub fn to_item_reference(&self) -> KeepItemReference {
        match self {
            KeepBindingReference::Class(reference) => {
                KeepItemReference::Class(reference.to_item_reference())
            }
            KeepBindingReference::Member(reference) => {
                KeepItemReference::Member(reference.to_item_reference())
            }
        }
    }
}

impl From<KeepClassBindingReference> for KeepBindingReference {
    fn from(reference: KeepClassBindingReference) -> Self {
        KeepBindingReference::Class(reference)
    }
}

impl From<KeepMemberBindingReference> for KeepBindingReference {
    fn from(reference: KeepMemberBindingReference) -> Self {
        KeepBindingReference::Member(reference)
    }
}

impl fmt::Display for KeepBindingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepBindingReference::Class(reference) => write!(f, "{}", reference),
            KeepBindingReference::Member(reference) => write!(f, "{}", reference),
        }
    }
}

/// A class item, inline or bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeepClassItemReference {
    Binding(KeepClassBindingReference),
    Pattern(KeepClassItemPattern),
}

impl KeepClassItemReference {
    pub fn is_binding_reference(&self) -> bool {
        matches!(self, KeepClassItemReference::Binding(_))
    }

    pub fn as_binding_reference(&self) -> Option<&KeepClassBindingReference> {
        match self {
            KeepClassItemReference::Binding(reference) => Some(reference),
            KeepClassItemReference::Pattern(_) => None,
        }
    }

    pub fn as_class_item_pattern(&self) -> Option<&KeepClassItemPattern> {
        match self {
            KeepClassItemReference::Pattern(pattern) => Some(pattern),
            KeepClassItemReference::Binding(_) => None,
        }
    }

    /// The class item this reference denotes, following a binding if needed.
    pub fn resolve<'a>(
        &'a self,
        resolver: &'a dyn BindingResolver,
    ) -> Option<&'a KeepClassItemPattern> {
        match self {
            KeepClassItemReference::Pattern(pattern) => Some(pattern),
            KeepClassItemReference::Binding(reference) => {
                resolver.resolve_class(reference.symbol())
            }
        }
    }

    /// Returns true if the denoted item is the "any item". Unresolved bindings are not.
    pub fn is_any(&self, resolver: &dyn BindingResolver) -> bool {
        self.resolve(resolver)
            .is_some_and(KeepClassItemPattern::is_any)
    }

    /// Returns true if the denoted item matches every class, regardless of members.
    pub fn is_any_class(&self, resolver: &dyn BindingResolver) -> bool {
        self.resolve(resolver)
            .is_some_and(KeepClassItemPattern::is_any_class)
    }

    pub fn class_name_pattern<'a>(
        &'a self,
        resolver: &'a dyn BindingResolver,
    ) -> Option<&'a KeepQualifiedClassNamePattern> {
        self.resolve(resolver)
            .map(KeepClassItemPattern::class_name_pattern)
    }

    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        match self {
            KeepClassItemReference::Binding(reference) => {
                vec![KeepBindingReference::Class(reference.clone())]
            }
            KeepClassItemReference::Pattern(_) => Vec::new(),
        }
    }
}

impl From<KeepClassBindingReference> for KeepClassItemReference {
    fn from(reference: KeepClassBindingReference) -> Self {
        KeepClassItemReference::Binding(reference)
    }
}

impl From<KeepClassItemPattern> for KeepClassItemReference {
    fn from(pattern: KeepClassItemPattern) -> Self {
        KeepClassItemReference::Pattern(pattern)
    }
}

impl fmt::Display for KeepClassItemReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepClassItemReference::Binding(reference) => write!(f, "{}", reference),
            KeepClassItemReference::Pattern(pattern) => write!(f, "{}", pattern),
        }
    }
}

/// A member item, inline or bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeepMemberItemReference {
    Binding(KeepMemberBindingReference),
    Pattern(KeepMemberItemPattern),
}

impl KeepMemberItemReference {
    pub fn is_binding_reference(&self) -> bool {
        matches!(self, KeepMemberItemReference::Binding(_))
    }

    pub fn as_binding_reference(&self) -> Option<&KeepMemberBindingReference> {
        match self {
            KeepMemberItemReference::Binding(reference) => Some(reference),
            KeepMemberItemReference::Pattern(_) => None,
        }
    }

    pub fn as_member_item_pattern(&self) -> Option<&KeepMemberItemPattern> {
        match self {
            KeepMemberItemReference::Pattern(pattern) => Some(pattern),
            KeepMemberItemReference::Binding(_) => None,
        }
    }

    /// The member item this reference denotes, following a binding if needed.
    pub fn resolve<'a>(
        &'a self,
        resolver: &'a dyn BindingResolver,
    ) -> Option<&'a KeepMemberItemPattern> {
        match self {
            KeepMemberItemReference::Pattern(pattern) => Some(pattern),
            KeepMemberItemReference::Binding(reference) => {
                resolver.resolve_member(reference.symbol())
            }
        }
    }

    /// The bindings this reference uses directly: its own binding, or the class binding of
    /// its inline pattern.
    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        match self {
            KeepMemberItemReference::Binding(reference) => {
                vec![KeepBindingReference::Member(reference.clone())]
            }
            KeepMemberItemReference::Pattern(pattern) => pattern.binding_references(),
        }
    }
}

impl From<KeepMemberBindingReference> for KeepMemberItemReference {
    fn from(reference: KeepMemberBindingReference) -> Self {
        KeepMemberItemReference::Binding(reference)
    }
}

impl From<KeepMemberItemPattern> for KeepMemberItemReference {
    fn from(pattern: KeepMemberItemPattern) -> Self {
        KeepMemberItemReference::Pattern(pattern)
    }
}

impl fmt::Display for KeepMemberItemReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepMemberItemReference::Binding(reference) => write!(f, "{}", reference),
            KeepMemberItemReference::Pattern(pattern) => write!(f, "{}", pattern),
        }
    }
}

/// Any item, inline or bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeepItemReference {
    Class(KeepClassItemReference),
    Member(KeepMemberItemReference),
}

impl KeepItemReference {
    pub fn from_item_pattern(item: KeepItemPattern) -> Self {
        match item {
            KeepItemPattern::Class(pattern) => {
                KeepItemReference::Class(KeepClassItemReference::Pattern(pattern))
            }
            KeepItemPattern::Member(pattern) => {
                KeepItemReference::Member(KeepMemberItemReference::Pattern(pattern))
            }
        }
    }

    pub fn from_binding_reference(reference: KeepBindingReference) -> Self {
        reference.to_item_reference()
    }

    pub fn is_class_reference(&self) -> bool {
        matches!(self, KeepItemReference::Class(_))
    }

    pub fn is_member_reference(&self) -> bool {
        matches!(self, KeepItemReference::Member(_))
    }

    pub fn as_class_item_reference(&self) -> Option<&KeepClassItemReference> {
        match self {
            KeepItemReference::Class(reference) => Some(reference),
            KeepItemReference::Member(_) => None,
        }
    }

    pub fn as_member_item_reference(&self) -> Option<&KeepMemberItemReference> {
        match self {
            KeepItemReference::Member(reference) => Some(reference),
            KeepItemReference::Class(_) => None,
        }
    }

    pub fn is_binding_reference(&self) -> bool {
        match self {
            KeepItemReference::Class(reference) => reference.is_binding_reference(),
            KeepItemReference::Member(reference) => reference.is_binding_reference(),
        }
    }

    /// The binding this reference names, if it is a named reference.
    pub fn as_binding_reference(&self) -> Option<KeepBindingReference> {
        match self {
            KeepItemReference::Class(reference) => reference
                .as_binding_reference()
                .cloned()
                .map(KeepBindingReference::Class),
            KeepItemReference::Member(reference) => reference
                .as_binding_reference()
                .cloned()
                .map(KeepBindingReference::Member),
        }
    }

    /// The inline item pattern, if this is not a named reference.
    pub fn to_item_pattern(&self) -> Option<KeepItemPattern> {
        match self {
            KeepItemReference::Class(reference) => reference
                .as_class_item_pattern()
                .cloned()
                .map(KeepItemPattern::Class),
            KeepItemReference::Member(reference) => reference
                .as_member_item_pattern()
                .cloned()
                .map(KeepItemPattern::Member),
        }
    }

    /// Returns true if the reference denotes the "any item", following a binding if needed.
    ///
    /// Member items cover no classes and are never "any".
    pub fn is_any(&self, resolver: &dyn BindingResolver) -> bool {
        match self {
            KeepItemReference::Class(reference) => reference.is_any(resolver),
            KeepItemReference::Member(_) => false,
        }
    }

    /// The class name of the class item, or of the member item's holder.
    pub fn class_name_pattern<'a>(
        &'a self,
        resolver: &'a dyn BindingResolver,
    ) -> Option<&'a KeepQualifiedClassNamePattern> {
        match self {
            KeepItemReference::Class(reference) => reference.class_name_pattern(resolver),
            KeepItemReference::Member(reference) => reference
                .resolve(resolver)
                .and_then(|member| member.class_reference().class_name_pattern(resolver)),
        }
    }

    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        match self {
            KeepItemReference::Class(reference) => reference.binding_references(),
            KeepItemReference::Member(reference) => reference.binding_references(),
        }
    }
}

impl From<KeepItemPattern> for KeepItemReference {
    fn from(item: KeepItemPattern) -> Self {
        KeepItemReference::from_item_pattern(item)
    }
}

impl From<KeepClassItemPattern> for KeepItemReference {
    fn from(pattern: KeepClassItemPattern) -> Self {
        KeepItemReference::Class(KeepClassItemReference::Pattern(pattern))
    }
}

impl From<KeepMemberItemPattern> for KeepItemReference {
    fn from(pattern: KeepMemberItemPattern) -> Self {
        KeepItemReference::Member(KeepMemberItemReference::Pattern(pattern))
    }
}

impl From<KeepClassItemReference> for KeepItemReference {
    fn from(reference: KeepClassItemReference) -> Self {
        KeepItemReference::Class(reference)
    }
}

impl From<KeepMemberItemReference> for KeepItemReference {
    fn from(reference: KeepMemberItemReference) -> Self {
        KeepItemReference::Member(reference)
    }
}

impl From<KeepBindingReference> for KeepItemReference {
    fn from(reference: KeepBindingReference) -> Self {
        reference.to_item_reference()
    }
}

impl fmt::Display for KeepItemReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepItemReference::Class(reference) => write!(f, "{}", reference),
            KeepItemReference::Member(reference) => write!(f, "{}", reference),
        }
    }
}
