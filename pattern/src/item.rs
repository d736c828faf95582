//! Item patterns: a class (with its members) or a member of a referenced class.

use crate::class_name::KeepQualifiedClassNamePattern;
use crate::instance_of::{KeepExtendsPattern, KeepInstanceOfPattern};
use crate::member::KeepMemberPattern;
use crate::members::KeepMembersPattern;
use crate::reference::{KeepBindingReference, KeepClassItemReference};
use crate::resolve::BindingResolver;
use std::fmt;

/// A pattern over classes, optionally together with some of their members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepClassItemPattern {
    class_name: KeepQualifiedClassNamePattern,
    instance_of: KeepInstanceOfPattern,
    members: KeepMembersPattern,
}

impl KeepClassItemPattern {
    /// The "any item": every class and every member.
    pub const ANY: KeepClassItemPattern = KeepClassItemPattern {
        class_name: KeepQualifiedClassNamePattern::ANY,
        instance_of: KeepInstanceOfPattern::Any,
        members: KeepMembersPattern::All,
    };

    pub fn any() -> Self {
        Self::ANY
    }

    /// Every class, without members.
    pub fn any_class() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> KeepClassItemPatternBuilder {
        KeepClassItemPatternBuilder::default()
    }

    /// Returns true for the "any item": any class with all of its members.
    pub fn is_any(&self) -> bool {
        self.is_any_class() && self.members.is_all()
    }

    /// Returns true if the class part matches every class.
    pub fn is_any_class(&self) -> bool {
        self.class_name.is_any() && self.instance_of.is_any()
    }

    /// Returns true if the pattern is about the class alone.
    pub fn is_class_only(&self) -> bool {
        self.members.is_none()
    }

    pub fn class_name_pattern(&self) -> &KeepQualifiedClassNamePattern {
        &self.class_name
    }

    pub fn instance_of_pattern(&self) -> &KeepInstanceOfPattern {
        &self.instance_of
    }

    /// The supertype constraint as an extends pattern, if it can be expressed as one.
    pub fn extends_pattern(&self) -> Option<KeepExtendsPattern> {
        self.instance_of.extends_pattern()
    }

    pub fn members_pattern(&self) -> &KeepMembersPattern {
        &self.members
    }
}

impl fmt::Display for KeepClassItemPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.class_name)?;
        match &self.instance_of {
            KeepInstanceOfPattern::Any => {}
            KeepInstanceOfPattern::Named(named) if named.is_inclusive() => {
                write!(f, " instanceof {}", named.class_name_pattern())?
            }
            KeepInstanceOfPattern::Named(named) => {
                write!(f, " extends {}", named.class_name_pattern())?
            }
        }
        if !self.members.is_none() {
            write!(f, " {}", self.members)?;
        }
        Ok(())
    }
}

/// Builder for a class item. Defaults to any class without members.
#[derive(Debug, Clone, Default)]
pub struct KeepClassItemPatternBuilder {
    class_name: KeepQualifiedClassNamePattern,
    instance_of: KeepInstanceOfPattern,
    members: KeepMembersPattern,
}

impl KeepClassItemPatternBuilder {
    pub fn set_class_name_pattern(mut self, class_name: KeepQualifiedClassNamePattern) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn set_instance_of_pattern(mut self, instance_of: KeepInstanceOfPattern) -> Self {
        self.instance_of = instance_of;
        self
    }

    /// Constrain to proper subtypes. Replaces any instance-of pattern set before.
    pub fn set_extends_pattern(mut self, extends: KeepExtendsPattern) -> Self {
        self.instance_of = extends.to_instance_of();
        self
    }

    pub fn set_members_pattern(mut self, members: KeepMembersPattern) -> Self {
        self.members = members;
        self
    }

    pub fn build(self) -> KeepClassItemPattern {
        KeepClassItemPattern {
            class_name: self.class_name,
            instance_of: self.instance_of,
            members: self.members,
        }
    }
}

/// A pattern over members of the classes denoted by a class reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepMemberItemPattern {
    class_reference: KeepClassItemReference,
    member: KeepMemberPattern,
}

impl KeepMemberItemPattern {
    pub fn builder() -> KeepMemberItemPatternBuilder {
        KeepMemberItemPatternBuilder::default()
    }

    pub fn class_reference(&self) -> &KeepClassItemReference {
        &self.class_reference
    }

    pub fn member_pattern(&self) -> &KeepMemberPattern {
        &self.member
    }

    /// Returns true if this covers all members of every class.
    pub fn is_any_member(&self, resolver: &dyn BindingResolver) -> bool {
        self.member.is_all_members() && self.class_reference.is_any_class(resolver)
    }

    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        self.class_reference.binding_references()
    }
}

impl fmt::Display for KeepMemberItemPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {}; }}", self.class_reference, self.member)
    }
}

/// Builder for a member item. Defaults to all members of any class.
#[derive(Debug, Clone)]
pub struct KeepMemberItemPatternBuilder {
    class_reference: KeepClassItemReference,
    member: KeepMemberPattern,
}

impl Default for KeepMemberItemPatternBuilder {
    fn default() -> Self {
        Self {
            class_reference: KeepClassItemReference::Pattern(KeepClassItemPattern::any_class()),
            member: KeepMemberPattern::ALL,
        }
    }
}

impl KeepMemberItemPatternBuilder {
    pub fn set_class_reference(mut self, class_reference: KeepClassItemReference) -> Self {
        self.class_reference = class_reference;
        self
    }

    /// Shorthand for an inline class pattern as the holder.
    pub fn set_class_pattern(self, class_pattern: KeepClassItemPattern) -> Self {
        self.set_class_reference(KeepClassItemReference::Pattern(class_pattern))
    }

    pub fn set_member_pattern(mut self, member: KeepMemberPattern) -> Self {
        self.member = member;
        self
    }

    pub fn build(self) -> KeepMemberItemPattern {
        KeepMemberItemPattern {
            class_reference: self.class_reference,
            member: self.member,
        }
    }
}

/// A class item or a member item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeepItemPattern {
    Class(KeepClassItemPattern),
    Member(KeepMemberItemPattern),
}

impl KeepItemPattern {
    /// The "any item".
    pub fn any() -> Self {
        KeepItemPattern::Class(KeepClassItemPattern::ANY)
    }

    /// Returns true for the "any item". Member items are never "any".
    pub fn is_any(&self) -> bool {
        match self {
            KeepItemPattern::Class(pattern) => pattern.is_any(),
            KeepItemPattern::Member(_) => false,
        }
    }

    pub fn is_class_item(&self) -> bool {
        matches!(self, KeepItemPattern::Class(_))
    }

    pub fn is_member_item(&self) -> bool {
        matches!(self, KeepItemPattern::Member(_))
    }

    pub fn as_class_item(&self) -> Option<&KeepClassItemPattern> {
        match self {
            KeepItemPattern::Class(pattern) => Some(pattern),
            KeepItemPattern::Member(_) => None,
        }
    }

    pub fn as_member_item(&self) -> Option<&KeepMemberItemPattern> {
        match self {
            KeepItemPattern::Member(pattern) => Some(pattern),
            KeepItemPattern::Class(_) => None,
        }
    }

    /// The class name of a class item, or of a member item's holder.
    pub fn class_name_pattern<'a>(
        &'a self,
        resolver: &'a dyn BindingResolver,
    ) -> Option<&'a KeepQualifiedClassNamePattern> {
        match self {
            KeepItemPattern::Class(pattern) => Some(pattern.class_name_pattern()),
            KeepItemPattern::Member(pattern) => {
                pattern.class_reference().class_name_pattern(resolver)
            }
        }
    }

    /// The bindings this item refers to directly.
    pub fn binding_references(&self) -> Vec<KeepBindingReference> {
        match self {
            KeepItemPattern::Class(_) => Vec::new(),
            KeepItemPattern::Member(pattern) => pattern.binding_references(),
        }
    }
}

impl From<KeepClassItemPattern> for KeepItemPattern {
    fn from(pattern: KeepClassItemPattern) -> Self {
        KeepItemPattern::Class(pattern)
    }
}

impl From<KeepMemberItemPattern> for KeepItemPattern {
    fn from(pattern: KeepMemberItemPattern) -> Self {
        KeepItemPattern::Member(pattern)
    }
}

impl fmt::Display for KeepItemPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepItemPattern::Class(pattern) => write!(f, "{}", pattern),
            KeepItemPattern::Member(pattern) => write!(f, "{}", pattern),
        }
    }
}
