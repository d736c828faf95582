//! Supertype constraints on classes: extends and instance-of patterns.

use crate::class_name::{KeepQualifiedClassNamePattern, ANY_CLASS_NAME};
use keepanno_core::{KeepEdgeError, KeepResult};
use std::fmt;

/// A class-name pattern that matches fewer than all classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupertypeName(KeepQualifiedClassNamePattern);

impl SupertypeName {
    fn new(class_name: KeepQualifiedClassNamePattern) -> Option<Self> {
        (!class_name.is_any()).then_some(SupertypeName(class_name))
    }

    pub fn class_name_pattern(&self) -> &KeepQualifiedClassNamePattern {
        &self.0
    }
}

impl fmt::Display for SupertypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Matches classes that are proper subtypes of a class-name pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepExtendsPattern {
    #[default]
    Any,
    ClassName(SupertypeName),
}

impl KeepExtendsPattern {
    pub fn any() -> Self {
        KeepExtendsPattern::Any
    }

    /// An extends pattern over a class name. "Any class" collapses to `Any`.
    pub fn from_class_name(class_name: KeepQualifiedClassNamePattern) -> Self {
        match SupertypeName::new(class_name) {
            Some(name) => KeepExtendsPattern::ClassName(name),
            None => KeepExtendsPattern::Any,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepExtendsPattern::Any)
    }

    pub fn class_name_pattern(&self) -> &KeepQualifiedClassNamePattern {
        match self {
            KeepExtendsPattern::Any => &ANY_CLASS_NAME,
            KeepExtendsPattern::ClassName(name) => name.class_name_pattern(),
        }
    }

    /// The equivalent instance-of pattern: an exclusive one over the same class name.
    pub fn to_instance_of(&self) -> KeepInstanceOfPattern {
        match self {
            KeepExtendsPattern::Any => KeepInstanceOfPattern::Any,
            KeepExtendsPattern::ClassName(name) => KeepInstanceOfPattern::Named(InstanceOfNamed {
                name: name.clone(),
                inclusive: false,
            }),
        }
    }
}

impl fmt::Display for KeepExtendsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name_pattern())
    }
}

/// The named form of an instance-of pattern. Only the builder creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceOfNamed {
    name: SupertypeName,
    inclusive: bool,
}

impl InstanceOfNamed {
    pub fn class_name_pattern(&self) -> &KeepQualifiedClassNamePattern {
        self.name.class_name_pattern()
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

/// Matches classes by their position in the type hierarchy.
///
/// An inclusive pattern matches the named classes and their subtypes; an exclusive one only
/// the subtypes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepInstanceOfPattern {
    #[default]
    Any,
    Named(InstanceOfNamed),
}

impl KeepInstanceOfPattern {
    pub fn any() -> Self {
        KeepInstanceOfPattern::Any
    }

    pub fn builder() -> KeepInstanceOfPatternBuilder {
        KeepInstanceOfPatternBuilder::default()
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepInstanceOfPattern::Any)
    }

    pub fn is_inclusive(&self) -> bool {
        match self {
            KeepInstanceOfPattern::Any => true,
            KeepInstanceOfPattern::Named(named) => named.inclusive,
        }
    }

    pub fn class_name_pattern(&self) -> &KeepQualifiedClassNamePattern {
        match self {
            KeepInstanceOfPattern::Any => &ANY_CLASS_NAME,
            KeepInstanceOfPattern::Named(named) => named.class_name_pattern(),
        }
    }

    /// The extends form of this pattern, if it has one.
    ///
    /// Only "any" and exclusive patterns can be expressed as extends patterns.
    pub fn extends_pattern(&self) -> Option<KeepExtendsPattern> {
        match self {
            KeepInstanceOfPattern::Any => Some(KeepExtendsPattern::Any),
            KeepInstanceOfPattern::Named(named) if !named.inclusive => {
                Some(KeepExtendsPattern::ClassName(named.name.clone()))
            }
            KeepInstanceOfPattern::Named(_) => None,
        }
    }
}

impl fmt::Display for KeepInstanceOfPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepInstanceOfPattern::Any => f.write_str("*"),
            KeepInstanceOfPattern::Named(named) if named.inclusive => write!(f, "{}", named.name),
            KeepInstanceOfPattern::Named(named) => write!(f, "{} (exclusive)", named.name),
        }
    }
}

/// Builder for an instance-of pattern. Defaults to inclusive over any class.
#[derive(Debug, Clone)]
pub struct KeepInstanceOfPatternBuilder {
    class_name: KeepQualifiedClassNamePattern,
    inclusive: bool,
}

impl Default for KeepInstanceOfPatternBuilder {
    fn default() -> Self {
        Self {
            class_name: KeepQualifiedClassNamePattern::ANY,
            inclusive: true,
        }
    }
}

impl KeepInstanceOfPatternBuilder {
    pub fn set_class_name_pattern(mut self, class_name: KeepQualifiedClassNamePattern) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn set_inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    pub fn build(self) -> KeepResult<KeepInstanceOfPattern> {
        match SupertypeName::new(self.class_name) {
            Some(name) => Ok(KeepInstanceOfPattern::Named(InstanceOfNamed {
                name,
                inclusive: self.inclusive,
            })),
            None if self.inclusive => Ok(KeepInstanceOfPattern::Any),
            None => Err(KeepEdgeError::ExclusiveInstanceOfAny),
        }
    }
}
