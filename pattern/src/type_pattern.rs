//! Type patterns for field types, return types and parameter lists.

use crate::exact::TypeDescriptor;
use keepanno_core::descriptor;
use keepanno_core::KeepResult;
use std::fmt;

/// Matches a type given as an internal-format descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepTypePattern {
    #[default]
    Any,
    Descriptor(TypeDescriptor),
}

impl KeepTypePattern {
    pub fn any() -> Self {
        KeepTypePattern::Any
    }

    /// A type from a descriptor such as `I`, `Ljava/lang/String;` or `[J`.
    pub fn from_descriptor(type_descriptor: impl Into<String>) -> KeepResult<Self> {
        Ok(KeepTypePattern::Descriptor(TypeDescriptor::new(type_descriptor)?))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepTypePattern::Any)
    }

    pub fn descriptor(&self) -> Option<&str> {
        match self {
            KeepTypePattern::Any => None,
            KeepTypePattern::Descriptor(type_descriptor) => Some(type_descriptor.as_str()),
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.descriptor().is_some_and(descriptor::is_primitive_descriptor)
    }

    pub fn is_array(&self) -> bool {
        self.descriptor().is_some_and(descriptor::is_array_descriptor)
    }

    pub fn is_class(&self) -> bool {
        self.descriptor().is_some_and(descriptor::is_class_descriptor)
    }
}

fn write_type_name(f: &mut fmt::Formatter<'_>, type_descriptor: &TypeDescriptor) -> fmt::Result {
    match descriptor::java_type_name(type_descriptor.as_str()) {
        Ok(name) => f.write_str(&name),
        Err(_) => write!(f, "{}", type_descriptor),
    }
}

impl fmt::Display for KeepTypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepTypePattern::Any => f.write_str("***"),
            KeepTypePattern::Descriptor(type_descriptor) => write_type_name(f, type_descriptor),
        }
    }
}

/// Matches a method return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepMethodReturnTypePattern {
    /// Any return type, including void.
    #[default]
    Any,
    Void,
    Type(TypeDescriptor),
}

impl KeepMethodReturnTypePattern {
    pub fn any() -> Self {
        KeepMethodReturnTypePattern::Any
    }

    pub fn void_type() -> Self {
        KeepMethodReturnTypePattern::Void
    }

    pub fn from_type(type_pattern: KeepTypePattern) -> Self {
        match type_pattern {
            KeepTypePattern::Any => KeepMethodReturnTypePattern::Any,
            KeepTypePattern::Descriptor(type_descriptor) => {
                KeepMethodReturnTypePattern::Type(type_descriptor)
            }
        }
    }

    /// A return type from a descriptor, `V` denoting void.
    pub fn from_descriptor(type_descriptor: &str) -> KeepResult<Self> {
        if type_descriptor == "V" {
            return Ok(KeepMethodReturnTypePattern::Void);
        }
        Ok(KeepMethodReturnTypePattern::Type(TypeDescriptor::new(type_descriptor)?))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepMethodReturnTypePattern::Any)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, KeepMethodReturnTypePattern::Void)
    }

    /// The non-void return type as a type pattern.
    pub fn as_type(&self) -> Option<KeepTypePattern> {
        match self {
            KeepMethodReturnTypePattern::Type(type_descriptor) => {
                Some(KeepTypePattern::Descriptor(type_descriptor.clone()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for KeepMethodReturnTypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepMethodReturnTypePattern::Any => f.write_str("***"),
            KeepMethodReturnTypePattern::Void => f.write_str("void"),
            KeepMethodReturnTypePattern::Type(type_descriptor) => {
                write_type_name(f, type_descriptor)
            }
        }
    }
}

/// Matches a method parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepMethodParametersPattern {
    /// Any number of parameters of any type.
    #[default]
    Any,
    /// Exactly these parameters, in order.
    List(Vec<KeepTypePattern>),
}

impl KeepMethodParametersPattern {
    pub fn any() -> Self {
        KeepMethodParametersPattern::Any
    }

    /// The empty parameter list.
    pub fn none() -> Self {
        KeepMethodParametersPattern::List(Vec::new())
    }

    pub fn builder() -> KeepMethodParametersPatternBuilder {
        KeepMethodParametersPatternBuilder::default()
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepMethodParametersPattern::Any)
    }

    pub fn as_list(&self) -> Option<&[KeepTypePattern]> {
        match self {
            KeepMethodParametersPattern::Any => None,
            KeepMethodParametersPattern::List(types) => Some(types),
        }
    }
}

impl fmt::Display for KeepMethodParametersPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepMethodParametersPattern::Any => f.write_str("(...)"),
            KeepMethodParametersPattern::List(types) => {
                let names: Vec<String> = types.iter().map(|t| t.to_string()).collect();
                write!(f, "({})", names.join(", "))
            }
        }
    }
}

/// Builder for an exact parameter list.
#[derive(Debug, Clone, Default)]
pub struct KeepMethodParametersPatternBuilder {
    types: Vec<KeepTypePattern>,
}

impl KeepMethodParametersPatternBuilder {
    pub fn add_type_pattern(mut self, type_pattern: KeepTypePattern) -> Self {
        self.types.push(type_pattern);
        self
    }

    pub fn build(self) -> KeepMethodParametersPattern {
        KeepMethodParametersPattern::List(self.types)
    }
}
