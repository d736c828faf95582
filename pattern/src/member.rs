//! Field, method and general member patterns.

use crate::access::{KeepFieldAccessPattern, KeepMemberAccessPattern, KeepMethodAccessPattern};
use crate::exact::{FieldName, MethodName};
use crate::type_pattern::{KeepMethodParametersPattern, KeepMethodReturnTypePattern, KeepTypePattern};
use keepanno_core::{KeepEdgeError, KeepResult};
use std::fmt;

/// Matches a field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepFieldNamePattern {
    #[default]
    Any,
    Exact(FieldName),
}

impl KeepFieldNamePattern {
    pub fn any() -> Self {
        KeepFieldNamePattern::Any
    }

    pub fn exact(name: impl Into<String>) -> KeepResult<Self> {
        Ok(KeepFieldNamePattern::Exact(FieldName::new(name)?))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepFieldNamePattern::Any)
    }

    pub fn as_exact(&self) -> Option<&str> {
        match self {
            KeepFieldNamePattern::Any => None,
            KeepFieldNamePattern::Exact(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for KeepFieldNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_exact().unwrap_or("*"))
    }
}

/// Matches a method name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepMethodNamePattern {
    #[default]
    Any,
    Exact(MethodName),
}

impl KeepMethodNamePattern {
    pub fn any() -> Self {
        KeepMethodNamePattern::Any
    }

    /// An exact method name. `<init>` and `<clinit>` are accepted.
    pub fn exact(name: impl Into<String>) -> KeepResult<Self> {
        Ok(KeepMethodNamePattern::Exact(MethodName::new(name)?))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepMethodNamePattern::Any)
    }

    pub fn as_exact(&self) -> Option<&str> {
        match self {
            KeepMethodNamePattern::Any => None,
            KeepMethodNamePattern::Exact(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for KeepMethodNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_exact().unwrap_or("*"))
    }
}

/// Matches fields by access, name and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepFieldPattern {
    access: KeepFieldAccessPattern,
    name: KeepFieldNamePattern,
    type_pattern: KeepTypePattern,
}

impl KeepFieldPattern {
    pub const ANY: KeepFieldPattern = KeepFieldPattern {
        access: KeepFieldAccessPattern::ANY,
        name: KeepFieldNamePattern::Any,
        type_pattern: KeepTypePattern::Any,
    };

    pub fn any_field() -> Self {
        Self::ANY
    }

    pub fn builder() -> KeepFieldPatternBuilder {
        KeepFieldPatternBuilder::default()
    }

    pub fn is_any_field(&self) -> bool {
        self.access.is_any() && self.name.is_any() && self.type_pattern.is_any()
    }

    pub fn access_pattern(&self) -> &KeepFieldAccessPattern {
        &self.access
    }

    pub fn name_pattern(&self) -> &KeepFieldNamePattern {
        &self.name
    }

    pub fn type_pattern(&self) -> &KeepTypePattern {
        &self.type_pattern
    }
}

impl fmt::Display for KeepFieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any_field() {
            return f.write_str("<fields>");
        }
        if !self.access.is_any() {
            write!(f, "{} ", self.access)?;
        }
        write!(f, "{} {}", self.type_pattern, self.name)
    }
}

/// Builder for a field pattern. A name pattern must be given.
#[derive(Debug, Clone, Default)]
pub struct KeepFieldPatternBuilder {
    access: KeepFieldAccessPattern,
    name: Option<KeepFieldNamePattern>,
    type_pattern: KeepTypePattern,
}

impl KeepFieldPatternBuilder {
    pub fn set_access_pattern(mut self, access: KeepFieldAccessPattern) -> Self {
        self.access = access;
        self
    }

    pub fn set_name_pattern(mut self, name: KeepFieldNamePattern) -> Self {
        self.name = Some(name);
        self
    }

    pub fn set_type_pattern(mut self, type_pattern: KeepTypePattern) -> Self {
        self.type_pattern = type_pattern;
        self
    }

    pub fn build(self) -> KeepResult<KeepFieldPattern> {
        let name = self
            .name
            .ok_or_else(|| KeepEdgeError::missing_name_pattern("field"))?;
        Ok(KeepFieldPattern {
            access: self.access,
            name,
            type_pattern: self.type_pattern,
        })
    }
}

/// Matches methods by access, name, return type and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepMethodPattern {
    access: KeepMethodAccessPattern,
    name: KeepMethodNamePattern,
    return_type: KeepMethodReturnTypePattern,
    parameters: KeepMethodParametersPattern,
}

impl KeepMethodPattern {
    pub const ANY: KeepMethodPattern = KeepMethodPattern {
        access: KeepMethodAccessPattern::ANY,
        name: KeepMethodNamePattern::Any,
        return_type: KeepMethodReturnTypePattern::Any,
        parameters: KeepMethodParametersPattern::Any,
    };

    pub fn any_method() -> Self {
        Self::ANY
    }

    pub fn builder() -> KeepMethodPatternBuilder {
        KeepMethodPatternBuilder::default()
    }

    pub fn is_any_method(&self) -> bool {
        self.access.is_any()
            && self.name.is_any()
            && self.return_type.is_any()
            && self.parameters.is_any()
    }

    pub fn access_pattern(&self) -> &KeepMethodAccessPattern {
        &self.access
    }

    pub fn name_pattern(&self) -> &KeepMethodNamePattern {
        &self.name
    }

    pub fn return_type_pattern(&self) -> &KeepMethodReturnTypePattern {
        &self.return_type
    }

    pub fn parameters_pattern(&self) -> &KeepMethodParametersPattern {
        &self.parameters
    }
}

impl fmt::Display for KeepMethodPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any_method() {
            return f.write_str("<methods>");
        }
        if !self.access.is_any() {
            write!(f, "{} ", self.access)?;
        }
        write!(f, "{} {}{}", self.return_type, self.name, self.parameters)
    }
}

/// Builder for a method pattern. A name pattern must be given.
#[derive(Debug, Clone, Default)]
pub struct KeepMethodPatternBuilder {
    access: KeepMethodAccessPattern,
    name: Option<KeepMethodNamePattern>,
    return_type: KeepMethodReturnTypePattern,
    parameters: KeepMethodParametersPattern,
}

impl KeepMethodPatternBuilder {
    pub fn set_access_pattern(mut self, access: KeepMethodAccessPattern) -> Self {
        self.access = access;
        self
    }

    pub fn set_name_pattern(mut self, name: KeepMethodNamePattern) -> Self {
        self.name = Some(name);
        self
    }

    pub fn set_return_type_pattern(mut self, return_type: KeepMethodReturnTypePattern) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn set_parameters_pattern(mut self, parameters: KeepMethodParametersPattern) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn build(self) -> KeepResult<KeepMethodPattern> {
        let name = self
            .name
            .ok_or_else(|| KeepEdgeError::missing_name_pattern("method"))?;
        Ok(KeepMethodPattern {
            access: self.access,
            name,
            return_type: self.return_type,
            parameters: self.parameters,
        })
    }
}

/// A single member pattern: any member kind by access, a field, or a method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeepMemberPattern {
    /// Fields and methods alike, constrained only by access.
    General(KeepMemberAccessPattern),
    Field(KeepFieldPattern),
    Method(KeepMethodPattern),
}

impl KeepMemberPattern {
    pub const ALL: KeepMemberPattern = KeepMemberPattern::General(KeepMemberAccessPattern::ANY);

    /// Every member of every kind.
    pub fn all_members() -> Self {
        Self::ALL
    }

    pub fn from_access(access: KeepMemberAccessPattern) -> Self {
        KeepMemberPattern::General(access)
    }

    pub fn is_all_members(&self) -> bool {
        matches!(self, KeepMemberPattern::General(access) if access.is_any())
    }

    pub fn is_general_member(&self) -> bool {
        matches!(self, KeepMemberPattern::General(_))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, KeepMemberPattern::Field(_))
    }

    pub fn is_method(&self) -> bool {
        matches!(self, KeepMemberPattern::Method(_))
    }

    pub fn is_any_field(&self) -> bool {
        matches!(self, KeepMemberPattern::Field(field) if field.is_any_field())
    }

    pub fn is_any_method(&self) -> bool {
        matches!(self, KeepMemberPattern::Method(method) if method.is_any_method())
    }

    pub fn as_field(&self) -> Option<&KeepFieldPattern> {
        match self {
            KeepMemberPattern::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&KeepMethodPattern> {
        match self {
            KeepMemberPattern::Method(method) => Some(method),
            _ => None,
        }
    }

    /// The access constraints common to all member kinds.
    pub fn member_access(&self) -> &KeepMemberAccessPattern {
        match self {
            KeepMemberPattern::General(access) => access,
            KeepMemberPattern::Field(field) => field.access_pattern().member_access(),
            KeepMemberPattern::Method(method) => method.access_pattern().member_access(),
        }
    }
}

impl From<KeepFieldPattern> for KeepMemberPattern {
    fn from(field: KeepFieldPattern) -> Self {
        KeepMemberPattern::Field(field)
    }
}

impl From<KeepMethodPattern> for KeepMemberPattern {
    fn from(method: KeepMethodPattern) -> Self {
        KeepMemberPattern::Method(method)
    }
}

impl fmt::Display for KeepMemberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepMemberPattern::General(access) if access.is_any() => f.write_str("*"),
            KeepMemberPattern::General(access) => write!(f, "{} *", access),
            KeepMemberPattern::Field(field) => write!(f, "{}", field),
            KeepMemberPattern::Method(method) => write!(f, "{}", method),
        }
    }
}
