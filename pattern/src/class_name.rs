//! Package, unqualified and qualified class-name patterns.

use crate::exact::{ClassSimpleName, PackageName};
use keepanno_core::descriptor;
use keepanno_core::KeepResult;
use std::fmt;

/// Matches the package part of a class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepPackagePattern {
    #[default]
    Any,
    /// The default (unnamed) package.
    Top,
    /// A dotted package name such as `com.example`.
    Exact(PackageName),
}

impl KeepPackagePattern {
    pub fn any() -> Self {
        KeepPackagePattern::Any
    }

    pub fn top() -> Self {
        KeepPackagePattern::Top
    }

    /// An exact package. The empty string denotes the top package.
    pub fn exact(package: impl Into<String>) -> KeepResult<Self> {
        let package = package.into();
        if package.is_empty() {
            return Ok(KeepPackagePattern::Top);
        }
        Ok(KeepPackagePattern::Exact(PackageName::new(package)?))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepPackagePattern::Any)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, KeepPackagePattern::Top)
    }

    /// Returns true for an exact package, including the top package.
    pub fn is_exact(&self) -> bool {
        !self.is_any()
    }

    /// The exact dotted package, `""` for the top package.
    pub fn exact_package_as_string(&self) -> Option<&str> {
        match self {
            KeepPackagePattern::Any => None,
            KeepPackagePattern::Top => Some(""),
            KeepPackagePattern::Exact(package) => Some(package.as_str()),
        }
    }
}

impl fmt::Display for KeepPackagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepPackagePattern::Any => f.write_str("**"),
            KeepPackagePattern::Top => Ok(()),
            KeepPackagePattern::Exact(package) => write!(f, "{}", package),
        }
    }
}

/// Matches the simple name of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepUnqualifiedClassNamePattern {
    #[default]
    Any,
    Exact(ClassSimpleName),
}

impl KeepUnqualifiedClassNamePattern {
    pub fn any() -> Self {
        KeepUnqualifiedClassNamePattern::Any
    }

    pub fn exact(name: impl Into<String>) -> KeepResult<Self> {
        Ok(KeepUnqualifiedClassNamePattern::Exact(ClassSimpleName::new(name)?))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, KeepUnqualifiedClassNamePattern::Any)
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, KeepUnqualifiedClassNamePattern::Exact(_))
    }

    pub fn as_exact(&self) -> Option<&str> {
        match self {
            KeepUnqualifiedClassNamePattern::Any => None,
            KeepUnqualifiedClassNamePattern::Exact(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for KeepUnqualifiedClassNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepUnqualifiedClassNamePattern::Any => f.write_str("*"),
            KeepUnqualifiedClassNamePattern::Exact(name) => write!(f, "{}", name),
        }
    }
}

/// Matches a fully qualified class name as a package pattern and a simple-name pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepQualifiedClassNamePattern {
    package: KeepPackagePattern,
    name: KeepUnqualifiedClassNamePattern,
}

/// Borrowable canonical "any" class name.
pub(crate) static ANY_CLASS_NAME: KeepQualifiedClassNamePattern = KeepQualifiedClassNamePattern::ANY;

impl KeepQualifiedClassNamePattern {
    pub const ANY: KeepQualifiedClassNamePattern = KeepQualifiedClassNamePattern {
        package: KeepPackagePattern::Any,
        name: KeepUnqualifiedClassNamePattern::Any,
    };

    pub fn any() -> Self {
        Self::ANY
    }

    pub fn builder() -> KeepQualifiedClassNamePatternBuilder {
        KeepQualifiedClassNamePatternBuilder::default()
    }

    /// An exact class in an exact package. The empty package is the top package.
    pub fn exact(package: impl Into<String>, name: impl Into<String>) -> KeepResult<Self> {
        Ok(Self {
            package: KeepPackagePattern::exact(package)?,
            name: KeepUnqualifiedClassNamePattern::exact(name)?,
        })
    }

    /// An exact class from a source-level name such as `com.example.Foo`.
    pub fn exact_from_type_name(type_name: &str) -> KeepResult<Self> {
        match type_name.rfind('.') {
            Some(index) => Self::exact(&type_name[..index], &type_name[index + 1..]),
            None => Self::exact("", type_name),
        }
    }

    /// An exact class from a class descriptor such as `Lcom/example/Foo;`.
    pub fn from_descriptor(class_descriptor: &str) -> KeepResult<Self> {
        let (package, name) = descriptor::split_class_descriptor(class_descriptor)?;
        Self::exact(package, name)
    }

    pub fn is_any(&self) -> bool {
        self.package.is_any() && self.name.is_any()
    }

    pub fn is_exact(&self) -> bool {
        self.package.is_exact() && self.name.is_exact()
    }

    pub fn package_pattern(&self) -> &KeepPackagePattern {
        &self.package
    }

    pub fn name_pattern(&self) -> &KeepUnqualifiedClassNamePattern {
        &self.name
    }

    /// The binary name (`com/example/Foo`) of an exact pattern.
    pub fn exact_binary_name(&self) -> Option<String> {
        let package = self.package.exact_package_as_string()?;
        let name = self.name.as_exact()?;
        Some(descriptor::binary_name(package, name))
    }

    /// The class descriptor (`Lcom/example/Foo;`) of an exact pattern.
    pub fn exact_descriptor(&self) -> Option<String> {
        self.exact_binary_name()
            .map(|binary_name| descriptor::binary_name_to_descriptor(&binary_name))
    }
}

impl Default for KeepQualifiedClassNamePattern {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for KeepQualifiedClassNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("*");
        }
        if !self.package.is_top() {
            write!(f, "{}.", self.package)?;
        }
        write!(f, "{}", self.name)
    }
}

/// Builder for a qualified class-name pattern. Unset parts match anything.
#[derive(Debug, Clone, Default)]
pub struct KeepQualifiedClassNamePatternBuilder {
    package: KeepPackagePattern,
    name: KeepUnqualifiedClassNamePattern,
}

impl KeepQualifiedClassNamePatternBuilder {
    pub fn set_package_pattern(mut self, package: KeepPackagePattern) -> Self {
        self.package = package;
        self
    }

    pub fn set_name_pattern(mut self, name: KeepUnqualifiedClassNamePattern) -> Self {
        self.name = name;
        self
    }

    pub fn build(self) -> KeepQualifiedClassNamePattern {
        KeepQualifiedClassNamePattern {
            package: self.package,
            name: self.name,
        }
    }
}
