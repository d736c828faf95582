//! Metadata attached to declarations: a description and the source context.

use keepanno_core::descriptor::{
    validate_method_descriptor, validate_method_name, validate_simple_name,
    validate_type_descriptor,
};
use keepanno_core::{KeepEdgeError, KeepResult};
use std::fmt;

/// The program element a declaration was written on.
///
/// Only the checking constructors create one, so every descriptor it holds is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeepEdgeContext(ContextElement);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ContextElement {
    Class {
        class_descriptor: String,
    },
    Method {
        class_descriptor: String,
        name: String,
        method_descriptor: String,
    },
    Field {
        class_descriptor: String,
        name: String,
        field_descriptor: String,
    },
}

impl KeepEdgeContext {
    pub fn for_class(class_descriptor: impl Into<String>) -> KeepResult<Self> {
        let class_descriptor = class_descriptor.into();
        check_class_descriptor(&class_descriptor)?;
        Ok(KeepEdgeContext(ContextElement::Class { class_descriptor }))
    }

    pub fn for_method(
        class_descriptor: impl Into<String>,
        name: impl Into<String>,
        method_descriptor: impl Into<String>,
    ) -> KeepResult<Self> {
        let class_descriptor = class_descriptor.into();
        let name = name.into();
        let method_descriptor = method_descriptor.into();
        check_class_descriptor(&class_descriptor)?;
        validate_method_name(&name)?;
        validate_method_descriptor(&method_descriptor)?;
        Ok(KeepEdgeContext(ContextElement::Method {
            class_descriptor,
            name,
            method_descriptor,
        }))
    }

    pub fn for_field(
        class_descriptor: impl Into<String>,
        name: impl Into<String>,
        field_descriptor: impl Into<String>,
    ) -> KeepResult<Self> {
        let class_descriptor = class_descriptor.into();
        let name = name.into();
        let field_descriptor = field_descriptor.into();
        check_class_descriptor(&class_descriptor)?;
        validate_simple_name(&name)?;
        validate_type_descriptor(&field_descriptor)?;
        Ok(KeepEdgeContext(ContextElement::Field {
            class_descriptor,
            name,
            field_descriptor,
        }))
    }

    pub fn is_class(&self) -> bool {
        matches!(self.0, ContextElement::Class { .. })
    }

    pub fn is_method(&self) -> bool {
        matches!(self.0, ContextElement::Method { .. })
    }

    pub fn is_field(&self) -> bool {
        matches!(self.0, ContextElement::Field { .. })
    }

    pub fn class_descriptor(&self) -> &str {
        match &self.0 {
            ContextElement::Class { class_descriptor }
            | ContextElement::Method {
                class_descriptor, ..
            }
            | ContextElement::Field {
                class_descriptor, ..
            } => class_descriptor,
        }
    }

    /// The member name of a method or field context.
    pub fn member_name(&self) -> Option<&str> {
        match &self.0 {
            ContextElement::Class { .. } => None,
            ContextElement::Method { name, .. } | ContextElement::Field { name, .. } => Some(name),
        }
    }

    /// The method descriptor or field type descriptor of a member context.
    pub fn member_descriptor(&self) -> Option<&str> {
        match &self.0 {
            ContextElement::Class { .. } => None,
            ContextElement::Method {
                method_descriptor, ..
            } => Some(method_descriptor),
            ContextElement::Field {
                field_descriptor, ..
            } => Some(field_descriptor),
        }
    }

    /// The context as a single descriptor string, e.g. `Lcom/example/Foo;run()V`.
    pub fn descriptor_string(&self) -> String {
        match &self.0 {
            ContextElement::Class { class_descriptor } => class_descriptor.clone(),
            ContextElement::Method {
                class_descriptor,
                name,
                method_descriptor,
            } => format!("{}{}{}", class_descriptor, name, method_descriptor),
            ContextElement::Field {
                class_descriptor,
                name,
                field_descriptor,
            } => format!("{}{}:{}", class_descriptor, name, field_descriptor),
        }
    }
}

fn check_class_descriptor(descriptor: &str) -> KeepResult<()> {
    validate_type_descriptor(descriptor)?;
    if !descriptor.starts_with('L') {
        return Err(KeepEdgeError::invalid_descriptor(
            descriptor,
            "not a class descriptor",
        ));
    }
    Ok(())
}

impl fmt::Display for KeepEdgeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor_string())
    }
}

/// Optional description and context of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeepEdgeMetaInfo {
    description: Option<String>,
    context: Option<KeepEdgeContext>,
}

impl KeepEdgeMetaInfo {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn builder() -> KeepEdgeMetaInfoBuilder {
        KeepEdgeMetaInfoBuilder::default()
    }

    pub fn is_none(&self) -> bool {
        self.description.is_none() && self.context.is_none()
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Option<&KeepEdgeContext> {
        self.context.as_ref()
    }

    pub fn context_descriptor_string(&self) -> Option<String> {
        self.context.as_ref().map(KeepEdgeContext::descriptor_string)
    }
}

/// Comment header lines. Line breaks in the description are escaped.
impl fmt::Display for KeepEdgeMetaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            writeln!(f, "# context: {}", context)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "# description: {}", description.escape_default())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeepEdgeMetaInfoBuilder {
    description: Option<String>,
    context: Option<KeepEdgeContext>,
}

impl KeepEdgeMetaInfoBuilder {
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    pub fn set_context(mut self, context: KeepEdgeContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn build(self) -> KeepEdgeMetaInfo {
        KeepEdgeMetaInfo {
            description: self.description,
            context: self.context,
        }
    }
}
