//! Validated names and descriptors carried by exact patterns.
//!
//! Each type can only be obtained through its checking constructor, so an exact pattern
//! never holds a malformed identifier.

use keepanno_core::descriptor;
use keepanno_core::KeepResult;
use std::fmt;

macro_rules! validated_name {
    ($(#[$meta:meta])* $name:ident, $validate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> KeepResult<Self> {
                let value = value.into();
                $validate(&value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_name!(
    /// A non-empty dotted package name such as `com.example`.
    PackageName,
    descriptor::validate_package_name
);

validated_name!(
    /// The simple name of a class.
    ClassSimpleName,
    descriptor::validate_simple_name
);

validated_name!(FieldName, descriptor::validate_simple_name);

validated_name!(
    /// A method name; `<init>` and `<clinit>` included.
    MethodName,
    descriptor::validate_method_name
);

validated_name!(
    /// A well-formed type descriptor such as `I` or `[Ljava/lang/String;`.
    TypeDescriptor,
    descriptor::validate_type_descriptor
);
