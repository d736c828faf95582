//! Type descriptor and identifier helpers.
//!
//! Descriptors are treated as opaque strings beyond their delimiters: a primitive letter,
//! `L<binary-name>;` for classes, and a `[` prefix for arrays.

use crate::{KeepEdgeError, KeepResult};

const PRIMITIVE_DESCRIPTORS: &str = "ZBSCIJFD";
const INVALID_NAME_CHARS: &[char] = &['.', '/', ';', '[', '<', '>'];

/// Check that a type descriptor is well formed.
pub fn validate_type_descriptor(descriptor: &str) -> KeepResult<()> {
    let element = descriptor.trim_start_matches('[');
    if element.is_empty() {
        let reason = if descriptor.is_empty() {
            "empty descriptor"
        } else {
            "array without element type"
        };
        return Err(KeepEdgeError::invalid_descriptor(descriptor, reason));
    }
    if element.len() == 1 {
        return if PRIMITIVE_DESCRIPTORS.contains(element) {
            Ok(())
        } else {
            Err(KeepEdgeError::invalid_descriptor(
                descriptor,
                format!("unknown primitive '{}'", element),
            ))
        };
    }
    validate_class_descriptor(descriptor, element)
}

fn validate_class_descriptor(descriptor: &str, element: &str) -> KeepResult<()> {
    let body = element
        .strip_prefix('L')
        .and_then(|rest| rest.strip_suffix(';'))
        .ok_or_else(|| {
            KeepEdgeError::invalid_descriptor(descriptor, "expected 'L<binary-name>;'")
        })?;
    if body.is_empty() {
        return Err(KeepEdgeError::invalid_descriptor(
            descriptor,
            "empty class name",
        ));
    }
    if body.contains([';', '[', '.']) || body.split('/').any(str::is_empty) {
        return Err(KeepEdgeError::invalid_descriptor(
            descriptor,
            "malformed class name",
        ));
    }
    Ok(())
}

/// Returns true if the descriptor denotes a primitive type.
pub fn is_primitive_descriptor(descriptor: &str) -> bool {
    descriptor.len() == 1 && PRIMITIVE_DESCRIPTORS.contains(descriptor)
}

/// Returns true if the descriptor denotes an array type.
pub fn is_array_descriptor(descriptor: &str) -> bool {
    descriptor.starts_with('[')
}

/// Returns true if the descriptor denotes a class type.
pub fn is_class_descriptor(descriptor: &str) -> bool {
    descriptor.starts_with('L')
}

/// Check a dotted package name such as `com.example`.
pub fn validate_package_name(package: &str) -> KeepResult<()> {
    if package.split('.').any(str::is_empty) {
        return Err(KeepEdgeError::invalid_name(package, "empty package segment"));
    }
    if package.contains(['/', ';', '[']) {
        return Err(KeepEdgeError::invalid_name(
            package,
            "package names are dotted",
        ));
    }
    Ok(())
}

/// Check an unqualified class name or a member name.
pub fn validate_simple_name(name: &str) -> KeepResult<()> {
    if name.is_empty() {
        return Err(KeepEdgeError::invalid_name(name, "empty name"));
    }
    if name.contains(INVALID_NAME_CHARS) {
        return Err(KeepEdgeError::invalid_name(
            name,
            "unqualified names cannot contain '.', '/', ';', '[', '<' or '>'",
        ));
    }
    Ok(())
}

/// Check a method name. `<init>` and `<clinit>` are the only names allowed to use brackets.
pub fn validate_method_name(name: &str) -> KeepResult<()> {
    if name == "<init>" || name == "<clinit>" {
        return Ok(());
    }
    validate_simple_name(name)
}

/// Join a dotted package and a simple name into a binary name (`com/example/Foo`).
///
/// An empty package is the top-level package and gets no separator.
pub fn binary_name(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_string()
    } else {
        format!("{}/{}", package.replace('.', "/"), simple_name)
    }
}

/// Wrap a binary name in class descriptor delimiters.
pub fn binary_name_to_descriptor(binary_name: &str) -> String {
    format!("L{};", binary_name)
}

/// Split a class descriptor into its dotted package and simple name.
pub fn split_class_descriptor(descriptor: &str) -> KeepResult<(String, String)> {
    validate_type_descriptor(descriptor)?;
    let body = descriptor
        .strip_prefix('L')
        .and_then(|rest| rest.strip_suffix(';'))
        .ok_or_else(|| KeepEdgeError::invalid_descriptor(descriptor, "not a class descriptor"))?;
    Ok(match body.rfind('/') {
        Some(index) => (body[..index].replace('/', "."), body[index + 1..].to_string()),
        None => (String::new(), body.to_string()),
    })
}

/// Convert a descriptor to its source-level type name, e.g. `[I` to `int[]`.
pub fn java_type_name(descriptor: &str) -> KeepResult<String> {
    validate_type_descriptor(descriptor)?;
    let element = descriptor.trim_start_matches('[');
    let dimensions = descriptor.len() - element.len();
    let mut name = match element {
        "Z" => "boolean".to_string(),
        "B" => "byte".to_string(),
        "S" => "short".to_string(),
        "C" => "char".to_string(),
        "I" => "int".to_string(),
        "J" => "long".to_string(),
        "F" => "float".to_string(),
        "D" => "double".to_string(),
        _ => element[1..element.len() - 1].replace('/', "."),
    };
    for _ in 0..dimensions {
        name.push_str("[]");
    }
    Ok(name)
}

/// Check that a method descriptor `(<parameters>)<return>` is well formed.
pub fn validate_method_descriptor(descriptor: &str) -> KeepResult<()> {
    let invalid = |reason: &str| KeepEdgeError::invalid_descriptor(descriptor, reason);
    let rest = descriptor
        .strip_prefix('(')
        .ok_or_else(|| invalid("missing '('"))?;
    let (mut parameters, return_type) = rest
        .split_once(')')
        .ok_or_else(|| invalid("missing ')'"))?;
    while !parameters.is_empty() {
        let length = next_descriptor_length(parameters)
            .ok_or_else(|| invalid("malformed parameter list"))?;
        validate_type_descriptor(&parameters[..length])?;
        parameters = &parameters[length..];
    }
    if return_type == "V" {
        return Ok(());
    }
    validate_type_descriptor(return_type)
}

/// Byte length of the first descriptor in a concatenated list.
fn next_descriptor_length(descriptors: &str) -> Option<usize> {
    let element = descriptors.trim_start_matches('[');
    let dimensions = descriptors.len() - element.len();
    let first = element.chars().next()?;
    let length = if first == 'L' {
        element.find(';')? + 1
    } else {
        first.len_utf8()
    };
    Some(dimensions + length)
}
