//! Shorthand constructors for common patterns and declarations.

use keepanno_bindings::KeepBindings;
use keepanno_core::KeepResult;
use keepanno_declaration::{
    KeepCondition, KeepConsequences, KeepEdge, KeepOptions, KeepPreconditions, KeepTarget,
};
use keepanno_pattern::{
    KeepClassItemPattern, KeepFieldNamePattern, KeepFieldPattern, KeepItemReference,
    KeepMemberItemPattern, KeepMemberPattern, KeepMethodNamePattern, KeepMethodPattern,
    KeepQualifiedClassNamePattern,
};

/// A class item for exactly `package.name`, without members.
pub fn class_named(package: &str, name: &str) -> KeepResult<KeepClassItemPattern> {
    Ok(KeepClassItemPattern::builder()
        .set_class_name_pattern(KeepQualifiedClassNamePattern::exact(package, name)?)
        .build())
}

/// A field pattern matching fields named `name` with any access and type.
pub fn field_named(name: &str) -> KeepResult<KeepFieldPattern> {
    KeepFieldPattern::builder()
        .set_name_pattern(KeepFieldNamePattern::exact(name)?)
        .build()
}

/// A method pattern matching methods named `name` with any access and signature.
pub fn method_named(name: &str) -> KeepResult<KeepMethodPattern> {
    KeepMethodPattern::builder()
        .set_name_pattern(KeepMethodNamePattern::exact(name)?)
        .build()
}

/// A member item on an inline class pattern.
pub fn member_of(
    class: KeepClassItemPattern,
    member: impl Into<KeepMemberPattern>,
) -> KeepMemberItemPattern {
    KeepMemberItemPattern::builder()
        .set_class_pattern(class)
        .set_member_pattern(member.into())
        .build()
}

/// Preconditions requiring every given item.
pub fn when<I>(items: I) -> KeepResult<KeepPreconditions>
where
    I: IntoIterator,
    I::Item: Into<KeepItemReference>,
{
    items
        .into_iter()
        .try_fold(KeepPreconditions::builder(), |builder, item| -> KeepResult<_> {
            let condition = KeepCondition::builder()
                .set_item_reference(item.into())
                .build()?;
            Ok(builder.add_condition(condition))
        })
        .map(|builder| builder.build())
}

/// Consequences keeping every given item with the same options.
pub fn keep_with<I>(options: KeepOptions, items: I) -> KeepResult<KeepConsequences>
where
    I: IntoIterator,
    I::Item: Into<KeepItemReference>,
{
    items
        .into_iter()
        .try_fold(KeepConsequences::builder(), |builder, item| -> KeepResult<_> {
            let target = KeepTarget::builder()
                .set_item_reference(item.into())
                .set_options(options)
                .build()?;
            Ok(builder.add_target(target))
        })?
        .build()
}

/// Consequences keeping every given item entirely.
pub fn keep<I>(items: I) -> KeepResult<KeepConsequences>
where
    I: IntoIterator,
    I::Item: Into<KeepItemReference>,
{
    keep_with(KeepOptions::keep_all(), items)
}

/// An edge over a binding table.
pub fn edge(
    bindings: KeepBindings,
    preconditions: KeepPreconditions,
    consequences: KeepConsequences,
) -> KeepResult<KeepEdge> {
    KeepEdge::builder()
        .set_bindings(bindings)
        .set_preconditions(preconditions)
        .set_consequences(consequences)
        .build()
}
