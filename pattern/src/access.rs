//! Access patterns: visibility sets and three-valued modifier matchers.
//!
//! Field and method access builders share `AccessPatternBuilderBase` through the
//! `AccessPatternBuilder` trait, which supplies the visibility and common modifier setters.

use keepanno_core::{KeepEdgeError, KeepResult};
use std::fmt;

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessVisibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl AccessVisibility {
    /// All visibilities, in declaration order.
    pub const ALL: [AccessVisibility; 4] = [
        AccessVisibility::Public,
        AccessVisibility::Protected,
        AccessVisibility::PackagePrivate,
        AccessVisibility::Private,
    ];

    /// The singleton set holding this visibility.
    pub fn as_set(self) -> AccessVisibilitySet {
        match self {
            AccessVisibility::Public => AccessVisibilitySet::PUBLIC,
            AccessVisibility::Protected => AccessVisibilitySet::PROTECTED,
            AccessVisibility::PackagePrivate => AccessVisibilitySet::PACKAGE_PRIVATE,
            AccessVisibility::Private => AccessVisibilitySet::PRIVATE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessVisibility::Public => "public",
            AccessVisibility::Protected => "protected",
            AccessVisibility::PackagePrivate => "package-private",
            AccessVisibility::Private => "private",
        }
    }
}

impl fmt::Display for AccessVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// A set of visibilities. The full set matches any visibility.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessVisibilitySet: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PACKAGE_PRIVATE = 1 << 2;
        const PRIVATE = 1 << 3;
    }
}

impl AccessVisibilitySet {
    /// Returns true if the set holds the visibility.
    pub fn contains_visibility(self, visibility: AccessVisibility) -> bool {
        self.contains(visibility.as_set())
    }

    /// Iterate the visibilities in the set.
    pub fn visibilities(self) -> impl Iterator<Item = AccessVisibility> {
        AccessVisibility::ALL
            .into_iter()
            .filter(move |visibility| self.contains_visibility(*visibility))
    }
}

impl From<AccessVisibility> for AccessVisibilitySet {
    fn from(visibility: AccessVisibility) -> Self {
        visibility.as_set()
    }
}

/// A modifier constraint: don't care, must be present, or must be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModifierPattern {
    #[default]
    Any,
    OnlyPositive,
    OnlyNegative,
}

impl ModifierPattern {
    /// Pattern requiring the modifier to be present (`true`) or absent (`false`).
    pub fn from_allow(allow: bool) -> Self {
        if allow {
            ModifierPattern::OnlyPositive
        } else {
            ModifierPattern::OnlyNegative
        }
    }

    pub fn is_any(self) -> bool {
        self == ModifierPattern::Any
    }

    pub fn is_only_positive(self) -> bool {
        self == ModifierPattern::OnlyPositive
    }

    pub fn is_only_negative(self) -> bool {
        self == ModifierPattern::OnlyNegative
    }

    /// Check whether a member with the modifier set (or not) satisfies the pattern.
    pub fn matches(self, has_modifier: bool) -> bool {
        match self {
            ModifierPattern::Any => true,
            ModifierPattern::OnlyPositive => has_modifier,
            ModifierPattern::OnlyNegative => !has_modifier,
        }
    }
}

/// State shared by every access pattern builder.
#[derive(Debug, Clone)]
pub struct AccessPatternBuilderBase {
    allowed: AccessVisibilitySet,
    disallowed: AccessVisibilitySet,
    static_pattern: ModifierPattern,
    final_pattern: ModifierPattern,
    synthetic_pattern: ModifierPattern,
}

impl Default for AccessPatternBuilderBase {
    fn default() -> Self {
        Self {
            allowed: AccessVisibilitySet::empty(),
            disallowed: AccessVisibilitySet::empty(),
            static_pattern: ModifierPattern::Any,
            final_pattern: ModifierPattern::Any,
            synthetic_pattern: ModifierPattern::Any,
        }
    }
}

impl AccessPatternBuilderBase {
    fn set_visibility(&mut self, visibility: AccessVisibility, allow: bool) {
        if allow {
            self.allowed |= visibility.as_set();
        } else {
            self.disallowed |= visibility.as_set();
        }
    }

    /// Compute the allowed visibilities.
    ///
    /// With no explicit constraints every visibility is allowed. Otherwise the explicitly
    /// allowed set (all, if none were allowed) minus the explicitly disallowed set.
    fn build_visibility(&self) -> KeepResult<AccessVisibilitySet> {
        if self.allowed.is_empty() && self.disallowed.is_empty() {
            return Ok(AccessVisibilitySet::all());
        }
        let start = if self.allowed.is_empty() {
            AccessVisibilitySet::all()
        } else {
            self.allowed
        };
        let visibility = start.difference(self.disallowed);
        if visibility.is_empty() {
            return Err(KeepEdgeError::EmptyVisibility);
        }
        Ok(visibility)
    }

    fn build_member_access(&self) -> KeepResult<KeepMemberAccessPattern> {
        Ok(KeepMemberAccessPattern {
            visibility: self.build_visibility()?,
            static_pattern: self.static_pattern,
            final_pattern: self.final_pattern,
            synthetic_pattern: self.synthetic_pattern,
        })
    }
}

/// Setters common to member, field and method access builders.
pub trait AccessPatternBuilder: Sized {
    fn base_mut(&mut self) -> &mut AccessPatternBuilderBase;

    /// Allow (`true`) or disallow (`false`) a visibility.
    fn set_access_visibility(mut self, visibility: AccessVisibility, allow: bool) -> Self {
        self.base_mut().set_visibility(visibility, allow);
        self
    }

    fn set_static(mut self, allow: bool) -> Self {
        self.base_mut().static_pattern = ModifierPattern::from_allow(allow);
        self
    }

    fn set_final(mut self, allow: bool) -> Self {
        self.base_mut().final_pattern = ModifierPattern::from_allow(allow);
        self
    }

    fn set_synthetic(mut self, allow: bool) -> Self {
        self.base_mut().synthetic_pattern = ModifierPattern::from_allow(allow);
        self
    }
}

/// Access constraints applicable to any member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepMemberAccessPattern {
    visibility: AccessVisibilitySet,
    static_pattern: ModifierPattern,
    final_pattern: ModifierPattern,
    synthetic_pattern: ModifierPattern,
}

impl KeepMemberAccessPattern {
    pub const ANY: KeepMemberAccessPattern = KeepMemberAccessPattern {
        visibility: AccessVisibilitySet::all(),
        static_pattern: ModifierPattern::Any,
        final_pattern: ModifierPattern::Any,
        synthetic_pattern: ModifierPattern::Any,
    };

    pub fn any() -> Self {
        Self::ANY
    }

    pub fn builder() -> KeepMemberAccessPatternBuilder {
        KeepMemberAccessPatternBuilder::default()
    }

    pub fn is_any(&self) -> bool {
        self.is_any_visibility()
            && self.static_pattern.is_any()
            && self.final_pattern.is_any()
            && self.synthetic_pattern.is_any()
    }

    pub fn is_any_visibility(&self) -> bool {
        self.visibility.is_all()
    }

    pub fn allowed_visibilities(&self) -> AccessVisibilitySet {
        self.visibility
    }

    pub fn is_visibility_allowed(&self, visibility: AccessVisibility) -> bool {
        self.visibility.contains_visibility(visibility)
    }

    pub fn static_pattern(&self) -> ModifierPattern {
        self.static_pattern
    }

    pub fn final_pattern(&self) -> ModifierPattern {
        self.final_pattern
    }

    pub fn synthetic_pattern(&self) -> ModifierPattern {
        self.synthetic_pattern
    }

    fn write_tokens(&self, tokens: &mut Vec<String>) {
        if !self.is_any_visibility() {
            let names: Vec<&str> = self.visibility.visibilities().map(|v| v.as_str()).collect();
            tokens.push(names.join("|"));
        }
        push_modifier(tokens, "static", self.static_pattern);
        push_modifier(tokens, "final", self.final_pattern);
        push_modifier(tokens, "synthetic", self.synthetic_pattern);
    }
}

impl Default for KeepMemberAccessPattern {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for KeepMemberAccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();
        self.write_tokens(&mut tokens);
        write_tokens(f, &tokens)
    }
}

/// Builder for a general member access pattern.
#[derive(Debug, Clone, Default)]
pub struct KeepMemberAccessPatternBuilder {
    base: AccessPatternBuilderBase,
}

impl AccessPatternBuilder for KeepMemberAccessPatternBuilder {
    fn base_mut(&mut self) -> &mut AccessPatternBuilderBase {
        &mut self.base
    }
}

impl KeepMemberAccessPatternBuilder {
    pub fn build(self) -> KeepResult<KeepMemberAccessPattern> {
        self.base.build_member_access()
    }
}

/// Access constraints for fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepFieldAccessPattern {
    member: KeepMemberAccessPattern,
    volatile_pattern: ModifierPattern,
    transient_pattern: ModifierPattern,
}

impl KeepFieldAccessPattern {
    pub const ANY: KeepFieldAccessPattern = KeepFieldAccessPattern {
        member: KeepMemberAccessPattern::ANY,
        volatile_pattern: ModifierPattern::Any,
        transient_pattern: ModifierPattern::Any,
    };

    pub fn any() -> Self {
        Self::ANY
    }

    pub fn builder() -> KeepFieldAccessPatternBuilder {
        KeepFieldAccessPatternBuilder::default()
    }

    pub fn is_any(&self) -> bool {
        self.member.is_any() && self.volatile_pattern.is_any() && self.transient_pattern.is_any()
    }

    /// The constraints shared with every member kind.
    pub fn member_access(&self) -> &KeepMemberAccessPattern {
        &self.member
    }

    pub fn volatile_pattern(&self) -> ModifierPattern {
        self.volatile_pattern
    }

    pub fn transient_pattern(&self) -> ModifierPattern {
        self.transient_pattern
    }
}

impl Default for KeepFieldAccessPattern {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for KeepFieldAccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();
        self.member.write_tokens(&mut tokens);
        push_modifier(&mut tokens, "volatile", self.volatile_pattern);
        push_modifier(&mut tokens, "transient", self.transient_pattern);
        write_tokens(f, &tokens)
    }
}

/// Builder for a field access pattern.
#[derive(Debug, Clone, Default)]
pub struct KeepFieldAccessPatternBuilder {
    base: AccessPatternBuilderBase,
    volatile_pattern: ModifierPattern,
    transient_pattern: ModifierPattern,
}

impl AccessPatternBuilder for KeepFieldAccessPatternBuilder {
    fn base_mut(&mut self) -> &mut AccessPatternBuilderBase {
        &mut self.base
    }
}

impl KeepFieldAccessPatternBuilder {
    pub fn set_volatile(mut self, allow: bool) -> Self {
        self.volatile_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn set_transient(mut self, allow: bool) -> Self {
        self.transient_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn build(self) -> KeepResult<KeepFieldAccessPattern> {
        Ok(KeepFieldAccessPattern {
            member: self.base.build_member_access()?,
            volatile_pattern: self.volatile_pattern,
            transient_pattern: self.transient_pattern,
        })
    }
}

/// Access constraints for methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepMethodAccessPattern {
    member: KeepMemberAccessPattern,
    synchronized_pattern: ModifierPattern,
    bridge_pattern: ModifierPattern,
    native_pattern: ModifierPattern,
    abstract_pattern: ModifierPattern,
    strict_fp_pattern: ModifierPattern,
}

impl KeepMethodAccessPattern {
    pub const ANY: KeepMethodAccessPattern = KeepMethodAccessPattern {
        member: KeepMemberAccessPattern::ANY,
        synchronized_pattern: ModifierPattern::Any,
        bridge_pattern: ModifierPattern::Any,
        native_pattern: ModifierPattern::Any,
        abstract_pattern: ModifierPattern::Any,
        strict_fp_pattern: ModifierPattern::Any,
    };

    pub fn any() -> Self {
        Self::ANY
    }

    pub fn builder() -> KeepMethodAccessPatternBuilder {
        KeepMethodAccessPatternBuilder::default()
    }

    pub fn is_any(&self) -> bool {
        self.member.is_any()
            && self.synchronized_pattern.is_any()
            && self.bridge_pattern.is_any()
            && self.native_pattern.is_any()
            && self.abstract_pattern.is_any()
            && self.strict_fp_pattern.is_any()
    }

    /// The constraints shared with every member kind.
    pub fn member_access(&self) -> &KeepMemberAccessPattern {
        &self.member
    }

    pub fn synchronized_pattern(&self) -> ModifierPattern {
        self.synchronized_pattern
    }

    pub fn bridge_pattern(&self) -> ModifierPattern {
        self.bridge_pattern
    }

    pub fn native_pattern(&self) -> ModifierPattern {
        self.native_pattern
    }

    pub fn abstract_pattern(&self) -> ModifierPattern {
        self.abstract_pattern
    }

    pub fn strict_fp_pattern(&self) -> ModifierPattern {
        self.strict_fp_pattern
    }
}

impl Default for KeepMethodAccessPattern {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for KeepMethodAccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();
        self.member.write_tokens(&mut tokens);
        push_modifier(&mut tokens, "synchronized", self.synchronized_pattern);
        push_modifier(&mut tokens, "bridge", self.bridge_pattern);
        push_modifier(&mut tokens, "native", self.native_pattern);
        push_modifier(&mut tokens, "abstract", self.abstract_pattern);
        push_modifier(&mut tokens, "strictfp", self.strict_fp_pattern);
        write_tokens(f, &tokens)
    }
}

/// Builder for a method access pattern.
#[derive(Debug, Clone, Default)]
pub struct KeepMethodAccessPatternBuilder {
    base: AccessPatternBuilderBase,
    synchronized_pattern: ModifierPattern,
    bridge_pattern: ModifierPattern,
    native_pattern: ModifierPattern,
    abstract_pattern: ModifierPattern,
    strict_fp_pattern: ModifierPattern,
}

impl AccessPatternBuilder for KeepMethodAccessPatternBuilder {
    fn base_mut(&mut self) -> &mut AccessPatternBuilderBase {
        &mut self.base
    }
}

impl KeepMethodAccessPatternBuilder {
    pub fn set_synchronized(mut self, allow: bool) -> Self {
        self.synchronized_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn set_bridge(mut self, allow: bool) -> Self {
        self.bridge_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn set_native(mut self, allow: bool) -> Self {
        self.native_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn set_abstract(mut self, allow: bool) -> Self {
        self.abstract_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn set_strict_fp(mut self, allow: bool) -> Self {
        self.strict_fp_pattern = ModifierPattern::from_allow(allow);
        self
    }

    pub fn build(self) -> KeepResult<KeepMethodAccessPattern> {
        Ok(KeepMethodAccessPattern {
            member: self.base.build_member_access()?,
            synchronized_pattern: self.synchronized_pattern,
            bridge_pattern: self.bridge_pattern,
            native_pattern: self.native_pattern,
            abstract_pattern: self.abstract_pattern,
            strict_fp_pattern: self.strict_fp_pattern,
        })
    }
}

fn push_modifier(tokens: &mut Vec<String>, name: &str, pattern: ModifierPattern) {
    match pattern {
        ModifierPattern::Any => {}
        ModifierPattern::OnlyPositive => tokens.push(name.to_string()),
        ModifierPattern::OnlyNegative => tokens.push(format!("!{}", name)),
    }
}

fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[String]) -> fmt::Result {
    if tokens.is_empty() {
        f.write_str("*")
    } else {
        f.write_str(&tokens.join(" "))
    }
}
