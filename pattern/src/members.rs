//! The members aggregate of a class item: none, all, or an explicit set.

use crate::member::{KeepFieldPattern, KeepMemberPattern, KeepMethodPattern};
use std::fmt;
use tracing::trace;

/// A non-empty, normalized list of member patterns. Only the members builder creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberPatternList(Vec<KeepMemberPattern>);

impl MemberPatternList {
    pub fn as_slice(&self) -> &[KeepMemberPattern] {
        &self.0
    }
}

/// The members a class item pattern covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeepMembersPattern {
    /// No members: the item is about the class alone.
    #[default]
    None,
    /// Every member of the class.
    All,
    /// Exactly the listed member patterns.
    Some(MemberPatternList),
}

impl KeepMembersPattern {
    pub fn none() -> Self {
        KeepMembersPattern::None
    }

    pub fn all() -> Self {
        KeepMembersPattern::All
    }

    pub fn builder() -> KeepMembersPatternBuilder {
        KeepMembersPatternBuilder::default()
    }

    pub fn is_none(&self) -> bool {
        matches!(self, KeepMembersPattern::None)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, KeepMembersPattern::All)
    }

    /// The explicit member patterns. Empty for `None` and `All`.
    pub fn patterns(&self) -> &[KeepMemberPattern] {
        match self {
            KeepMembersPattern::Some(patterns) => patterns.as_slice(),
            _ => &[],
        }
    }

    pub fn for_each_field(&self, mut f: impl FnMut(&KeepFieldPattern)) {
        self.patterns()
            .iter()
            .filter_map(KeepMemberPattern::as_field)
            .for_each(|field| f(field));
    }

    pub fn for_each_method(&self, mut f: impl FnMut(&KeepMethodPattern)) {
        self.patterns()
            .iter()
            .filter_map(KeepMemberPattern::as_method)
            .for_each(|method| f(method));
    }
}

impl fmt::Display for KeepMembersPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepMembersPattern::None => f.write_str("{}"),
            KeepMembersPattern::All => f.write_str("{ *; }"),
            KeepMembersPattern::Some(patterns) => {
                f.write_str("{")?;
                for pattern in patterns.as_slice() {
                    write!(f, " {};", pattern)?;
                }
                f.write_str(" }")
            }
        }
    }
}

/// Builder for a members aggregate.
///
/// An any-field (any-method) pattern replaces every field (method) pattern added before it
/// and absorbs those added after it.
#[derive(Debug, Clone, Default)]
pub struct KeepMembersPatternBuilder {
    all: bool,
    any_field: bool,
    any_method: bool,
    patterns: Vec<KeepMemberPattern>,
}

impl KeepMembersPatternBuilder {
    /// Cover every member.
    pub fn set_all(mut self) -> Self {
        self.all = true;
        self.patterns.clear();
        self
    }

    pub fn add_field(self, field: KeepFieldPattern) -> Self {
        self.add_member(KeepMemberPattern::Field(field))
    }

    pub fn add_method(self, method: KeepMethodPattern) -> Self {
        self.add_member(KeepMemberPattern::Method(method))
    }

    pub fn add_member(mut self, member: KeepMemberPattern) -> Self {
        if self.all {
            trace!(%member, "member pattern subsumed by all members");
            return self;
        }
        if member.is_all_members() {
            return self.set_all();
        }
        if member.is_any_field() {
            if !self.any_field {
                self.patterns.retain(|pattern| !pattern.is_field());
                self.any_field = true;
                self.patterns.push(member);
            }
            return self;
        }
        if member.is_any_method() {
            if !self.any_method {
                self.patterns.retain(|pattern| !pattern.is_method());
                self.any_method = true;
                self.patterns.push(member);
            }
            return self;
        }
        if (member.is_field() && self.any_field) || (member.is_method() && self.any_method) {
            trace!(%member, "member pattern subsumed by any-member pattern");
            return self;
        }
        if !self.patterns.contains(&member) {
            self.patterns.push(member);
        }
        self
    }

    pub fn build(self) -> KeepMembersPattern {
        if self.all || (self.any_field && self.any_method) {
            return KeepMembersPattern::All;
        }
        if self.patterns.is_empty() {
            return KeepMembersPattern::None;
        }
        KeepMembersPattern::Some(MemberPatternList(self.patterns))
    }
}
