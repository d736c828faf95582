//! Keep options: which compiler behaviors a kept item still permits.

use bitflags::bitflags;
use keepanno_core::{KeepEdgeError, KeepResult};
use std::fmt;

/// A compiler behavior that a keep target may still permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepOption {
    Shrinking,
    Optimizing,
    Obfuscating,
    AccessModification,
}

impl KeepOption {
    pub const ALL: [KeepOption; 4] = [
        KeepOption::Shrinking,
        KeepOption::Optimizing,
        KeepOption::Obfuscating,
        KeepOption::AccessModification,
    ];

    pub fn as_set(self) -> KeepOptionSet {
        match self {
            KeepOption::Shrinking => KeepOptionSet::SHRINKING,
            KeepOption::Optimizing => KeepOptionSet::OPTIMIZING,
            KeepOption::Obfuscating => KeepOptionSet::OBFUSCATING,
            KeepOption::AccessModification => KeepOptionSet::ACCESS_MODIFICATION,
        }
    }

    /// The keep-rule modifier suffix, as in `allowobfuscation`.
    pub fn keyword(self) -> &'static str {
        match self {
            KeepOption::Shrinking => "shrinking",
            KeepOption::Optimizing => "optimization",
            KeepOption::Obfuscating => "obfuscation",
            KeepOption::AccessModification => "accessmodification",
        }
    }
}

impl fmt::Display for KeepOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

bitflags! {
    /// A set of keep options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeepOptionSet: u8 {
        const SHRINKING = 1 << 0;
        const OPTIMIZING = 1 << 1;
        const OBFUSCATING = 1 << 2;
        const ACCESS_MODIFICATION = 1 << 3;
    }
}

impl KeepOptionSet {
    pub fn from_options(options: &[KeepOption]) -> Self {
        options
            .iter()
            .fold(Self::empty(), |set, option| set | option.as_set())
    }

    pub fn contains_option(self, option: KeepOption) -> bool {
        self.contains(option.as_set())
    }

    /// The options in the set, in declaration order.
    pub fn options(self) -> impl Iterator<Item = KeepOption> {
        KeepOption::ALL
            .into_iter()
            .filter(move |option| self.contains_option(*option))
    }
}

/// The options a keep target permits.
///
/// Stored as the permitted set. Keep-all, permitting nothing, is the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepOptions {
    allowed: KeepOptionSet,
}

impl KeepOptions {
    pub const KEEP_ALL: KeepOptions = KeepOptions {
        allowed: KeepOptionSet::empty(),
    };

    pub fn keep_all() -> Self {
        Self::KEEP_ALL
    }

    /// Options permitting exactly the given behaviors.
    pub fn allow(options: &[KeepOption]) -> KeepResult<Self> {
        Self::allow_builder().add_all(options).build()
    }

    /// Options permitting everything except the given behaviors.
    pub fn disallow(options: &[KeepOption]) -> KeepResult<Self> {
        Self::disallow_builder().add_all(options).build()
    }

    pub fn allow_builder() -> KeepOptionsBuilder {
        KeepOptionsBuilder::new(OptionsMode::Allow)
    }

    pub fn disallow_builder() -> KeepOptionsBuilder {
        KeepOptionsBuilder::new(OptionsMode::Disallow)
    }

    pub fn is_keep_all(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn is_allowed(&self, option: KeepOption) -> bool {
        self.allowed.contains_option(option)
    }

    pub fn allowed(&self) -> KeepOptionSet {
        self.allowed
    }
}

impl Default for KeepOptions {
    fn default() -> Self {
        Self::KEEP_ALL
    }
}

impl fmt::Display for KeepOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_keep_all() {
            return f.write_str("keepall");
        }
        for (i, option) in self.allowed.options().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "allow{}", option)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionsMode {
    Allow,
    Disallow,
}

/// Builder for keep options, seeded with either allow or disallow semantics.
#[derive(Debug, Clone)]
pub struct KeepOptionsBuilder {
    mode: OptionsMode,
    options: KeepOptionSet,
}

impl KeepOptionsBuilder {
    fn new(mode: OptionsMode) -> Self {
        Self {
            mode,
            options: KeepOptionSet::empty(),
        }
    }

    pub fn add(mut self, option: KeepOption) -> Self {
        self.options |= option.as_set();
        self
    }

    pub fn add_all(mut self, options: &[KeepOption]) -> Self {
        self.options |= KeepOptionSet::from_options(options);
        self
    }

    pub fn build(self) -> KeepResult<KeepOptions> {
        let allowed = match self.mode {
            OptionsMode::Allow => {
                if self.options.is_all() {
                    return Err(KeepEdgeError::AllowAllOptions);
                }
                self.options
            }
            OptionsMode::Disallow => {
                if self.options.is_empty() {
                    return Err(KeepEdgeError::DisallowNoOptions);
                }
                self.options.complement()
            }
        };
        Ok(KeepOptions { allowed })
    }
}
