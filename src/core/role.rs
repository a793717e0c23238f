//! Morpheme roles and per-role slot maps

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical role of a morpheme fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Prefix,
    Root,
    Suffix,
}

impl Role {
    /// All roles in slot order
    pub const ALL: [Self; 3] = [Self::Prefix, Self::Root, Self::Suffix];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Root => "root",
            Self::Suffix => "suffix",
        }
    }

    /// Capitalized label used in slot headings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prefix => "Prefix",
            Self::Root => "Root",
            Self::Suffix => "Suffix",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" | "p" => Ok(Self::Prefix),
            "root" | "r" | "base" => Ok(Self::Root),
            "suffix" | "s" => Ok(Self::Suffix),
            other => Err(format!("Unknown morpheme role: {other}")),
        }
    }
}

/// One value per role
///
/// Used for placed slots, gold answers and per-slot correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMap<T> {
    pub prefix: T,
    pub root: T,
    pub suffix: T,
}

impl<T> RoleMap<T> {
    #[must_use]
    pub const fn new(prefix: T, root: T, suffix: T) -> Self {
        Self {
            prefix,
            root,
            suffix,
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, role: Role) -> &T {
        match role {
            Role::Prefix => &self.prefix,
            Role::Root => &self.root,
            Role::Suffix => &self.suffix,
        }
    }

    #[inline]
    pub const fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Prefix => &mut self.prefix,
            Role::Root => &mut self.root,
            Role::Suffix => &mut self.suffix,
        }
    }

    /// Iterate `(role, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Build a map by evaluating `f` for every role
    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self {
            prefix: f(Role::Prefix),
            root: f(Role::Root),
            suffix: f(Role::Suffix),
        }
    }
}
