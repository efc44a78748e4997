//! State identifiers.
//!
//! States are identified case-insensitively. The machine stores every state
//! it visits in a canonical lowercase form; the declared casing is only kept
//! in the configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical form of a state or event name.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive name comparison.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || normalize(a) == normalize(b)
}

/// Normalized (lowercase) name of a configured state.
///
/// Construct with [`StateName::new`], which lowercases its input, so two
/// names that differ only in case compare equal.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateName;
///
/// let name = StateName::new("Sleeping");
/// assert_eq!(name, "sleeping");
/// assert_eq!(name, StateName::new("SLEEPING"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StateName(String);

impl StateName {
    /// Create a normalized state name.
    pub fn new(name: &str) -> Self {
        Self(normalize(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StateName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<StateName> for String {
    fn from(name: StateName) -> Self {
        name.0
    }
}

impl AsRef<str> for StateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StateName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
