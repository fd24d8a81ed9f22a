//! Secret name and value collections.
//!
//! Both keep the order in which the service listed the secrets, so every
//! output format is stable across runs.

use zeroize::Zeroizing;

/// Map a secret name to its output key: uppercase, `-` replaced with `_`.
pub fn normalize_key(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}

/// Ordered set of short secret names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretNames {
    names: Vec<String>,
}

impl SecretNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name, returning `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SecretNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.insert(name);
        }
        names
    }
}

/// Ordered mapping from short secret name to its decoded value.
///
/// Values are wiped from memory when the map is dropped.
#[derive(Clone, Default)]
pub struct SecretValues {
    entries: Vec<(String, Zeroizing<String>)>,
}

impl SecretValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing (in place) any existing value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: String) {
        let name = name.into();
        let value = Zeroizing::new(value);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get a value by short name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Entries as `(name, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Entries with their output keys, see [`normalize_key`].
    pub fn records(&self) -> impl Iterator<Item = (String, &str)> {
        self.iter().map(|(n, v)| (normalize_key(n), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Never print secret values.
impl std::fmt::Debug for SecretValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, _)| (n, "<redacted>")))
            .finish()
    }
}
