use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The active level of each environmental factor at calculation time,
/// e.g. `{ sun: "high", wind: "low" }`.
///
/// Keys are open-ended. Iteration is in lexicographic factor order, which
/// fixes the order in which adjustments are folded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentFactors(BTreeMap<String, String>);

impl EnvironmentFactors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, factor: impl Into<String>, level: impl Into<String>) -> Self {
        self.set(factor, level);
        self
    }

    /// Set the active level of `factor`, returning the previous level.
    pub fn set(&mut self, factor: impl Into<String>, level: impl Into<String>) -> Option<String> {
        self.0.insert(factor.into(), level.into())
    }

    pub fn level(&self, factor: &str) -> Option<&str> {
        self.0.get(factor).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, l)| (f.as_str(), l.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentFactors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
