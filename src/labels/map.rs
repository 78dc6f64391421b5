//! The identifier-to-name mapping itself.

use std::collections::HashMap;

/// An insertion-ordered mapping from class identifier to class name.
///
/// Identifiers are kept in their textual form (`"0"`, `"17"`), exactly as
/// they appear in the labels resource. Inserting an identifier that is
/// already present replaces its name but keeps its original position, so
/// iteration order always follows first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LabelMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a placeholder mapping with names `class1` to `classN` for
    /// identifiers `0` to `N - 1`.
    ///
    /// Intended as a starting point for a hand-edited labels resource when
    /// the real class names are not known yet.
    pub fn generic(count: usize) -> Self {
        (0..count)
            .map(|id| (id.to_string(), format!("class{}", id + 1)))
            .collect()
    }

    /// Inserts or replaces the name for `id`, returning the previous name.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        let id = id.into();
        let name = name.into();

        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, name)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
                None
            }
        }
    }

    /// Returns the name registered for `id`, if any.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Number of registered identifiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(identifier, name)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LabelMap::new();
        for (id, name) in iter {
            map.insert(id, name);
        }
        map
    }
}
