use std::collections::HashMap;

/// Bidirectional vertex name <-> dense index mapping.
///
/// `index_of` and `name_of` are exact inverses over `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Registers `name` and returns its index. Existing names keep their index.
    pub fn insert(&mut self, name: &str) -> (usize, bool) {
        if let Some(&i) = self.index.get(name) {
            return (i, false);
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        (i, true)
    }

    /// Drops the vertex at `index` and renumbers the rest densely, preserving order.
    pub fn remove_at(&mut self, index: usize) -> String {
        let removed = self.names.remove(index);
        self.index.clear();
        for (i, name) in self.names.iter().enumerate() {
            self.index.insert(name.clone(), i);
        }
        removed
    }
}
