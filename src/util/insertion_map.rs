/// A minimal associative container that preserves the order in which keys
/// were first inserted.
///
/// Backed by a `Vec` with linear key lookup, which is plenty for the small
/// key sets the reports accumulate over (a handful of rocket ids). Iteration
/// yields entries in first-insertion order, so a stable sort over the
/// entries keeps that order among equal values.
#[derive(Debug)]
pub struct InsertionMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialEq, V: Default> InsertionMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns a mutable reference to the value stored under `key`.
    /// On first use of a key, a default-initialized slot is appended.
    pub fn entry_or_default(&mut self, key: K) -> &mut V {
        let idx = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key, V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Iterates over the entries in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Consumes the map and returns its entries in first-insertion order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
