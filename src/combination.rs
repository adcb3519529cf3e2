use itertools::Itertools;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// Separator between elements in a dedup key
const KEY_SEPARATOR: &str = "-";

/// An ascending sequence of distinct items drawn from `{1..n}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    items: Vec<usize>,
}

impl Combination {
    /// Build a combination from arbitrary items, sorting them and dropping repeats.
    pub fn from_items<I: IntoIterator<Item = usize>>(items: I) -> Self {
        Combination {
            items: items.into_iter().sorted_unstable().dedup().collect(),
        }
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Canonical identity of the combination, e.g. `"1-3-4"`
    pub fn key(&self) -> String {
        self.items.iter().join(KEY_SEPARATOR)
    }

    /// Union of two combinations
    pub fn merge(&self, other: &Combination) -> Combination {
        Combination::from_items(self.items.iter().chain(other.items.iter()).copied())
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.iter().join(","))
    }
}

/// Distinct combinations indexed by their dedup key.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationSet {
    entries: HashMap<String, Combination>,
}

impl CombinationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the combination's key, replacing an equal entry
    pub fn insert(&mut self, combination: Combination) {
        self.entries.insert(combination.key(), combination);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Combination> {
        self.entries.get(key)
    }

    pub fn contains(&self, combination: &Combination) -> bool {
        self.entries.contains_key(&combination.key())
    }

    pub fn iter(&self) -> hash_map::Values<'_, String, Combination> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keep only combinations with exactly `size` items
    pub fn retain_size(&mut self, size: usize) {
        self.entries.retain(|_, combination| combination.len() == size);
    }

    /// Combinations in lexicographic order of their items
    pub fn to_sorted_vec(&self) -> Vec<Combination> {
        self.entries.values().cloned().sorted().collect()
    }
}

impl FromIterator<Combination> for CombinationSet {
    fn from_iter<I: IntoIterator<Item = Combination>>(iter: I) -> Self {
        let mut set = CombinationSet::new();
        for combination in iter {
            set.insert(combination);
        }
        set
    }
}

impl IntoIterator for CombinationSet {
    type Item = Combination;
    type IntoIter = hash_map::IntoValues<String, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a CombinationSet {
    type Item = &'a Combination;
    type IntoIter = hash_map::Values<'a, String, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
