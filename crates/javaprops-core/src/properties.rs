use std::collections::{BTreeMap, BTreeSet};

pub trait PropertyLookup {
    fn lookup(&self, key: &str) -> Option<&str>;

    fn lookup_or<'s>(&'s self, key: &str, fallback: &'s str) -> &'s str {
        self.lookup(key).unwrap_or(fallback)
    }
}

/// A property list: string keys mapped to string values, with an optional
/// read-only defaults list consulted when a key is missing locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties<'a> {
    entries: BTreeMap<String, String>,
    defaults: Option<&'a Properties<'a>>,
}

impl<'a> Properties<'a> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            defaults: None,
        }
    }

    pub fn with_defaults(defaults: &'a Properties<'a>) -> Self {
        Self {
            entries: BTreeMap::new(),
            defaults: Some(defaults),
        }
    }

    pub fn defaults(&self) -> Option<&'a Properties<'a>> {
        self.defaults
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current = Some(self);
        while let Some(props) = current {
            if let Some(value) = props.entries.get(key) {
                return Some(value.as_str());
            }
            current = props.defaults;
        }
        None
    }

    pub fn get_or<'s>(&'s self, key: &str, default: &'s str) -> &'s str {
        self.get(key).unwrap_or(default)
    }

    /// Sets a local entry and returns the previous local value. The defaults
    /// list is never consulted or modified.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Local entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Every key visible through `get`, local and inherited.
    pub fn keys(&self) -> BTreeSet<&str> {
        let mut keys = BTreeSet::new();
        let mut current = Some(self);
        while let Some(props) = current {
            keys.extend(props.entries.keys().map(String::as_str));
            current = props.defaults;
        }
        keys
    }
}

impl PropertyLookup for Properties<'_> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl PropertyLookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Properties<'_>
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K, V> Extend<(K, V)> for Properties<'_>
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
