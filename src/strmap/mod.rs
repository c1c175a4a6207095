use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

/// A map from strings to values, stored as two sorted vectors.
///
/// Lookups are binary searches over the raw key bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrMap<T> {
    keys: Vec<Box<str>>,
    values: Vec<T>,
}

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        match self.find_index(key) {
            Ok(i) => self.values.get(i),
            Err(_) => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_ok()
    }

    /// Inserts `value`, returning the previous value stored under `key`.
    pub fn insert(&mut self, key: &str, value: T) -> Option<T> {
        match self.find_index(key) {
            Ok(i) => Some(std::mem::replace(&mut self.values[i], value)),
            Err(i) => {
                self.keys.insert(i, key.into());
                self.values.insert(i, value);
                None
            }
        }
    }

    /// Iterates in ascending byte order of the keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.keys.iter().map(|k| &**k).zip(self.values.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(|k| &**k)
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        self.keys
            .binary_search_by(|k| k.as_bytes().cmp(key.as_bytes()))
    }
}

impl<T: Serialize> Serialize for StrMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StrMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StrMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for StrMapVisitor<T> {
            type Value = StrMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = StrMap::new();
                while let Some((k, v)) = access.next_entry::<String, T>()? {
                    map.insert(&k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(StrMapVisitor(PhantomData))
    }
}
