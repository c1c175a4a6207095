use std::fmt;

use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A regex fragment compiled to match at the start of the input only.
///
/// Compares, serializes and displays as the fragment text; deserializing
/// recompiles it.
#[derive(Clone)]
pub struct AnchoredRegex {
    fragment: Box<str>,
    regex: Regex,
}

impl AnchoredRegex {
    pub fn new(fragment: impl Into<Box<str>>) -> Result<Self, regex::Error> {
        let fragment = fragment.into();
        let regex = Regex::new(&format!("^(?:{})", fragment))?;
        Ok(Self { fragment, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.fragment
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for AnchoredRegex {
    fn eq(&self, other: &Self) -> bool {
        self.fragment == other.fragment
    }
}

impl Eq for AnchoredRegex {}

impl fmt::Debug for AnchoredRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnchoredRegex").field(&self.fragment).finish()
    }
}

impl fmt::Display for AnchoredRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment)
    }
}

impl Serialize for AnchoredRegex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fragment)
    }
}

impl<'de> Deserialize<'de> for AnchoredRegex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fragment = String::deserialize(deserializer)?;
        Self::new(fragment).map_err(de::Error::custom)
    }
}
