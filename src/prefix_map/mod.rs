mod anchored;
mod compile;
mod endpoint;
mod error;

pub use self::anchored::AnchoredRegex;
pub use self::compile::{CompileOptions, DuplicatePolicy};
pub use self::endpoint::Endpoint;
pub use self::error::CompileError;

use crate::strmap::StrMap;

use serde::{Deserialize, Serialize};

/// One level of a compiled route trie.
///
/// Resolution at a level tries, in order: an exact match in `literals`, the
/// child in `prefixes` selected by the first `prefix_length` bytes, and then
/// each entry of `regexps` in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixMap<R> {
    literals: StrMap<R>,
    prefixes: StrMap<PrefixMap<R>>,
    prefix_length: usize,
    regexps: Vec<(AnchoredRegex, Endpoint<R>)>,
}

impl<R> Default for PrefixMap<R> {
    fn default() -> Self {
        Self {
            literals: StrMap::new(),
            prefixes: StrMap::new(),
            prefix_length: 0,
            regexps: Vec::new(),
        }
    }
}

impl<R> PrefixMap<R> {
    /// Patterns fully consumed at this level.
    pub fn literals(&self) -> &StrMap<R> {
        &self.literals
    }

    pub fn prefixes(&self) -> &StrMap<PrefixMap<R>> {
        &self.prefixes
    }

    /// Byte length shared by every key of [`prefixes`](Self::prefixes); zero when there are none.
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn regexps(&self) -> &[(AnchoredRegex, Endpoint<R>)] {
        &self.regexps
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.prefixes.is_empty() && self.regexps.is_empty()
    }

    /// Number of responders reachable from this level.
    pub fn len(&self) -> usize {
        let prefixed: usize = self.prefixes.iter().map(|(_, m)| m.len()).sum();
        let regexps: usize = self
            .regexps
            .iter()
            .map(|(_, e)| match e {
                Endpoint::Responder(_) => 1,
                Endpoint::Map(m) => m.len(),
            })
            .sum();
        self.literals.len() + prefixed + regexps
    }
}
