use super::PrefixMap;

use serde::{Deserialize, Serialize};

/// Value of a regex entry: either a final responder, or a sub-trie when the
/// regex is only a shared discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Endpoint<R> {
    Responder(R),
    Map(PrefixMap<R>),
}

impl<R> From<PrefixMap<R>> for Endpoint<R> {
    fn from(x: PrefixMap<R>) -> Self {
        Self::Map(x)
    }
}

impl<R> Endpoint<R> {
    #[inline]
    pub fn is_map(&self) -> bool {
        match self {
            Self::Responder(_) => false,
            Self::Map(_) => true,
        }
    }

    #[inline]
    pub fn is_responder(&self) -> bool {
        !self.is_map()
    }
}
