use std::ops::Deref;
use std::str::FromStr;

use regex::{Captures as RegexCaptures, Regex};
use smallvec::SmallVec;

/// Raw `(name, value)` pairs captured while resolving a path.
///
/// Values are slices of the resolved path, percent-encoding untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> Captures<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .rev()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<'a> IntoIterator for Captures<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = smallvec::IntoIter<[(&'a str, &'a str); 8]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> Captures<'a> {
    pub(crate) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len)
    }

    /// Pushes every named group of `regex` that took part in the match.
    pub(crate) fn extend_from(&mut self, regex: &'a Regex, caps: &RegexCaptures<'a>) {
        for name in regex.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                self.buf.push((name, m.as_str()));
            }
        }
    }

    /// Drops earlier entries shadowed by a later one with the same name.
    pub(crate) fn finish(mut self) -> Self {
        let mut i = 0;
        while i < self.buf.len() {
            let name = self.buf[i].0;
            if self.buf[i + 1..].iter().any(|&(k, _)| k == name) {
                self.buf.remove(i);
            } else {
                i += 1;
            }
        }
        self
    }
}
