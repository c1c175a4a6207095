use crate::resolver::Captures;

use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use smallvec::SmallVec;

/// Percent-decoded route parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(String, String); 4]>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(n, v)| if n == name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.buf.iter(),
        }
    }
}

impl Params {
    /// Invalid UTF-8 after decoding is replaced, never rejected.
    pub(super) fn decode(caps: &Captures<'_>) -> Self {
        let buf = caps
            .iter()
            .map(|&(name, value)| {
                let value = percent_decode_str(value).decode_utf8_lossy();
                (name.to_owned(), value.into_owned())
            })
            .collect();
        Self { buf }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let buf = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { buf }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.buf.into_iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

pub struct IntoIter {
    inner: smallvec::IntoIter<[(String, String); 4]>,
}

macro_rules! delegate {
    (iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let (n, v) = self.inner.$method()?;
            Some((n.as_str(), v.as_str()))
        }
    };

    (into_iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            self.inner.$method()
        }
    };

    (size_hint) => {
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.inner.size_hint()
        }
    };

    (len) => {
        fn len(&self) -> usize {
            self.inner.len()
        }
    };
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    delegate!(iter, next);
    delegate!(size_hint);
}

impl DoubleEndedIterator for Iter<'_> {
    delegate!(iter, next_back);
}

impl Iterator for IntoIter {
    type Item = (String, String);
    delegate!(into_iter, next);
    delegate!(size_hint);
}

impl DoubleEndedIterator for IntoIter {
    delegate!(into_iter, next_back);
}

impl FusedIterator for Iter<'_> {}
impl FusedIterator for IntoIter {}

impl ExactSizeIterator for Iter<'_> {
    delegate!(len);
}

impl ExactSizeIterator for IntoIter {
    delegate!(len);
}
