use crate::prefix_map::{CompileError, CompileOptions, PrefixMap};

use std::fmt;

use http::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Route declarations: for each method, an ordered list of `(pattern, responder)`.
///
/// Methods keep the order in which they were first declared.
#[derive(Debug, Clone)]
pub struct RouteMap<R> {
    methods: Vec<(Method, Vec<(String, R)>)>,
}

impl<R> Default for RouteMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RouteMap<R> {
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    pub fn insert(&mut self, method: Method, pattern: impl Into<String>, responder: R) -> &mut Self {
        self.access(method).push((pattern.into(), responder));
        self
    }

    pub fn get(&self, method: &Method) -> Option<&[(String, R)]> {
        self.methods
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, routes)| routes.as_slice())
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> + '_ {
        self.methods.iter().map(|(m, _)| m)
    }

    /// Total number of declared routes.
    pub fn len(&self) -> usize {
        self.methods.iter().map(|(_, routes)| routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn access(&mut self, method: Method) -> &mut Vec<(String, R)> {
        let i = match self.methods.iter().position(|(m, _)| *m == method) {
            Some(i) => i,
            None => {
                self.methods.push((method, Vec::new()));
                self.methods.len() - 1
            }
        };
        &mut self.methods[i].1
    }
}

impl<R, P: Into<String>> FromIterator<(Method, P, R)> for RouteMap<R> {
    fn from_iter<I: IntoIterator<Item = (Method, P, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (method, pattern, responder) in iter {
            map.insert(method, pattern, responder);
        }
        map
    }
}

impl<R> IntoIterator for RouteMap<R> {
    type Item = (Method, Vec<(String, R)>);
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.methods.into_iter()
    }
}

/// One compiled [`PrefixMap`] per declared method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledRoutes<R> {
    methods: Vec<MethodRoutes<R>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MethodRoutes<R> {
    #[serde(with = "method_str")]
    method: Method,
    map: PrefixMap<R>,
}

impl<R> CompiledRoutes<R> {
    pub fn compile(routes: RouteMap<R>) -> Result<Self, CompileError> {
        Self::compile_with(routes, CompileOptions::default())
    }

    pub fn compile_with(routes: RouteMap<R>, options: CompileOptions) -> Result<Self, CompileError> {
        let mut methods = Vec::new();
        for (method, flat) in routes {
            debug!(%method, routes = flat.len(), "compiling routes");
            let map = PrefixMap::from_flat_map_with(flat, options)?;
            methods.push(MethodRoutes { method, map });
        }
        Ok(Self { methods })
    }

    pub fn get(&self, method: &Method) -> Option<&PrefixMap<R>> {
        self.methods
            .iter()
            .find(|e| e.method == *method)
            .map(|e| &e.map)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> + '_ {
        self.methods.iter().map(|e| &e.method)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Method, &PrefixMap<R>)> + '_ {
        self.methods.iter().map(|e| (&e.method, &e.map))
    }
}

mod method_str {
    use super::*;

    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;

    pub fn serialize<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
        struct MethodVisitor;

        impl de::Visitor<'_> for MethodVisitor {
            type Value = Method;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an HTTP method")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Method, E> {
                Method::from_bytes(v.as_bytes()).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MethodVisitor)
    }
}
