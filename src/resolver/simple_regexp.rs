use super::{Captures, ResolveError, Resolver};

use crate::pattern;
use crate::prefix_map::CompileError;
use crate::routes::RouteMap;

use http::Method;
use regex::Regex;

/// Tries every route of a method in declaration order, one full-path regex each.
///
/// Linear in the number of routes; mostly useful as a reference for
/// [`PrefixMatchingResolver`](super::PrefixMatchingResolver).
#[derive(Debug, Clone)]
pub struct SimpleRegexpResolver<R> {
    methods: Vec<(Method, Vec<(Regex, R)>)>,
}

impl<R> SimpleRegexpResolver<R> {
    pub fn from_route_map(routes: RouteMap<R>) -> Result<Self, CompileError> {
        let mut methods = Vec::new();
        for (method, flat) in routes {
            let mut regexps = Vec::with_capacity(flat.len());
            for (pattern, responder) in flat {
                let regex = to_regex(&pattern)?;
                regexps.push((regex, responder));
            }
            methods.push((method, regexps));
        }
        Ok(Self { methods })
    }
}

fn to_regex(pattern: &str) -> Result<Regex, CompileError> {
    let seq = pattern::parse(pattern).map_err(|source| CompileError::Parse {
        pattern: pattern.to_owned(),
        source,
    })?;
    let fragment = seq.to_regex();
    Regex::new(&format!("^(?:{})$", fragment)).map_err(|source| CompileError::Regex {
        pattern: pattern.to_owned(),
        fragment,
        source,
    })
}

impl<R> Resolver<R> for SimpleRegexpResolver<R> {
    fn resolve<'s, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Result<(&'s R, Captures<'p>), ResolveError>
    where
        's: 'p,
    {
        let regexps = self
            .methods
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, v)| v)
            .ok_or(ResolveError::NotFound)?;

        for (regex, responder) in regexps {
            if let Some(caps) = regex.captures(path) {
                let mut captures = Captures::new();
                captures.extend_from(regex, &caps);
                return Ok((responder, captures));
            }
        }

        Err(ResolveError::NotFound)
    }

    fn methods(&self) -> Vec<Method> {
        self.methods.iter().map(|(m, _)| m.clone()).collect()
    }
}
