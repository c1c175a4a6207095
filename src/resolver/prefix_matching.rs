use super::{Captures, ResolveError, Resolver};

use crate::prefix_map::{CompileError, CompileOptions, Endpoint, PrefixMap};
use crate::routes::{CompiledRoutes, RouteMap};

use std::sync::Arc;

use http::Method;
use smallvec::SmallVec;
use tracing::trace;

/// Resolves requests against one compiled [`PrefixMap`] per method.
#[derive(Debug, Clone)]
pub struct PrefixMatchingResolver<R> {
    routes: Arc<CompiledRoutes<R>>,
}

impl<R> PrefixMatchingResolver<R> {
    pub fn new(routes: impl Into<Arc<CompiledRoutes<R>>>) -> Self {
        Self {
            routes: routes.into(),
        }
    }

    pub fn from_route_map(routes: RouteMap<R>) -> Result<Self, CompileError> {
        Self::from_route_map_with(routes, CompileOptions::default())
    }

    pub fn from_route_map_with(
        routes: RouteMap<R>,
        options: CompileOptions,
    ) -> Result<Self, CompileError> {
        Ok(Self::new(CompiledRoutes::compile_with(routes, options)?))
    }

    pub fn routes(&self) -> &CompiledRoutes<R> {
        &self.routes
    }
}

impl<R> Resolver<R> for PrefixMatchingResolver<R> {
    fn resolve<'s, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Result<(&'s R, Captures<'p>), ResolveError>
    where
        's: 'p,
    {
        let map = self.routes.get(method).ok_or(ResolveError::NotFound)?;
        map.resolve(path).ok_or(ResolveError::NotFound)
    }

    fn methods(&self) -> Vec<Method> {
        self.routes.methods().cloned().collect()
    }
}

enum Stage {
    Enter,
    Prefix,
    Regex(usize),
}

struct Frame<'s, 'p, R> {
    map: &'s PrefixMap<R>,
    path: &'p str,
    stage: Stage,
    /// Captures owned by the enclosing levels.
    base: usize,
}

enum Step<'s, 'p, R> {
    Found(&'s R),
    Descend(&'s PrefixMap<R>, &'p str),
    Pop,
}

impl<R> PrefixMap<R> {
    /// Finds the responder for `path`.
    ///
    /// At each level an exact literal wins over a prefix child, which wins
    /// over the regexes. A regex whose responder does not consume the whole
    /// remaining path, or whose sub-trie finds nothing, is skipped in favor of
    /// the next regex at the same level. A prefix child that finds nothing
    /// falls back to the regexes of its parent level.
    pub fn resolve<'s, 'p>(&'s self, path: &'p str) -> Option<(&'s R, Captures<'p>)>
    where
        's: 'p,
    {
        let mut captures = Captures::new();
        let mut stack: SmallVec<[Frame<'s, 'p, R>; 8]> = SmallVec::new();
        stack.push(Frame {
            map: self,
            path,
            stage: Stage::Enter,
            base: 0,
        });

        while let Some(frame) = stack.last_mut() {
            match step(frame, &mut captures) {
                Step::Found(responder) => return Some((responder, captures.finish())),
                Step::Descend(map, path) => stack.push(Frame {
                    map,
                    path,
                    stage: Stage::Enter,
                    base: captures.len(),
                }),
                Step::Pop => {
                    stack.pop();
                }
            }
        }

        None
    }

    fn prefix_child<'p>(&self, path: &'p str) -> Option<(&PrefixMap<R>, &'p str)> {
        if self.prefixes().is_empty() {
            return None;
        }
        let len = self.prefix_length();
        let child = self.prefixes().find(path.get(..len)?)?;
        Some((child, &path[len..]))
    }
}

fn step<'s, 'p, R>(frame: &mut Frame<'s, 'p, R>, captures: &mut Captures<'p>) -> Step<'s, 'p, R>
where
    's: 'p,
{
    let (map, path) = (frame.map, frame.path);

    let start = match frame.stage {
        Stage::Enter => {
            if let Some(responder) = map.literals().find(path) {
                return Step::Found(responder);
            }
            if let Some((child, rest)) = map.prefix_child(path) {
                frame.stage = Stage::Prefix;
                return Step::Descend(child, rest);
            }
            0
        }
        Stage::Prefix => {
            trace!(path, "prefix branch found nothing, falling back to regexps");
            0
        }
        Stage::Regex(i) => i,
    };

    // drop whatever the previous candidate left behind
    captures.truncate(frame.base);

    for (i, (regex, endpoint)) in map.regexps().iter().enumerate().skip(start) {
        let caps = match regex.regex().captures(path) {
            Some(caps) => caps,
            None => continue,
        };
        let matched = caps.get(0).map_or(0, |m| m.end());
        let rest = &path[matched..];

        match endpoint {
            Endpoint::Responder(responder) => {
                if rest.is_empty() {
                    captures.extend_from(regex.regex(), &caps);
                    return Step::Found(responder);
                }
            }
            Endpoint::Map(child) => {
                frame.stage = Stage::Regex(i + 1);
                captures.extend_from(regex.regex(), &caps);
                return Step::Descend(child, rest);
            }
        }
    }

    Step::Pop
}
