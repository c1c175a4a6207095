use super::error::HttpError;
use super::params::Params;

use crate::cache::RouteCache;
use crate::prefix_map::{CompileError, CompileOptions};
use crate::resolver::{PrefixMatchingResolver, ResolveError, Resolver};
use crate::routes::{CompiledRoutes, RouteMap};

use std::marker::PhantomData;

use http::Method;
use tracing::trace;

/// Routes `(method, path)` pairs to responders.
///
/// On top of the resolver this handles `HEAD` requests for `GET`-only
/// routes, reports the allowed methods when only the method is wrong, and
/// percent-decodes the captured parameters.
#[derive(Debug, Clone)]
pub struct Router<R, S = PrefixMatchingResolver<R>> {
    resolver: S,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Router<R> {
    /// Compiles every route up front.
    pub fn new(routes: RouteMap<R>) -> Result<Self, CompileError> {
        Self::with_options(routes, CompileOptions::default())
    }

    pub fn with_options(routes: RouteMap<R>, options: CompileOptions) -> Result<Self, CompileError> {
        let resolver = PrefixMatchingResolver::from_route_map_with(routes, options)?;
        Ok(Self::from_resolver(resolver))
    }

    /// Loads the compiled routes stored under `key`, compiling and storing
    /// them on a miss. `routes` is only called on a miss.
    pub fn with_cache<C>(
        cache: &C,
        key: &str,
        options: CompileOptions,
        routes: impl FnOnce() -> RouteMap<R>,
    ) -> Result<Self, CompileError>
    where
        C: RouteCache<R>,
    {
        let compiled = cache.get_or_compute(key, || CompiledRoutes::compile_with(routes(), options))?;
        Ok(Self::from_resolver(PrefixMatchingResolver::new(compiled)))
    }
}

impl<R, S: Resolver<R>> Router<R, S> {
    pub fn from_resolver(resolver: S) -> Self {
        Self {
            resolver,
            _marker: PhantomData,
        }
    }

    pub fn resolver(&self) -> &S {
        &self.resolver
    }

    pub fn route<'s>(&'s self, method: &Method, path: &str) -> Result<(&'s R, Params), HttpError> {
        let err = match self.resolve(method, path) {
            Ok(ret) => return Ok(ret),
            Err(HttpError::NotFound) => HttpError::NotFound,
            Err(e) => return Err(e),
        };

        let allowed = self.allowed_methods(path)?;
        if allowed.is_empty() {
            return Err(err);
        }

        if *method == Method::HEAD && allowed == [Method::GET] {
            trace!(path, "routing HEAD request to GET");
            return self.resolve(&Method::GET, path);
        }

        Err(HttpError::MethodNotAllowed { allowed })
    }

    /// Methods with a route matching `path`, in declaration order.
    pub fn allowed_methods(&self, path: &str) -> Result<Vec<Method>, HttpError> {
        let mut allowed = Vec::new();
        for method in self.resolver.methods() {
            match self.resolver.resolve(&method, path) {
                Ok(_) => allowed.push(method),
                Err(ResolveError::NotFound) => continue,
                Err(ResolveError::Other(e)) => return Err(HttpError::InternalServerError(e)),
            }
        }
        Ok(allowed)
    }

    fn resolve<'s>(&'s self, method: &Method, path: &str) -> Result<(&'s R, Params), HttpError> {
        match self.resolver.resolve(method, path) {
            Ok((responder, caps)) => Ok((responder, Params::decode(&caps))),
            Err(ResolveError::NotFound) => Err(HttpError::NotFound),
            Err(ResolveError::Other(e)) => Err(HttpError::InternalServerError(e)),
        }
    }
}
