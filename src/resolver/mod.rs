mod captures;
mod prefix_matching;
mod simple_regexp;

pub use self::captures::Captures;
pub use self::prefix_matching::PrefixMatchingResolver;
pub use self::simple_regexp::SimpleRegexpResolver;

use std::error::Error as StdError;

use http::Method;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no route matches the request")]
    NotFound,

    #[error(transparent)]
    Other(BoxError),
}

/// Maps a `(method, path)` pair to a responder.
pub trait Resolver<R> {
    fn resolve<'s, 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Result<(&'s R, Captures<'p>), ResolveError>
    where
        's: 'p;

    /// Declared methods, in declaration order.
    fn methods(&self) -> Vec<Method>;
}
