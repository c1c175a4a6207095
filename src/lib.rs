//! A URI router that compiles route patterns into a prefix trie.
//!
//! Patterns are plain text with `{name}` or `{name:regex}` parameters and
//! `[...]` optional parts:
//!
//! ```
//! use prefix_router::{routes, Method, Router};
//!
//! let router = Router::new(routes! {
//!     GET "/users/{id:\\d+}" => "user",
//!     GET "/files/{path:.+}" => "file",
//!     POST "/users" => "create",
//! })?;
//!
//! let (responder, params) = router.route(&Method::GET, "/users/42")?;
//! assert_eq!(*responder, "user");
//! assert_eq!(params.get("id"), Some("42"));
//!
//! let err = router.route(&Method::GET, "/users").unwrap_err();
//! assert_eq!(err.allowed_methods(), [Method::POST]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]

pub mod cache;
pub mod pattern;
pub mod prefix_map;
pub mod resolver;
pub mod strmap;
pub mod uri;

mod http_router;
mod routes;

pub use crate::cache::{FileCache, MemoryCache, NullCache, RouteCache};
pub use crate::http_router::{HttpError, Method, Params, Router};
pub use crate::prefix_map::{CompileError, CompileOptions, DuplicatePolicy, Endpoint, PrefixMap};
pub use crate::resolver::{
    Captures, PrefixMatchingResolver, ResolveError, Resolver, SimpleRegexpResolver,
};
pub use crate::routes::{CompiledRoutes, RouteMap};
pub use crate::strmap::StrMap;

pub mod params {
    //! Iterators over [`Params`](crate::Params).
    pub use crate::http_router::{IntoIter, Iter};
}
