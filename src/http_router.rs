mod error;
mod params;
mod router;
mod router_macro;

pub use self::error::HttpError;
pub use self::params::{IntoIter, Iter, Params};
pub use self::router::Router;

pub use http::Method;
