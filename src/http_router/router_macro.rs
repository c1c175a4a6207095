/// Builds a [`RouteMap`](crate::RouteMap).
///
/// ```
/// use prefix_router::routes;
///
/// let routes = routes! {
///     GET "/users/{id:\\d+}" => 1,
///     POST "/users" => 2,
///     "PURGE" "/cache[/{key}]" => 3
/// };
/// assert_eq!(routes.len(), 3);
/// ```
#[macro_export]
macro_rules! routes {
    {@entry $routes:expr, GET, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::GET, $pattern, $data)
    };
    {@entry $routes:expr, POST, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::POST, $pattern, $data)
    };
    {@entry $routes:expr, PUT, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::PUT, $pattern, $data)
    };
    {@entry $routes:expr, DELETE, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::DELETE, $pattern, $data)
    };
    {@entry $routes:expr, HEAD, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::HEAD, $pattern, $data)
    };
    {@entry $routes:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::OPTIONS, $pattern, $data)
    };
    {@entry $routes:expr, CONNECT, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::CONNECT, $pattern, $data)
    };
    {@entry $routes:expr, PATCH, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::PATCH, $pattern, $data)
    };
    {@entry $routes:expr, TRACE, $pattern:expr, $data:expr} => {
        $routes.insert($crate::Method::TRACE, $pattern, $data)
    };
    {@entry $routes:expr, $method:literal, $pattern:expr, $data:expr} => {
        $routes.insert(
            $crate::Method::from_bytes($method.as_bytes())
                .expect("invalid HTTP method"),
            $pattern,
            $data,
        )
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __routes = $crate::RouteMap::new();
        $($crate::routes!(@entry __routes, $method, $pattern, $data);)+
        __routes
    }};
}
