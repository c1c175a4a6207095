use prefix_router::{
    routes, HttpError, Method, PrefixMatchingResolver, ResolveError, Resolver, RouteMap, Router,
    SimpleRegexpResolver,
};

const MAP: &[&str] = &[
    "/foo",
    "/foo/",
    "/foo/bar",
    "/foo/bar/{baz}",
    "/foo/{bar}",
    "/foo/{bar}/baz",
    "/foo/{bar}{baz:.+}",
    "/food/{noms}",
    "/bar/{herp:\\d+}",
    "/bar/{herp}",
    "/unique/{foo}/bar",
    "/optional_suffix_[foo]",
    "/optional_suffix[/]",
    "/optional_suffixes/[herp[/derp]]",
    "/manual/en/{LegacyID}.php",
];

type Case = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const CASES: &[Case] = &[
    ("/foo", "/foo", &[]),
    ("/foo/", "/foo/", &[]),
    ("/foo/bar", "/foo/bar", &[]),
    ("/foo/bar/herp", "/foo/bar/{baz}", &[("baz", "herp")]),
    ("/foo/herp", "/foo/{bar}", &[("bar", "herp")]),
    ("/foo/=%3Efoo", "/foo/{bar}", &[("bar", "=>foo")]),
    ("/foo/herp/baz", "/foo/{bar}/baz", &[("bar", "herp")]),
    (
        "/foo/herp/derp",
        "/foo/{bar}{baz:.+}",
        &[("bar", "herp"), ("baz", "/derp")],
    ),
    ("/food/burger", "/food/{noms}", &[("noms", "burger")]),
    ("/bar/123", "/bar/{herp:\\d+}", &[("herp", "123")]),
    ("/bar/derp", "/bar/{herp}", &[("herp", "derp")]),
    ("/bar/1derp", "/bar/{herp}", &[("herp", "1derp")]),
    ("/unique/foo/bar", "/unique/{foo}/bar", &[("foo", "foo")]),
    ("/optional_suffix_", "/optional_suffix_[foo]", &[]),
    ("/optional_suffix_foo", "/optional_suffix_[foo]", &[]),
    ("/optional_suffix", "/optional_suffix[/]", &[]),
    ("/optional_suffix/", "/optional_suffix[/]", &[]),
    ("/optional_suffixes/", "/optional_suffixes/[herp[/derp]]", &[]),
    ("/optional_suffixes/herp", "/optional_suffixes/[herp[/derp]]", &[]),
    (
        "/optional_suffixes/herp/derp",
        "/optional_suffixes/[herp[/derp]]",
        &[],
    ),
    (
        "/manual/en/foo.php",
        "/manual/en/{LegacyID}.php",
        &[("LegacyID", "foo")],
    ),
    (
        "/manual/en/foo.bar.php",
        "/manual/en/{LegacyID}.php",
        &[("LegacyID", "foo.bar")],
    ),
];

fn get_map() -> RouteMap<&'static str> {
    MAP.iter().map(|&p| (Method::GET, p, p)).collect()
}

fn check_router<S: Resolver<&'static str>>(router: &Router<&'static str, S>) {
    for &(path, expected, params) in CASES {
        for method in [Method::GET, Method::HEAD] {
            dbg!((&method, path));
            let (responder, actual) = router.route(&method, path).unwrap();
            dbg!(&actual);
            assert_eq!(*responder, expected);
            assert_eq!(actual.iter().collect::<Vec<_>>(), params);
        }
    }
}

fn check_resolver(resolver: &impl Resolver<&'static str>) {
    for &(path, expected, _) in CASES {
        dbg!(path);
        let (responder, _) = resolver.resolve(&Method::GET, path).unwrap();
        assert_eq!(*responder, expected);
    }
}

#[test]
fn prefix_matching_routes() {
    let router = Router::new(get_map()).unwrap();
    check_router(&router);
    check_resolver(router.resolver());
}

#[test]
fn simple_regexp_routes() {
    let resolver = SimpleRegexpResolver::from_route_map(get_map()).unwrap();
    check_resolver(&resolver);
    check_router(&Router::from_resolver(resolver));
}

#[test]
fn raw_captures_are_not_decoded() {
    let resolver = PrefixMatchingResolver::from_route_map(get_map()).unwrap();
    let (responder, captures) = resolver.resolve(&Method::GET, "/foo/=%3Efoo").unwrap();
    assert_eq!(*responder, "/foo/{bar}");
    assert_eq!(&*captures, &[("bar", "=%3Efoo")]);
    assert_eq!(captures.get("bar"), Some("=%3Efoo"));

    let (_, captures) = resolver.resolve(&Method::GET, "/bar/123").unwrap();
    assert_eq!(captures.parse::<u32>("herp"), Some(Ok(123)));
    assert!(captures.get("baz").is_none());
}

fn method_map() -> RouteMap<&'static str> {
    let mut map = RouteMap::new();
    map.insert(Method::GET, "/get", "get")
        .insert(Method::HEAD, "/head", "head")
        .insert(Method::POST, "/post", "post");
    map
}

fn check_methods<S: Resolver<&'static str>>(router: &Router<&'static str, S>) {
    let (responder, _) = router.route(&Method::HEAD, "/get").unwrap();
    assert_eq!(*responder, "get");

    let cases: &[(Method, &str, &[Method])] = &[
        (Method::GET, "/head", &[Method::HEAD]),
        (Method::HEAD, "/post", &[Method::POST]),
        (Method::GET, "/post", &[Method::POST]),
        (Method::PUT, "/get", &[Method::GET]),
    ];

    for (method, path, allowed) in cases {
        dbg!((method, path));
        let err = router.route(method, path).unwrap_err();
        dbg!(&err);
        assert!(matches!(err, HttpError::MethodNotAllowed { .. }));
        assert_eq!(err.allowed_methods(), *allowed);
        assert_eq!(err.status(), http::StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[test]
fn method_not_allowed() {
    check_methods(&Router::new(method_map()).unwrap());

    let resolver = SimpleRegexpResolver::from_route_map(method_map()).unwrap();
    check_methods(&Router::from_resolver(resolver));
}

#[test]
fn allowed_methods_keep_declaration_order() {
    let router = Router::new(routes! {
        POST "/items" => 1,
        GET "/items" => 2,
        DELETE "/items/{id}" => 3,
    })
    .unwrap();

    let allowed = router.allowed_methods("/items").unwrap();
    assert_eq!(allowed, [Method::POST, Method::GET]);

    let err = router.route(&Method::PATCH, "/items").unwrap_err();
    assert_eq!(err.to_string(), "method not allowed, allowed methods: POST, GET");
}

#[test]
fn not_found() {
    let router: Router<&str> = Router::new(RouteMap::new()).unwrap();
    let err = router.route(&Method::GET, "/__404").unwrap_err();
    assert!(matches!(err, HttpError::NotFound));
    assert_eq!(err.status(), http::StatusCode::NOT_FOUND);

    let mut map = RouteMap::new();
    map.insert(Method::GET, "/foo", "/foo");
    let router = Router::new(map.clone()).unwrap();
    assert!(matches!(
        router.route(&Method::GET, "/__404"),
        Err(HttpError::NotFound)
    ));

    let router = Router::from_resolver(SimpleRegexpResolver::from_route_map(map).unwrap());
    assert!(matches!(
        router.route(&Method::GET, "/__404"),
        Err(HttpError::NotFound)
    ));
}

#[test]
fn head_without_get_is_not_rerouted() {
    let router = Router::new(routes! {
        GET "/both" => "get",
        POST "/both" => "post",
    })
    .unwrap();

    let err = router.route(&Method::HEAD, "/both").unwrap_err();
    assert_eq!(err.allowed_methods(), [Method::GET, Method::POST]);
}

#[derive(Debug, thiserror::Error)]
#[error("backend unavailable")]
struct Unavailable;

struct FailingResolver;

impl Resolver<u32> for FailingResolver {
    fn resolve<'s, 'p>(
        &'s self,
        method: &Method,
        _path: &'p str,
    ) -> Result<(&'s u32, prefix_router::Captures<'p>), ResolveError>
    where
        's: 'p,
    {
        if *method == Method::GET {
            Err(ResolveError::Other(Box::new(Unavailable)))
        } else {
            Err(ResolveError::NotFound)
        }
    }

    fn methods(&self) -> Vec<Method> {
        vec![Method::POST, Method::GET]
    }
}

#[test]
fn resolver_failures_are_internal_errors() {
    let router: Router<u32, FailingResolver> = Router::from_resolver(FailingResolver);

    let err = router.route(&Method::GET, "/").unwrap_err();
    assert!(matches!(err, HttpError::InternalServerError(_)));
    assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().contains("backend unavailable"));

    // computing the allowed methods hits the failing GET table too
    let err = router.route(&Method::POST, "/").unwrap_err();
    assert!(matches!(err, HttpError::InternalServerError(_)));
}

#[test]
fn routes_macro() {
    let router = Router::new(routes! {
        GET "/u/{uid}/p/{pid}" => 1,
        POST "/u/{uid}/p" => 2,
        "PURGE" "/cache[/{key}]" => 3,
        HEAD "/{path:.+}" => 4,
    })
    .unwrap();

    let purge = Method::from_bytes(b"PURGE").unwrap();
    let cases: &[(&Method, &str, i32, &[(&str, &str)])] = &[
        (&Method::GET, "/u/asd/p/qwe", 1, &[("uid", "asd"), ("pid", "qwe")]),
        (&Method::POST, "/u/asd/p", 2, &[("uid", "asd")]),
        (&purge, "/cache", 3, &[]),
        (&purge, "/cache/users", 3, &[("key", "users")]),
        (&Method::HEAD, "/home/asd", 4, &[("path", "home/asd")]),
    ];

    for &(method, path, data, params) in cases {
        dbg!((method, path));
        let (responder, actual) = router.route(method, path).unwrap();
        assert_eq!(*responder, data);
        assert_eq!(actual.iter().collect::<Vec<_>>(), params);
    }
}

#[test]
fn params_are_percent_decoded() {
    let router = Router::new(routes! {
        GET "/search/{query}" => (),
    })
    .unwrap();

    let (_, params) = router.route(&Method::GET, "/search/caf%C3%A9%20au%20lait").unwrap();
    assert_eq!(params.get("query"), Some("café au lait"));

    let (_, params) = router.route(&Method::GET, "/search/%FF").unwrap();
    assert_eq!(params.get("query"), Some("\u{FFFD}"));
}
