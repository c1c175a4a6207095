use prefix_router::uri::{
    HasUriPattern, ParameterKind, RequestParameters, UriBuilder, UriError, UriParameter, UriPattern,
};
use prefix_router::{Method, Params, RouteMap, Router};

#[test]
fn route_fragments() {
    let cases = &[
        (UriPattern::new().literal("/foo"), "/foo"),
        (UriPattern::new().literal("/foo").literal("/bar"), "/foo/bar"),
        (UriPattern::new().literal("/~").string("username"), "/~{username}"),
        (
            UriPattern::new().literal("/~").string_with_slashes("username"),
            "/~{username:.+}",
        ),
        (UriPattern::new().literal("/blog/").int("post_id"), "/blog/{post_id:\\d+}"),
        (
            UriPattern::new().literal("/feed.").one_of("format", ["rss", "atom"]),
            "/feed.{format:(?:rss|atom)}",
        ),
        (
            UriPattern::new().slash().string("a").slash().int("b"),
            "/{a}/{b:\\d+}",
        ),
    ];

    for (pattern, expected) in cases {
        dbg!(pattern);
        assert_eq!(pattern.route_fragment(), *expected);
    }
}

#[test]
fn build_paths() {
    let path = UriBuilder::new(UriPattern::new().literal("/foo").parts().to_vec())
        .path()
        .unwrap();
    assert_eq!(path, "/foo");

    let path = UriPattern::new()
        .literal("/herp/")
        .string("foo")
        .builder()
        .set_string("foo", "derp")
        .unwrap()
        .path()
        .unwrap();
    assert_eq!(path, "/herp/derp");

    let path = UriPattern::new()
        .string("herp")
        .builder()
        .set_string("herp", "derp")
        .unwrap()
        .path()
        .unwrap();
    assert_eq!(path, "/derp");

    let path = UriPattern::new()
        .literal("/post/")
        .int("post_id")
        .builder()
        .set_int("post_id", 123)
        .unwrap()
        .path()
        .unwrap();
    assert_eq!(path, "/post/123");

    let path = UriPattern::new()
        .literal("/feed.")
        .one_of("format", ["rss", "atom"])
        .builder()
        .set_enum("format", "atom")
        .unwrap()
        .path()
        .unwrap();
    assert_eq!(path, "/feed.atom");
}

#[test]
fn builder_errors() {
    let builder = UriPattern::new().int("foo").builder();

    let err = builder.clone().set_string("foo", "bar").unwrap_err();
    assert_eq!(
        err,
        UriError::TypeMismatch {
            name: "foo".into(),
            expected: "string",
            found: "int",
        }
    );

    let err = builder
        .clone()
        .set_int("foo", 123)
        .and_then(|b| b.set_int("foo", 123))
        .unwrap_err();
    assert_eq!(err, UriError::AlreadySet { name: "foo".into() });

    let err = builder.path().unwrap_err();
    assert_eq!(err, UriError::MissingValue { name: "foo".into() });

    let err = builder.clone().set_int("bar", 123).unwrap_err();
    dbg!(err.to_string());
    assert_eq!(
        err,
        UriError::UnknownParameter {
            name: "bar".into(),
            expected: vec!["'foo'".into()],
        }
    );

    let err = UriPattern::new()
        .one_of("format", ["rss"])
        .builder()
        .set_enum("format", "json")
        .unwrap_err();
    assert!(matches!(err, UriError::InvalidValue { .. }));

    let err = UriPattern::new()
        .literal("foo/")
        .int("id")
        .builder()
        .set_int("id", 1)
        .unwrap()
        .path()
        .unwrap_err();
    assert_eq!(err, UriError::NotAbsolute { path: "foo/1".into() });
}

#[test]
fn validate_parameters() {
    let int = UriParameter::new("foo", ParameterKind::Int);
    assert!(int.validate("123").is_ok());
    assert!(int.validate("-5").is_ok());
    for input in ["foo", "0123foo", "0.123foo", "0.123", "0x1e3"] {
        dbg!(input);
        assert!(int.validate(input).is_err());
    }

    let segment = UriParameter::new(
        "foo",
        ParameterKind::String {
            allow_slashes: false,
        },
    );
    assert!(segment.validate("foo").is_ok());
    assert!(segment.validate("foo/bar").is_err());

    let any = UriParameter::new("foo", ParameterKind::String { allow_slashes: true });
    assert!(any.validate("foo/bar").is_ok());
}

struct UserPage;

impl HasUriPattern for UserPage {
    fn uri_pattern() -> UriPattern {
        UriPattern::new()
            .literal("/users/")
            .int("id")
            .literal("/")
            .one_of("tab", ["posts", "likes"])
    }
}

#[test]
fn patterns_route_what_they_build() {
    let mut routes = RouteMap::new();
    routes.insert(Method::GET, UserPage::uri_pattern().route_fragment(), "user");
    let router = Router::new(routes).unwrap();

    let path = UserPage::uri_builder()
        .set_int("id", 42)
        .unwrap()
        .set_enum("tab", "likes")
        .unwrap()
        .path()
        .unwrap();
    assert_eq!(path, "/users/42/likes");

    let (responder, params) = router.route(&Method::GET, &path).unwrap();
    assert_eq!(*responder, "user");
    assert_eq!(params.parse::<i64>("id"), Some(Ok(42)));
    assert_eq!(params.get("tab"), Some("likes"));

    assert!(router.route(&Method::GET, "/users/42/other").is_err());
    assert!(router.route(&Method::GET, "/users/abc/posts").is_err());

    let params = UserPage::request_parameters(params);
    assert_eq!(params.get_int("id"), Ok(42));
    assert_eq!(params.get_enum("tab"), Ok("likes"));
}

fn string(name: &str) -> UriParameter {
    UriParameter::new(
        name,
        ParameterKind::String {
            allow_slashes: false,
        },
    )
}

fn values(pairs: &[(&str, &str)]) -> Params {
    pairs.iter().copied().collect()
}

#[test]
fn request_parameters() {
    let params = RequestParameters::new([string("foo")], [], values(&[("foo", "bar")]));
    assert_eq!(params.get_string("foo"), Ok("bar"));

    let params = RequestParameters::new(
        [UriParameter::new("foo", ParameterKind::Int)],
        [],
        values(&[("foo", "123")]),
    );
    assert_eq!(params.get_int("foo"), Ok(123));

    let params = RequestParameters::new([string("foo")], [], values(&[("foo", "bar")]));
    assert_eq!(
        params.get_int("foo"),
        Err(UriError::TypeMismatch {
            name: "foo".into(),
            expected: "int",
            found: "string",
        })
    );
}

#[test]
fn request_parameters_from_pattern() {
    let pattern = UriPattern::new()
        .slash()
        .string("foo")
        .slash()
        .int("bar")
        .slash()
        .one_of("baz", ["a", "b"]);

    let params = RequestParameters::from_pattern(
        &pattern,
        values(&[("foo", "some string"), ("bar", "123"), ("baz", "b")]),
    );
    assert_eq!(params.get_string("foo"), Ok("some string"));
    assert_eq!(params.get_int("bar"), Ok(123));
    assert_eq!(params.get_enum("baz"), Ok("b"));

    let params = RequestParameters::from_pattern(
        &pattern,
        values(&[("foo", "a/b"), ("bar", "12x"), ("baz", "c")]),
    );
    for err in [
        params.get_string("foo").unwrap_err(),
        params.get_int("bar").unwrap_err(),
        params.get_enum("baz").unwrap_err(),
    ] {
        dbg!(&err);
        assert!(matches!(err, UriError::InvalidValue { .. }));
    }

    let params = RequestParameters::from_pattern(&pattern, values(&[]));
    assert_eq!(
        params.get_string("foo"),
        Err(UriError::MissingValue { name: "foo".into() })
    );
    assert!(matches!(
        params.get_string("qux"),
        Err(UriError::UnknownParameter { .. })
    ));
}

#[test]
fn optional_request_parameters() {
    let params = RequestParameters::new([], [string("foo")], values(&[("foo", "bar")]));
    assert_eq!(params.get_optional_string("foo"), Ok(Some("bar")));

    let params = RequestParameters::new([], [string("foo")], values(&[]));
    assert_eq!(params.get_optional_string("foo"), Ok(None));

    let params = RequestParameters::new(
        [],
        [UriParameter::new("page", ParameterKind::Int)],
        values(&[("page", "7")]),
    );
    assert_eq!(params.get_optional_int("page"), Ok(Some(7)));

    let params = RequestParameters::new([], [string("foo")], values(&[("foo", "bar")]));
    assert_eq!(
        params.get_string("foo"),
        Err(UriError::NotRequired { name: "foo".into() })
    );

    let params = RequestParameters::new([string("foo")], [], values(&[("foo", "bar")]));
    assert_eq!(
        params.get_optional_string("foo"),
        Err(UriError::NotOptional { name: "foo".into() })
    );
}

#[test]
fn enum_values_with_braces() {
    let pattern = UriPattern::new()
        .literal("/x/")
        .one_of("v", ["{", "a}", "b{2}"]);
    let fragment = pattern.route_fragment();
    dbg!(&fragment);

    let mut routes = RouteMap::new();
    routes.insert(Method::GET, fragment, ());
    let router = Router::new(routes).unwrap();

    for value in ["{", "a}", "b{2}"] {
        let path = format!("/x/{}", value);
        let (_, params) = router.route(&Method::GET, &path).unwrap();
        assert_eq!(params.get("v"), Some(value));
    }
    assert!(router.route(&Method::GET, "/x/bb").is_err());
}
