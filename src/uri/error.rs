#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriError {
    #[error("{name:?} is not a valid parameter, expected one of [{}]", .expected.join(", "))]
    UnknownParameter { name: String, expected: Vec<String> },

    #[error("expected {name:?} to be a {expected} parameter, got a {found} parameter")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("trying to set {name:?} twice")]
    AlreadySet { name: String },

    #[error("parameter {name:?} must be set")]
    MissingValue { name: String },

    #[error("invalid value {value:?} for parameter {name:?}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: &'static str,
    },

    #[error("parameter {name:?} is optional, use the optional getter")]
    NotRequired { name: String },

    #[error("parameter {name:?} is required, use the required getter")]
    NotOptional { name: String },

    #[error("path {path:?} does not start with '/'")]
    NotAbsolute { path: String },
}
