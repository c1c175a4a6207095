use super::error::UriError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    /// A single path segment, or any text when `allow_slashes` is set.
    String { allow_slashes: bool },
    Int,
    Enum { values: Vec<String> },
}

/// A typed, named parameter of a [`UriPattern`](super::UriPattern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParameter {
    name: String,
    kind: ParameterKind,
}

impl UriParameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    pub(super) fn kind_name(&self) -> &'static str {
        match self.kind {
            ParameterKind::String { .. } => "string",
            ParameterKind::Int => "int",
            ParameterKind::Enum { .. } => "enum",
        }
    }

    /// Regex constraining the parameter; `None` means the default `[^/]+`.
    pub fn regex_fragment(&self) -> Option<String> {
        match self.kind {
            ParameterKind::String {
                allow_slashes: false,
            } => None,
            ParameterKind::String {
                allow_slashes: true,
            } => Some(".+".to_owned()),
            ParameterKind::Int => Some("\\d+".to_owned()),
            ParameterKind::Enum { ref values } => {
                let alts: Vec<String> = values.iter().map(|v| escape_value(v)).collect();
                Some(format!("(?:{})", alts.join("|")))
            }
        }
    }

    /// The parameter in route pattern syntax: `{name}` or `{name:regex}`.
    pub fn route_fragment(&self) -> String {
        match self.regex_fragment() {
            None => format!("{{{}}}", self.name),
            Some(re) => format!("{{{}:{}}}", self.name, re),
        }
    }

    /// Checks a matched (decoded) value against the parameter type.
    pub fn validate(&self, input: &str) -> Result<(), UriError> {
        let reason = match self.kind {
            ParameterKind::String {
                allow_slashes: false,
            } if input.contains('/') => "contains slashes",
            ParameterKind::Int if input.parse::<i64>().is_err() => "not an integer",
            ParameterKind::Enum { ref values } if !values.iter().any(|v| v == input) => {
                "not one of the allowed values"
            }
            _ => return Ok(()),
        };
        Err(UriError::InvalidValue {
            name: self.name.clone(),
            value: input.to_owned(),
            reason,
        })
    }
}

/// Like `regex::escape`, but braces become hex escapes: the route parser
/// counts `{` and `}` to find the end of a parameter.
fn escape_value(value: &str) -> String {
    let mut buf = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '{' => buf.push_str("\\x7B"),
            '}' => buf.push_str("\\x7D"),
            _ => buf.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    buf
}
