use super::error::UriError;
use super::parameter::UriParameter;
use super::UriPattern;

use crate::http_router::Params;

/// Typed access to the parameters of a routed request.
///
/// Each parameter is declared either required or optional; asking for a
/// required one through an optional getter (or the reverse) is an error, as
/// is asking for it as the wrong type.
#[derive(Debug, Clone)]
pub struct RequestParameters {
    required: Vec<UriParameter>,
    optional: Vec<UriParameter>,
    values: Params,
}

impl RequestParameters {
    pub fn new(
        required: impl IntoIterator<Item = UriParameter>,
        optional: impl IntoIterator<Item = UriParameter>,
        values: Params,
    ) -> Self {
        Self {
            required: required.into_iter().collect(),
            optional: optional.into_iter().collect(),
            values,
        }
    }

    /// Every parameter of `pattern` is required.
    pub fn from_pattern(pattern: &UriPattern, values: Params) -> Self {
        Self::new(pattern.parameters().cloned(), None, values)
    }

    pub fn params(&self) -> &Params {
        &self.values
    }

    pub fn get_string(&self, name: &str) -> Result<&str, UriError> {
        let spec = self.required_spec(name, "string")?;
        self.required_value(spec)
    }

    pub fn get_int(&self, name: &str) -> Result<i64, UriError> {
        let spec = self.required_spec(name, "int")?;
        let value = self.required_value(spec)?;
        parse_int(spec, value)
    }

    pub fn get_enum(&self, name: &str) -> Result<&str, UriError> {
        let spec = self.required_spec(name, "enum")?;
        self.required_value(spec)
    }

    pub fn get_optional_string(&self, name: &str) -> Result<Option<&str>, UriError> {
        let spec = self.optional_spec(name, "string")?;
        self.optional_value(spec)
    }

    pub fn get_optional_int(&self, name: &str) -> Result<Option<i64>, UriError> {
        let spec = self.optional_spec(name, "int")?;
        let value = self.optional_value(spec)?;
        value.map(|v| parse_int(spec, v)).transpose()
    }

    pub fn get_optional_enum(&self, name: &str) -> Result<Option<&str>, UriError> {
        let spec = self.optional_spec(name, "enum")?;
        self.optional_value(spec)
    }

    fn required_spec(&self, name: &str, kind: &'static str) -> Result<&UriParameter, UriError> {
        match find(&self.required, name) {
            Some(spec) => check_kind(spec, kind),
            None if find(&self.optional, name).is_some() => Err(UriError::NotRequired {
                name: name.to_owned(),
            }),
            None => Err(self.unknown(name)),
        }
    }

    fn optional_spec(&self, name: &str, kind: &'static str) -> Result<&UriParameter, UriError> {
        match find(&self.optional, name) {
            Some(spec) => check_kind(spec, kind),
            None if find(&self.required, name).is_some() => Err(UriError::NotOptional {
                name: name.to_owned(),
            }),
            None => Err(self.unknown(name)),
        }
    }

    fn required_value(&self, spec: &UriParameter) -> Result<&str, UriError> {
        self.optional_value(spec)?
            .ok_or_else(|| UriError::MissingValue {
                name: spec.name().to_owned(),
            })
    }

    fn optional_value(&self, spec: &UriParameter) -> Result<Option<&str>, UriError> {
        match self.values.get(spec.name()) {
            Some(value) => {
                spec.validate(value)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn unknown(&self, name: &str) -> UriError {
        let expected = self
            .required
            .iter()
            .chain(&self.optional)
            .map(|p| format!("'{}'", p.name()))
            .collect();
        UriError::UnknownParameter {
            name: name.to_owned(),
            expected,
        }
    }
}

fn find<'a>(specs: &'a [UriParameter], name: &str) -> Option<&'a UriParameter> {
    specs.iter().find(|p| p.name() == name)
}

fn check_kind<'a>(spec: &'a UriParameter, kind: &'static str) -> Result<&'a UriParameter, UriError> {
    if spec.kind_name() == kind {
        Ok(spec)
    } else {
        Err(UriError::TypeMismatch {
            name: spec.name().to_owned(),
            expected: kind,
            found: spec.kind_name(),
        })
    }
}

fn parse_int(spec: &UriParameter, value: &str) -> Result<i64, UriError> {
    value.parse().map_err(|_| UriError::InvalidValue {
        name: spec.name().to_owned(),
        value: value.to_owned(),
        reason: "not an integer",
    })
}
