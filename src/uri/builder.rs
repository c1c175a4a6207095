use super::error::UriError;
use super::parameter::{ParameterKind, UriParameter};
use super::UriPart;

use std::collections::HashMap;

/// Fills in the parameters of a pattern to produce a path.
///
/// Values are inserted verbatim; encoding them is up to the caller.
#[derive(Debug, Clone)]
pub struct UriBuilder {
    parts: Vec<UriPart>,
    values: HashMap<String, String>,
}

impl UriBuilder {
    pub fn new(parts: Vec<UriPart>) -> Self {
        Self {
            parts,
            values: HashMap::new(),
        }
    }

    pub fn set_string(self, name: &str, value: &str) -> Result<Self, UriError> {
        self.set_value(name, "string", value.to_owned())
    }

    pub fn set_int(self, name: &str, value: i64) -> Result<Self, UriError> {
        self.set_value(name, "int", value.to_string())
    }

    pub fn set_enum(self, name: &str, value: &str) -> Result<Self, UriError> {
        self.set_value(name, "enum", value.to_owned())
    }

    pub fn path(&self) -> Result<String, UriError> {
        let mut uri = String::new();
        for part in &self.parts {
            match part {
                UriPart::Literal(text) => uri.push_str(text),
                UriPart::Parameter(param) => {
                    if uri.is_empty() {
                        uri.push('/');
                    }
                    let value = self.values.get(param.name()).ok_or_else(|| {
                        UriError::MissingValue {
                            name: param.name().to_owned(),
                        }
                    })?;
                    uri.push_str(value);
                }
            }
        }

        if !uri.starts_with('/') {
            return Err(UriError::NotAbsolute { path: uri });
        }
        Ok(uri)
    }

    fn parameter(&self, name: &str) -> Result<&UriParameter, UriError> {
        let mut names = Vec::new();
        for part in &self.parts {
            if let UriPart::Parameter(param) = part {
                if param.name() == name {
                    return Ok(param);
                }
                names.push(format!("'{}'", param.name()));
            }
        }
        Err(UriError::UnknownParameter {
            name: name.to_owned(),
            expected: names,
        })
    }

    fn set_value(mut self, name: &str, kind: &'static str, value: String) -> Result<Self, UriError> {
        let param = self.parameter(name)?;

        if param.kind_name() != kind {
            return Err(UriError::TypeMismatch {
                name: name.to_owned(),
                expected: kind,
                found: param.kind_name(),
            });
        }
        if let ParameterKind::Enum { .. } = param.kind() {
            param.validate(&value)?;
        }
        if self.values.contains_key(name) {
            return Err(UriError::AlreadySet {
                name: name.to_owned(),
            });
        }

        self.values.insert(name.to_owned(), value);
        Ok(self)
    }
}
