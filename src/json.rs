use std::str::FromStr;

use serde_json::{Map, Value};

use crate::authors::{Authors, AuthorsShape};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::homepage::Homepage;
use crate::metadata::{PodspecFields, Source};

/// A podspec written in the JSON format (`*.podspec.json`).
///
/// Fields are read by direct key lookup on the top-level object.
///
/// # Examples
///
/// ```
/// use podspec_metadata::{JsonSpec, PodspecFields};
///
/// let spec: JsonSpec = r#"{"name": "BatteryHandlerSpec", "version": "0.0.2"}"#
///     .parse()
///     .unwrap();
/// assert_eq!(spec.name().unwrap(), "BatteryHandlerSpec");
/// assert!(spec.summary().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSpec {
    data: Map<String, Value>,
}

impl JsonSpec {
    /// Wrap an already parsed JSON object.
    pub fn new(data: Map<String, Value>) -> Self {
        JsonSpec { data }
    }

    fn get(&self, field: Field) -> Result<&Value> {
        self.data
            .get(field.key())
            .ok_or(Error::MissingField(field))
    }

    fn string(&self, field: Field) -> Result<String> {
        match self.get(field)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(unexpected(field, "a string", other)),
        }
    }

    /// Classify the `authors` value by its JSON type.
    pub fn authors_shape(&self) -> Result<AuthorsShape> {
        match self.get(Field::Authors)? {
            Value::String(name) => Ok(AuthorsShape::Single(name.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name.clone()),
                    other => Err(unexpected(Field::Authors, "a string author name", other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(AuthorsShape::List),
            Value::Object(entries) => entries
                .iter()
                .map(|(name, email)| match email {
                    Value::String(email) => Ok((name.clone(), email.clone())),
                    other => Err(unexpected(Field::Authors, "a string email", other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(AuthorsShape::Mapping),
            other => Err(unexpected(
                Field::Authors,
                "a string, an array or an object",
                other,
            )),
        }
    }
}

impl FromStr for JsonSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_object(s)? {
            Some(data) => Ok(JsonSpec::new(data)),
            None => Err(Error::MalformedDocument(
                "expected a JSON object at the top level".to_string(),
            )),
        }
    }
}

impl PodspecFields for JsonSpec {
    fn name(&self) -> Result<String> {
        self.string(Field::Name)
    }

    fn version(&self) -> Result<String> {
        self.string(Field::Version)
    }

    fn authors(&self) -> Result<Authors> {
        self.authors_shape()?.into_authors()
    }

    fn license(&self) -> Result<String> {
        self.string(Field::License)
    }

    fn homepage(&self) -> Result<Homepage> {
        self.string(Field::Homepage)?.parse()
    }

    fn source(&self) -> Result<Source> {
        match self.get(Field::Source)? {
            Value::Object(entries) => entries
                .iter()
                .map(|(kind, value)| match value {
                    Value::String(value) => Ok((kind.clone(), value.clone())),
                    other => Err(unexpected(Field::Source, "a string value", other)),
                })
                .collect(),
            other => Err(unexpected(Field::Source, "an object", other)),
        }
    }

    fn summary(&self) -> Result<String> {
        self.string(Field::Summary)
    }
}

/// Parse `s` as strict JSON.
///
/// Returns `Ok(None)` when the text is valid JSON but not an object, and
/// [`Error::Syntax`] when it is not valid JSON at all.
pub(crate) fn parse_object(s: &str) -> Result<Option<Map<String, Value>>> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(data)) => Ok(Some(data)),
        Ok(_) => Ok(None),
        Err(e) if e.is_syntax() || e.is_eof() => Err(Error::Syntax(format!("{e}"))),
        Err(e) => Err(Error::MalformedDocument(format!("{e}"))),
    }
}

fn unexpected(field: Field, expected: &str, found: &Value) -> Error {
    Error::invalid(
        field,
        format!("expected {expected}, found {}", value_kind(found)),
    )
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
