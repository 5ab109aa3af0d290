use serde_json::{Map, Number, Value};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// A single value of an icon option.
///
/// Mirrors what a structured (JSON-like) literal can carry.
/// Floating point numbers are not validated here.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<OptionValue>),
    Map(IconOptions),
}

#[derive(Debug, Error, PartialEq)]
#[error("Icon option '{key}' is not a finite number: {value}")]
pub struct NonFiniteOption {
    pub key: String,
    pub value: f64,
}

impl OptionValue {
    /// Fails on NaN and infinite numbers, which have no JSON form.
    pub fn to_json(&self, key: &str) -> Result<Value, NonFiniteOption> {
        let json = match self {
            Self::Null => Value::Null,
            Self::Bool(v) => Value::Bool(*v),
            Self::Integer(v) => Value::Number((*v).into()),
            Self::Number(v) => Number::from_f64(*v)
                .map(Value::Number)
                .ok_or_else(|| NonFiniteOption {
                    key: key.to_owned(),
                    value: *v,
                })?,
            Self::Text(v) => Value::String(v.clone()),
            Self::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json(key))
                    .collect::<Result<_, _>>()?,
            ),
            Self::Map(options) => Value::Object(options.to_json()?),
        };
        Ok(json)
    }
}

impl From<bool> for OptionValue {
    fn from(from: bool) -> Self {
        Self::Bool(from)
    }
}

impl From<f64> for OptionValue {
    fn from(from: f64) -> Self {
        Self::Number(from)
    }
}

impl From<i32> for OptionValue {
    fn from(from: i32) -> Self {
        Self::Integer(i64::from(from))
    }
}

impl From<i64> for OptionValue {
    fn from(from: i64) -> Self {
        Self::Integer(from)
    }
}

impl From<&str> for OptionValue {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(from: Vec<T>) -> Self {
        Self::List(from.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for OptionValue {
    fn from(from: Value) -> Self {
        match from {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::Bool(v),
            Value::Number(n) => match n.as_i64() {
                Some(v) => Self::Integer(v),
                None => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(v) => Self::Text(v),
            Value::Array(items) => items.into(),
            Value::Object(options) => Self::Map(options.into()),
        }
    }
}

impl From<IconOptions> for OptionValue {
    fn from(from: IconOptions) -> Self {
        Self::Map(from)
    }
}

/// Opaque, insertion-ordered option mapping of an icon.
///
/// Passed through to the client as is, e.g. `iconUrl`,
/// `iconSize` or `html` for div-icons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconOptions(Vec<(String, OptionValue)>);

impl IconOptions {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts or replaces an option.
    ///
    /// A replaced option keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON object with the options in insertion order.
    pub fn to_json(&self) -> Result<Map<String, Value>, NonFiniteOption> {
        self.iter()
            .map(|(key, value)| Ok((key.to_owned(), value.to_json(key)?)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for IconOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl From<Map<String, Value>> for IconOptions {
    fn from(from: Map<String, Value>) -> Self {
        from.into_iter().collect()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum IconKind {
    Icon,
    DivIcon,
}

/// How a marker is drawn on the client.
///
/// Exactly one variant can be active on a marker at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum IconVariant {
    Icon(IconOptions),
    DivIcon(IconOptions),
}

impl IconVariant {
    pub const fn kind(&self) -> IconKind {
        match self {
            Self::Icon(_) => IconKind::Icon,
            Self::DivIcon(_) => IconKind::DivIcon,
        }
    }

    pub const fn options(&self) -> &IconOptions {
        match self {
            Self::Icon(options) | Self::DivIcon(options) => options,
        }
    }

    pub fn into_options(self) -> IconOptions {
        match self {
            Self::Icon(options) | Self::DivIcon(options) => options,
        }
    }

    pub const fn is_div_icon(&self) -> bool {
        matches!(self, Self::DivIcon(_))
    }
}
