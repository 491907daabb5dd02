use crate::error::ExtractError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Sentinel rendered for any field that could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Categorical value for a product that has no rating yet.
pub const NOT_RATED: &str = "Not Rated";

/// A single extracted value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    NotRated,
    NotAvailable,
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, FieldValue::NotAvailable)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::NotRated => f.write_str(NOT_RATED),
            FieldValue::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::NotRated => serializer.serialize_str(NOT_RATED),
            FieldValue::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Why a field fell back to the `"N/A"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelReason {
    /// The field's element was not found inside the record
    MissingElement,
    /// The element was found but its text did not match the expected pattern
    UnparseableValue,
}

impl fmt::Display for SentinelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelReason::MissingElement => f.write_str("element not found"),
            SentinelReason::UnparseableValue => f.write_str("value not parseable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
    /// Set when `value` is the `"N/A"` sentinel
    pub failure: Option<SentinelReason>,
}

/// One extracted record. Holds exactly one field per declared field spec,
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    pub fn failure(&self, name: &str) -> Option<SentinelReason> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.failure)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn take(&self, name: &str) -> Result<FieldValue, ExtractError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ExtractError::MissingField(name.to_string()))
    }
}

// Keys are emitted in field order so JSON output matches declaration order
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

/// A product listing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: FieldValue,
    pub price: FieldValue,
    pub rating: FieldValue,
    pub availability: FieldValue,
}

impl TryFrom<&Record> for Product {
    type Error = ExtractError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Product {
            name: record.take("name")?,
            price: record.take("price")?,
            rating: record.take("rating")?,
            availability: record.take("availability")?,
        })
    }
}
