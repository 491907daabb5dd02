use crate::model::{FieldValue, SentinelReason, NOT_RATED};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([\d.]+)").unwrap());
static RATING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([\d.]+)/5").unwrap());

/// How the stripped text of a field becomes a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Coercion {
    /// Keep the text verbatim
    #[default]
    Identity,
    /// `"Price: $1200.99"` -> `1200.99`
    Currency,
    /// `"Rating: 4.5/5"` -> `4.5`, or the `"Not Rated"` label
    Rating,
}

impl Coercion {
    pub fn apply(&self, text: &str) -> Result<FieldValue, SentinelReason> {
        match self {
            Coercion::Identity => Ok(FieldValue::Text(text.to_string())),
            Coercion::Currency => parse_currency(text),
            Coercion::Rating => parse_rating(text),
        }
    }
}

pub fn parse_currency(text: &str) -> Result<FieldValue, SentinelReason> {
    capture_number(&PRICE, text)
        .map(FieldValue::Number)
        .ok_or(SentinelReason::UnparseableValue)
}

pub fn parse_rating(text: &str) -> Result<FieldValue, SentinelReason> {
    if let Some(rating) = capture_number(&RATING, text) {
        Ok(FieldValue::Number(rating))
    } else if text.contains(NOT_RATED) {
        Ok(FieldValue::NotRated)
    } else {
        Err(SentinelReason::UnparseableValue)
    }
}

// `[\d.]+` also accepts things like "1.2.3"; those fail the float parse
fn capture_number(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(
            parse_currency("Price: $1200.99"),
            Ok(FieldValue::Number(1200.99))
        );
        assert_eq!(parse_currency("$75.00"), Ok(FieldValue::Number(75.0)));
        assert_eq!(
            parse_currency("Price: TBD"),
            Err(SentinelReason::UnparseableValue)
        );
        assert_eq!(
            parse_currency("Price: $1.2.3"),
            Err(SentinelReason::UnparseableValue)
        );
    }

    #[test]
    fn test_rating() {
        assert_eq!(parse_rating("Rating: 4.5/5"), Ok(FieldValue::Number(4.5)));
        assert_eq!(parse_rating("Rating: Not Rated"), Ok(FieldValue::NotRated));
        assert_eq!(
            parse_rating("Rating: ???"),
            Err(SentinelReason::UnparseableValue)
        );
    }

    #[test]
    fn test_identity_keeps_text() {
        assert_eq!(
            Coercion::Identity.apply("In Stock"),
            Ok(FieldValue::Text("In Stock".to_string()))
        );
    }

    #[test]
    fn test_coercion_deserializes_snake_case() {
        let rule: Coercion = serde_json::from_str(r#""currency""#).unwrap();
        assert_eq!(rule, Coercion::Currency);
    }
}
