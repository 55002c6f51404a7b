//! Text-field parsing for the record and prediction forms.

use percept::{BinaryLabel, LabelError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    Missing(&'static str),
    NotANumber { field: &'static str, value: String },
    Label(LabelError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "{} is required", field),
            FormError::NotANumber { field, value } => {
                write!(f, "{}: '{}' is not a valid number", field, value)
            }
            FormError::Label(e) => write!(f, "{}", e),
        }
    }
}

impl Error for FormError {}

impl From<LabelError> for FormError {
    fn from(e: LabelError) -> Self {
        FormError::Label(e)
    }
}

/// Fields of the add / update / delete form.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub index: String,
    pub hours: String,
    pub percentage: String,
    pub label: String,
}

impl RecordForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fields of the prediction form.
#[derive(Debug, Clone, Default)]
pub struct PredictForm {
    pub hours: String,
    pub percentage: String,
}

pub fn parse_f64(field: &'static str, text: &str) -> Result<f64, FormError> {
    parse_optional_f64(field, text)?.ok_or(FormError::Missing(field))
}

/// A blank field parses to `None`.
pub fn parse_optional_f64(field: &'static str, text: &str) -> Result<Option<f64>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| FormError::NotANumber {
            field,
            value: text.to_string(),
        })
}

pub fn parse_index(text: &str) -> Result<usize, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormError::Missing("Index"));
    }
    text.parse::<usize>().map_err(|_| FormError::NotANumber {
        field: "Index",
        value: text.to_string(),
    })
}

pub fn parse_label(text: &str) -> Result<BinaryLabel, FormError> {
    parse_optional_label(text)?.ok_or(FormError::Missing("Label"))
}

pub fn parse_optional_label(text: &str) -> Result<Option<BinaryLabel>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let raw = text.parse::<i64>().map_err(|_| FormError::NotANumber {
        field: "Label",
        value: text.to_string(),
    })?;
    Ok(Some(BinaryLabel::try_from(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_f64("Hours", " 12.5 "), Ok(12.5));
        assert_eq!(parse_f64("Hours", ""), Err(FormError::Missing("Hours")));
        assert_eq!(
            parse_f64("Hours", "abc"),
            Err(FormError::NotANumber { field: "Hours", value: "abc".into() })
        );
        assert_eq!(parse_optional_f64("Hours", "   "), Ok(None));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3"), Ok(3));
        assert!(parse_index("-1").is_err());
        assert_eq!(parse_index(""), Err(FormError::Missing("Index")));
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("1"), Ok(BinaryLabel::Positive));
        assert_eq!(parse_optional_label(""), Ok(None));
        assert_eq!(
            parse_label("2"),
            Err(FormError::Label(LabelError::OutOfRange(2)))
        );
        assert!(parse_label("yes").is_err());
    }

    #[test]
    fn test_clear() {
        let mut form = RecordForm {
            index: "1".into(),
            hours: "2".into(),
            percentage: "3".into(),
            label: "0".into(),
        };
        form.clear();
        assert!(form.index.is_empty() && form.label.is_empty());
    }
}
