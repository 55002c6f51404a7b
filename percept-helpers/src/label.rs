use crate::Float;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced when converting a raw value into a [`BinaryLabel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The value was neither 0 nor 1.
    OutOfRange(i64),
}

impl Display for LabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelError::OutOfRange(v) => write!(f, "label must be 0 or 1, got {}", v),
        }
    }
}

impl Error for LabelError {}

/// A binary classification target.
///
/// `Negative` is encoded as 0 and `Positive` as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub enum BinaryLabel {
    Negative,
    Positive,
}

impl BinaryLabel {
    pub fn as_u8(self) -> u8 {
        match self {
            BinaryLabel::Negative => 0,
            BinaryLabel::Positive => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        self == BinaryLabel::Positive
    }

    /// The label as a float, 0.0 or 1.0.
    pub fn to_float<F: Float>(self) -> F {
        match self {
            BinaryLabel::Negative => F::zero(),
            BinaryLabel::Positive => F::one(),
        }
    }
}

impl From<bool> for BinaryLabel {
    fn from(positive: bool) -> Self {
        if positive {
            BinaryLabel::Positive
        } else {
            BinaryLabel::Negative
        }
    }
}

impl TryFrom<i64> for BinaryLabel {
    type Error = LabelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BinaryLabel::Negative),
            1 => Ok(BinaryLabel::Positive),
            other => Err(LabelError::OutOfRange(other)),
        }
    }
}

impl TryFrom<u8> for BinaryLabel {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        BinaryLabel::try_from(i64::from(value))
    }
}

impl Display for BinaryLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_valid() {
        assert_eq!(BinaryLabel::try_from(0i64), Ok(BinaryLabel::Negative));
        assert_eq!(BinaryLabel::try_from(1u8), Ok(BinaryLabel::Positive));
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(BinaryLabel::try_from(2i64), Err(LabelError::OutOfRange(2)));
        assert_eq!(BinaryLabel::try_from(-1i64), Err(LabelError::OutOfRange(-1)));
        assert_eq!(BinaryLabel::try_from(7u8), Err(LabelError::OutOfRange(7)));
    }

    #[test]
    fn test_encoding() {
        assert_eq!(BinaryLabel::Negative.as_u8(), 0);
        assert_eq!(BinaryLabel::Positive.to_float::<f64>(), 1.0);
        assert_eq!(BinaryLabel::Negative.to_float::<f32>(), 0.0);
        assert_eq!(BinaryLabel::from(true), BinaryLabel::Positive);
        assert_eq!(BinaryLabel::Positive.to_string(), "1");
    }
}
