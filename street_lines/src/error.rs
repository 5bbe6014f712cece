use std::string::FromUtf8Error;

use thiserror::Error;

/// A coordinate or angle that cannot be used to place a parking rectangle.
/// Adapters map this to a client error (HTTP 400, CLI usage failure).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{field} must be numeric, got {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Everything that can stop a parking rectangle from being produced.
/// Only [`ParkingError::InvalidInput`] is the caller's fault.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ParkingError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("vertex {index} of the rectangle is not a finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("could not serialize rectangles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("serialized rectangles are not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl ParkingError {
    /// True when the caller supplied bad coordinates, as opposed to the
    /// computation itself failing.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_field() {
        let err = InvalidInput::NotNumeric {
            field: "latitude_top_left",
            value: "invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "latitude_top_left must be numeric, got \"invalid\""
        );
    }

    #[test]
    fn test_invalid_input_is_transparent() {
        let err: ParkingError = InvalidInput::NotFinite {
            field: "orientation",
        }
        .into();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "orientation must be a finite number");
        let err = ParkingError::NonFiniteVertex { index: 2 };
        assert!(!err.is_invalid_input());
    }
}
