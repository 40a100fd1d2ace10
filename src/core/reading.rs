//! Input normalization for calibration readings
//!
//! Record data comes out of a document store where numeric fields are
//! sometimes numbers, sometimes strings and sometimes missing. Every engine
//! entry point normalizes its inputs exactly once into a [`Reading`].

use serde::{Deserialize, Deserializer, Serialize};

/// A field value as it appears in a calibration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    /// A JSON/YAML number
    Number(f64),
    /// A string, which may or may not hold a number
    Text(String),
    /// An explicit `null` / `~`
    Null,
}

impl RawReading {
    /// Normalize as a measured value (numbers only)
    pub fn strict(&self) -> Reading {
        match self {
            RawReading::Number(n) => Reading::from(*n),
            RawReading::Text(_) | RawReading::Null => Reading::Invalid,
        }
    }

    /// Normalize as a descriptive field, accepting numeric text
    pub fn lenient(&self) -> Reading {
        match self {
            RawReading::Number(n) => Reading::from(*n),
            RawReading::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Reading::from)
                .unwrap_or(Reading::Invalid),
            RawReading::Null => Reading::Invalid,
        }
    }

    /// Interpret as a non-negative count, truncating any fraction
    pub fn as_count(&self) -> Option<usize> {
        let value = self.lenient().value()?;
        if value < 0.0 {
            return None;
        }
        Some(value.trunc() as usize)
    }
}

impl From<f64> for RawReading {
    fn from(value: f64) -> Self {
        RawReading::Number(value)
    }
}

impl From<&str> for RawReading {
    fn from(value: &str) -> Self {
        RawReading::Text(value.to_string())
    }
}

/// Deserialize a code field stored either as text or as a bare number
///
/// `3` and `"3"` both read as `"3"`; `null` reads as missing.
pub fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawReading>::deserialize(deserializer)? {
        Some(RawReading::Number(n)) => Some(n.to_string()),
        Some(RawReading::Text(s)) => Some(s),
        Some(RawReading::Null) | None => None,
    })
}

/// A normalized numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// A finite number
    Valid(f64),
    /// Missing, non-numeric, NaN or infinite
    Invalid,
}

impl Reading {
    /// The numeric value, if valid
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Valid(v) => Some(v),
            Reading::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Reading::Valid(_))
    }

    /// Normalize an optional record field as a measured value
    pub fn strict(raw: Option<&RawReading>) -> Self {
        raw.map(RawReading::strict).unwrap_or(Reading::Invalid)
    }

    /// Normalize an optional record field as a descriptive value
    pub fn lenient(raw: Option<&RawReading>) -> Self {
        raw.map(RawReading::lenient).unwrap_or(Reading::Invalid)
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Reading::Valid(value)
        } else {
            Reading::Invalid
        }
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map(Reading::from).unwrap_or(Reading::Invalid)
    }
}

impl From<&RawReading> for Reading {
    fn from(raw: &RawReading) -> Self {
        raw.strict()
    }
}

impl From<Option<&RawReading>> for Reading {
    fn from(raw: Option<&RawReading>) -> Self {
        Reading::strict(raw)
    }
}
