//! Output values: StyleValue, TransformStep, StyleMap.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Flat attribute map for one selector: output key → value.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A single output attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Plain number, e.g. a normalized pixel length.
    Number(f64),
    /// Text: keywords, colors, percentages, relative lengths.
    String(String),
    /// Ordered list of keywords (`fontVariant`).
    List(Vec<String>),
    /// Shadow offset `{width, height}`.
    Offset {
        width: Box<StyleValue>,
        height: Box<StyleValue>,
    },
    /// Ordered transform list of single-key objects.
    Transform(Vec<TransformStep>),
}

impl StyleValue {
    /// Build an offset from its two components.
    pub fn offset(width: StyleValue, height: StyleValue) -> Self {
        StyleValue::Offset {
            width: Box::new(width),
            height: Box::new(height),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

/// One entry of a transform list, serialized as `{ function: value }`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStep {
    pub function: String,
    pub value: StyleValue,
}

impl TransformStep {
    pub fn new(function: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        Self {
            function: function.into(),
            value: value.into(),
        }
    }
}

/// Integral numbers serialize as integers so `10.0` reads as `10`.
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(n) => serialize_number(*n, serializer),
            StyleValue::String(s) => serializer.serialize_str(s),
            StyleValue::List(items) => items.serialize(serializer),
            StyleValue::Offset { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
            StyleValue::Transform(steps) => {
                let mut seq = serializer.serialize_seq(Some(steps.len()))?;
                for step in steps {
                    seq.serialize_element(step)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for TransformStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.function, &self.value)?;
        map.end()
    }
}
