//! Length normalization: px, rem, relative units, percentages, zero.
//!
//! Pixel lengths become plain numbers and root-relative lengths are scaled by
//! [`ROOT_FONT_SIZE`]. Other relative units and percentages have no fixed
//! pixel value and pass through as their original text.

use crate::css::style::StyleValue;
use crate::css::values::{classify, TokenKind, ValueToken};

/// Pixel size of `1rem`.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// How a length unit normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `px`: the number itself.
    Pixels,
    /// `rem`: the number times [`ROOT_FONT_SIZE`].
    Root,
    /// `em`, `vw`, `pt`, ...: kept as text.
    Relative,
}

impl Unit {
    /// Look up a lowercased unit name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "px" => Some(Unit::Pixels),
            "rem" => Some(Unit::Root),
            "em" | "ex" | "ch" | "vw" | "vh" | "vmin" | "vmax" | "cm" | "mm" | "q" | "in"
            | "pt" | "pc" => Some(Unit::Relative),
            _ => None,
        }
    }
}

/// Normalize a token that must be a length.
///
/// Zero is unit-exempt: `0`, `0px` and `0rem` all give the number 0. A
/// non-zero number without a unit is not a length. Percentages are rejected
/// here; see [`length_percentage`].
pub fn length(token: &ValueToken) -> Option<StyleValue> {
    match &token.kind {
        TokenKind::Number(n) if *n == 0.0 => Some(StyleValue::Number(0.0)),
        TokenKind::Dimension(n, unit) => match Unit::from_name(unit)? {
            _ if *n == 0.0 => Some(StyleValue::Number(0.0)),
            Unit::Pixels => Some(StyleValue::Number(*n)),
            Unit::Root => root(*n),
            Unit::Relative => Some(StyleValue::String(token.text.clone())),
        },
        _ => None,
    }
}

/// A `rem` amount in pixels, unless scaling overflows.
fn root(n: f64) -> Option<StyleValue> {
    Some(n * ROOT_FONT_SIZE)
        .filter(|px| px.is_finite())
        .map(StyleValue::Number)
}

/// Like [`length`], additionally accepting a percentage as its original text.
pub fn length_percentage(token: &ValueToken) -> Option<StyleValue> {
    match token.kind {
        TokenKind::Percentage(_) => Some(StyleValue::String(token.text.clone())),
        _ => length(token),
    }
}

/// Like [`length_percentage`], additionally accepting `auto` as `"auto"`.
pub fn length_percentage_auto(token: &ValueToken) -> Option<StyleValue> {
    if token.is_keyword("auto") {
        return Some(StyleValue::from("auto"));
    }
    length_percentage(token)
}

/// Value of a property with no dedicated expander.
///
/// A bare number or a `px` length becomes a number and `rem` is scaled; any
/// other value, including multi-word values, is kept as trimmed text.
pub fn passthrough(raw: &str) -> StyleValue {
    let raw = raw.trim();
    let token = classify(raw);
    match &token.kind {
        TokenKind::Number(n) => StyleValue::Number(*n),
        TokenKind::Dimension(n, unit) => match Unit::from_name(unit) {
            Some(Unit::Pixels) => StyleValue::Number(*n),
            Some(Unit::Root) => root(*n).unwrap_or_else(|| StyleValue::from(raw)),
            _ => StyleValue::from(raw),
        },
        _ => StyleValue::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(text: &str) -> Option<StyleValue> {
        length(&classify(text))
    }

    #[test]
    fn pixels_are_numbers() {
        assert_eq!(len("10px"), Some(StyleValue::Number(10.0)));
        assert_eq!(len("0.5px"), Some(StyleValue::Number(0.5)));
        assert_eq!(len("-100.5px"), Some(StyleValue::Number(-100.5)));
        assert_eq!(len(".5px"), Some(StyleValue::Number(0.5)));
    }

    #[test]
    fn rem_is_scaled() {
        assert_eq!(len("1rem"), Some(StyleValue::Number(16.0)));
        assert_eq!(len("1.5rem"), Some(StyleValue::Number(24.0)));
        assert_eq!(len(".5625rem"), Some(StyleValue::Number(9.0)));
    }

    #[test]
    fn zero_is_unit_exempt() {
        assert_eq!(len("0"), Some(StyleValue::Number(0.0)));
        assert_eq!(len("0px"), Some(StyleValue::Number(0.0)));
        assert_eq!(len("0rem"), Some(StyleValue::Number(0.0)));
        assert_eq!(len("0em"), Some(StyleValue::Number(0.0)));
        assert_eq!(len("0.0"), Some(StyleValue::Number(0.0)));
    }

    #[test]
    fn unitless_non_zero_is_rejected() {
        assert_eq!(len("10"), None);
        assert_eq!(len("-0.5"), None);
    }

    #[test]
    fn relative_units_pass_through() {
        assert_eq!(len("2em"), Some(StyleValue::from("2em")));
        assert_eq!(len("50vh"), Some(StyleValue::from("50vh")));
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert_eq!(len("5deg"), None);
        assert_eq!(len("3fr"), None);
    }

    #[test]
    fn percentages() {
        assert_eq!(len("10%"), None);
        assert_eq!(length_percentage(&classify("10%")), Some(StyleValue::from("10%")));
        assert_eq!(length_percentage(&classify("0%")), Some(StyleValue::from("0%")));
    }

    #[test]
    fn auto_keyword() {
        assert_eq!(length_percentage_auto(&classify("AUTO")), Some(StyleValue::from("auto")));
        assert_eq!(length_percentage(&classify("auto")), None);
    }

    #[test]
    fn non_lengths_are_rejected() {
        assert_eq!(len("red"), None);
        assert_eq!(len("#fff"), None);
        assert_eq!(len("\"10px\""), None);
    }

    #[test]
    fn passthrough_values() {
        assert_eq!(passthrough("0"), StyleValue::Number(0.0));
        assert_eq!(passthrough("10"), StyleValue::Number(10.0));
        assert_eq!(passthrough(" 18px "), StyleValue::Number(18.0));
        assert_eq!(passthrough("1rem"), StyleValue::Number(16.0));
        assert_eq!(passthrough("0%"), StyleValue::from("0%"));
        assert_eq!(passthrough("2em"), StyleValue::from("2em"));
        assert_eq!(passthrough("center"), StyleValue::from("center"));
        assert_eq!(passthrough("#656656"), StyleValue::from("#656656"));
        assert_eq!(passthrough("rgb(255, 0, 0)"), StyleValue::from("rgb(255, 0, 0)"));
        assert_eq!(passthrough("16 / 9"), StyleValue::from("16 / 9"));
    }

    #[test]
    fn overflowing_numbers_are_not_lengths() {
        assert_eq!(len("1e999px"), None);
        assert_eq!(len("1e308rem"), None);
        assert_eq!(passthrough("1e999"), StyleValue::from("1e999"));
        assert_eq!(passthrough("1e308rem"), StyleValue::from("1e308rem"));
    }
}
