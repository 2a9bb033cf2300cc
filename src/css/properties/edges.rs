//! 1–4 value box expansion: margin, padding, border-width, border-color,
//! border-radius.

use crate::css::scalar::{length, length_percentage, length_percentage_auto};
use crate::css::style::StyleValue;
use crate::css::values::ValueToken;

use super::{color_text, Expansion, Invalid};

/// Four positional values. For corner sets the fields read as
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> Edges<T> {
    /// The same value on all four edges.
    pub fn all(v: T) -> Self {
        Self {
            top: v.clone(),
            right: v.clone(),
            bottom: v.clone(),
            left: v,
        }
    }

    /// Symmetric vertical and horizontal values.
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    fn into_array(self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Expand 1-4 tokens into [`Edges`] with the CSS positional rule.
///
/// - 1 value: all edges
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub(crate) fn box_edges<T, F>(tokens: &[ValueToken], normalize: F) -> Result<Edges<T>, Invalid>
where
    T: Clone,
    F: Fn(&ValueToken) -> Option<T>,
{
    let values = tokens
        .iter()
        .map(|token| normalize(token).ok_or(Invalid::Reason("invalid edge value")))
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [v] => Ok(Edges::all(v.clone())),
        [vertical, horizontal] => Ok(Edges::symmetric(vertical.clone(), horizontal.clone())),
        [top, horizontal, bottom] => Ok(Edges::new(
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        )),
        [top, right, bottom, left] => Ok(Edges::new(
            top.clone(),
            right.clone(),
            bottom.clone(),
            left.clone(),
        )),
        _ => Err(Invalid::Reason("expected 1-4 values")),
    }
}

/// Properties sharing the box expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSet {
    Margin,
    Padding,
    BorderWidth,
    BorderColor,
    BorderRadius,
}

impl EdgeSet {
    /// Output keys in positional order.
    pub fn keys(self) -> [&'static str; 4] {
        match self {
            EdgeSet::Margin => ["marginTop", "marginRight", "marginBottom", "marginLeft"],
            EdgeSet::Padding => ["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"],
            EdgeSet::BorderWidth => [
                "borderTopWidth",
                "borderRightWidth",
                "borderBottomWidth",
                "borderLeftWidth",
            ],
            EdgeSet::BorderColor => [
                "borderTopColor",
                "borderRightColor",
                "borderBottomColor",
                "borderLeftColor",
            ],
            EdgeSet::BorderRadius => [
                "borderTopLeftRadius",
                "borderTopRightRadius",
                "borderBottomRightRadius",
                "borderBottomLeftRadius",
            ],
        }
    }

    /// Single key emitted for a one-value declaration, if the set has one.
    pub fn collapsed_key(self) -> Option<&'static str> {
        match self {
            EdgeSet::Margin | EdgeSet::Padding => None,
            EdgeSet::BorderWidth => Some("borderWidth"),
            EdgeSet::BorderColor => Some("borderColor"),
            EdgeSet::BorderRadius => Some("borderRadius"),
        }
    }

    fn normalize(self, token: &ValueToken) -> Option<StyleValue> {
        match self {
            EdgeSet::Margin => length_percentage_auto(token),
            EdgeSet::Padding | EdgeSet::BorderRadius => length_percentage(token),
            EdgeSet::BorderWidth => length(token),
            EdgeSet::BorderColor => color_text(token),
        }
    }
}

pub(crate) fn expand(set: EdgeSet, tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let edges = box_edges(tokens, |token| set.normalize(token))?;

    if let (Some(key), [_]) = (set.collapsed_key(), tokens) {
        return Ok(vec![(key.to_string(), edges.top)]);
    }

    Ok(set
        .keys()
        .into_iter()
        .map(str::to_string)
        .zip(edges.into_array())
        .collect())
}
