//! `background`: only a bare color is supported.

use crate::css::color::is_color;
use crate::css::style::StyleValue;
use crate::css::values::ValueToken;

use super::{Expansion, Invalid};

pub(crate) fn expand(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    match tokens {
        [token] if is_color(token) => Ok(vec![(
            "backgroundColor".to_string(),
            StyleValue::from(token.text.as_str()),
        )]),
        _ => Err(Invalid::Reason("background only supports a color")),
    }
}
