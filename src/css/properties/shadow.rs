//! `box-shadow`, `text-shadow` and the explicit offset properties.

use crate::css::scalar::length;
use crate::css::style::StyleValue;
use crate::css::values::ValueToken;

use super::{color_text, Expansion, Invalid};

/// Which shadow family a declaration writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowKind {
    /// `box-shadow` → `shadow*`, plus a constant `shadowOpacity`.
    Box,
    /// `text-shadow` → `textShadow*`.
    Text,
}

impl ShadowKind {
    fn prefix(self) -> &'static str {
        match self {
            ShadowKind::Box => "shadow",
            ShadowKind::Text => "textShadow",
        }
    }
}

struct Shadow {
    offset_x: StyleValue,
    offset_y: StyleValue,
    radius: StyleValue,
    color: StyleValue,
}

impl Shadow {
    fn none() -> Self {
        Self {
            offset_x: StyleValue::Number(0.0),
            offset_y: StyleValue::Number(0.0),
            radius: StyleValue::Number(0.0),
            color: StyleValue::from("black"),
        }
    }
}

/// `[<color>] <offset-x> <offset-y> [<blur-radius>] [<color>]`, or `none`.
fn parse(tokens: &[ValueToken]) -> Result<Shadow, Invalid> {
    if let [token] = tokens {
        if token.is_keyword("none") {
            return Ok(Shadow::none());
        }
    }

    let mut rest = tokens;
    let mut color = None;

    if let Some((first, tail)) = rest.split_first() {
        if length(first).is_none() {
            color = Some(color_text(first).ok_or(Invalid::Reason("invalid shadow color"))?);
            rest = tail;
        }
    }

    let lengths = rest.iter().map_while(length).take(3).collect::<Vec<_>>();
    rest = &rest[lengths.len()..];

    let mut lengths = lengths.into_iter();
    let (offset_x, offset_y) = match (lengths.next(), lengths.next()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(Invalid::Reason("shadow needs offset-x and offset-y")),
    };
    let radius = lengths.next().unwrap_or(StyleValue::Number(0.0));

    match rest {
        [] => {}
        [token] if color.is_none() => {
            color = Some(color_text(token).ok_or(Invalid::Reason("invalid shadow color"))?);
        }
        _ => return Err(Invalid::Reason("multiple colors")),
    }

    Ok(Shadow {
        offset_x,
        offset_y,
        radius,
        color: color.unwrap_or_else(|| StyleValue::from("black")),
    })
}

pub(crate) fn expand(kind: ShadowKind, tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let shadow = parse(tokens)?;
    let prefix = kind.prefix();

    let mut out = vec![
        (
            format!("{prefix}Offset"),
            StyleValue::offset(shadow.offset_x, shadow.offset_y),
        ),
        (format!("{prefix}Radius"), shadow.radius),
        (format!("{prefix}Color"), shadow.color),
    ];
    if kind == ShadowKind::Box {
        out.push(("shadowOpacity".to_string(), StyleValue::Number(1.0)));
    }
    Ok(out)
}

/// `shadow-offset: <width> [<height>]`; height mirrors width when omitted.
pub(crate) fn expand_offset(key: &str, tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let lengths = tokens
        .iter()
        .map(|token| length(token).ok_or(Invalid::Reason("invalid offset")))
        .collect::<Result<Vec<_>, _>>()?;

    let offset = match lengths.as_slice() {
        [both] => StyleValue::offset(both.clone(), both.clone()),
        [width, height] => StyleValue::offset(width.clone(), height.clone()),
        _ => return Err(Invalid::Reason("expected 1-2 offset values")),
    };
    Ok(vec![(key.to_string(), offset)])
}
