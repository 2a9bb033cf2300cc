//! `transform: <function>+`, written as a list of single-key steps.
//!
//! The function list is reversed for output. Two-axis functions expand to
//! their Y step followed by their X step.

use crate::css::scalar::length_percentage;
use crate::css::style::{StyleValue, TransformStep};
use crate::css::values::{TokenKind, ValueToken};

use super::{Expansion, Invalid};

/// Argument grammar of a transform function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Argument {
    Number,
    Length,
    Angle,
}

impl Argument {
    fn parse(self, token: &ValueToken) -> Option<StyleValue> {
        match (self, &token.kind) {
            (_, TokenKind::Number(n)) => Some(StyleValue::Number(*n)),
            (Argument::Number, _) => None,
            (Argument::Length, _) => length_percentage(token),
            (Argument::Angle, TokenKind::Dimension(_, unit))
                if matches!(unit.as_str(), "deg" | "rad" | "grad" | "turn") =>
            {
                Some(StyleValue::from(token.text.as_str()))
            }
            (Argument::Angle, _) => None,
        }
    }
}

/// Canonical name and argument grammar for a function name.
fn lookup(name: &str) -> Option<(&'static str, Argument)> {
    let found = match name.to_ascii_lowercase().as_str() {
        "perspective" => ("perspective", Argument::Length),
        "scale" => ("scale", Argument::Number),
        "scalex" => ("scaleX", Argument::Number),
        "scaley" => ("scaleY", Argument::Number),
        "translate" => ("translate", Argument::Length),
        "translatex" => ("translateX", Argument::Length),
        "translatey" => ("translateY", Argument::Length),
        "rotate" => ("rotate", Argument::Angle),
        "rotatex" => ("rotateX", Argument::Angle),
        "rotatey" => ("rotateY", Argument::Angle),
        "rotatez" => ("rotateZ", Argument::Angle),
        "skew" => ("skew", Argument::Angle),
        "skewx" => ("skewX", Argument::Angle),
        "skewy" => ("skewY", Argument::Angle),
        _ => return None,
    };
    Some(found)
}

/// Second-axis value of a two-axis function given only one argument.
fn default_y(function: &str, x: &StyleValue) -> StyleValue {
    match (function, x) {
        ("scale", _) => x.clone(),
        ("skew", StyleValue::String(_)) => StyleValue::from("0deg"),
        _ => StyleValue::Number(0.0),
    }
}

/// Steps for one function, already in output order.
fn steps(token: &ValueToken) -> Result<Vec<TransformStep>, Invalid> {
    let name = match &token.kind {
        TokenKind::Function { name, .. } => name,
        _ => return Err(Invalid::Reason("expected a transform function")),
    };
    let (function, argument) = lookup(name).ok_or(Invalid::Reason("unknown transform function"))?;

    let arguments = token
        .arguments()
        .ok_or(Invalid::Reason("expected a transform function"))??;
    let arguments = arguments
        .iter()
        .map(|arg| match arg.as_slice() {
            [single] => argument
                .parse(single)
                .ok_or(Invalid::Reason("invalid transform argument")),
            _ => Err(Invalid::Reason("invalid transform argument")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pair = match function {
        "scale" => Some(("scaleX", "scaleY")),
        "translate" => Some(("translateX", "translateY")),
        "skew" => Some(("skewX", "skewY")),
        _ => None,
    };

    match (pair, arguments.as_slice()) {
        (None, [value]) => Ok(vec![TransformStep::new(function, value.clone())]),
        (Some((x_name, y_name)), [x]) => Ok(vec![
            TransformStep::new(y_name, default_y(function, x)),
            TransformStep::new(x_name, x.clone()),
        ]),
        (Some((x_name, y_name)), [x, y]) => Ok(vec![
            TransformStep::new(y_name, y.clone()),
            TransformStep::new(x_name, x.clone()),
        ]),
        _ => Err(Invalid::Reason("wrong number of transform arguments")),
    }
}

pub(crate) fn expand(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    if let [token] = tokens {
        if token.is_keyword("none") {
            return Ok(vec![("transform".to_string(), StyleValue::Transform(Vec::new()))]);
        }
    }

    let per_function = tokens.iter().map(steps).collect::<Result<Vec<_>, _>>()?;
    let list = per_function.into_iter().rev().flatten().collect();

    Ok(vec![("transform".to_string(), StyleValue::Transform(list))])
}
