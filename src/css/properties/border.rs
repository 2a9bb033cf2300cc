//! `border: <width> || <style> || <color>`.

use crate::css::scalar::length;
use crate::css::style::StyleValue;
use crate::css::values::ValueToken;

use super::{color_text, fill, keyword_in, Expansion, Invalid};

const STYLES: &[&str] = &[
    "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset", "none",
];

/// Role a border token plays, tried in this order.
#[derive(Debug, Clone, PartialEq)]
enum Role {
    Width(StyleValue),
    Style(String),
    Color(StyleValue),
}

fn classify(token: &ValueToken) -> Option<Role> {
    if let Some(width) = length(token) {
        return Some(Role::Width(width));
    }
    if let Some(style) = keyword_in(token, STYLES) {
        return Some(Role::Style(style));
    }
    color_text(token).map(Role::Color)
}

pub(crate) fn expand(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    if tokens.len() > 3 {
        return Err(Invalid::Reason("expected at most 3 border values"));
    }

    let mut width = None;
    let mut style = None;
    let mut color = None;

    for token in tokens {
        match classify(token).ok_or(Invalid::Reason("unrecognized border value"))? {
            Role::Width(v) => fill(&mut width, v, "multiple border widths")?,
            Role::Style(v) => fill(&mut style, v, "multiple border styles")?,
            Role::Color(v) => fill(&mut color, v, "multiple border colors")?,
        }
    }

    Ok(vec![
        ("borderWidth".to_string(), width.unwrap_or(StyleValue::Number(1.0))),
        ("borderStyle".to_string(), StyleValue::from(style.unwrap_or_else(|| "solid".into()))),
        ("borderColor".to_string(), color.unwrap_or_else(|| StyleValue::from("black"))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::values::tokenize_value;
    use pretty_assertions::assert_eq;

    fn run(value: &str) -> Result<Expansion, Invalid> {
        expand(&tokenize_value(value).unwrap())
    }

    fn border(width: StyleValue, style: &str, color: &str) -> Expansion {
        vec![
            ("borderWidth".to_string(), width),
            ("borderStyle".to_string(), StyleValue::from(style)),
            ("borderColor".to_string(), StyleValue::from(color)),
        ]
    }

    #[test]
    fn all_permutations_agree() {
        let expected = border(StyleValue::Number(2.0), "dashed", "#f00");
        for value in [
            "2px dashed #f00",
            "2px #f00 dashed",
            "dashed 2px #f00",
            "dashed #f00 2px",
            "#f00 2px dashed",
            "#f00 dashed 2px",
        ] {
            assert_eq!(run(value).unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(run("2px").unwrap(), border(StyleValue::Number(2.0), "solid", "black"));
        assert_eq!(run("dashed").unwrap(), border(StyleValue::Number(1.0), "dashed", "black"));
        assert_eq!(run("#f00").unwrap(), border(StyleValue::Number(1.0), "solid", "#f00"));
    }

    #[test]
    fn style_is_lowercased_color_is_not() {
        assert_eq!(
            run("DOTTED Red").unwrap(),
            border(StyleValue::Number(1.0), "dotted", "Red")
        );
    }

    #[test]
    fn repeated_roles_fail() {
        assert!(run("1px 2px").is_err());
        assert!(run("solid dashed").is_err());
        assert!(run("red blue").is_err());
    }

    #[test]
    fn invalid_values_fail() {
        assert!(run("2 solid").is_err());
        assert!(run("1px solid red extra").is_err());
        assert!(run("'red'").is_err());
    }
}
