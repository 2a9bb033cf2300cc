//! `text-decoration` and `text-decoration-line`.

use crate::css::style::StyleValue;
use crate::css::values::ValueToken;

use super::{color_text, fill, keyword_in, Expansion, Invalid};

const STYLES: &[&str] = &["solid", "double", "dotted", "dashed"];

/// Line keywords seen so far. Rendered in canonical order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Lines {
    underline: bool,
    line_through: bool,
    none: bool,
}

impl Lines {
    /// Record a line keyword; returns `false` if the token is not one.
    fn accept(&mut self, token: &ValueToken) -> bool {
        match token.keyword().as_deref() {
            Some("underline") => self.underline = true,
            Some("line-through") => self.line_through = true,
            Some("none") => self.none = true,
            _ => return false,
        }
        true
    }

    fn render(self) -> String {
        if self.none {
            return "none".to_string();
        }
        match (self.underline, self.line_through) {
            (true, true) => "underline line-through".to_string(),
            (true, false) => "underline".to_string(),
            (false, true) => "line-through".to_string(),
            (false, false) => "none".to_string(),
        }
    }
}

/// `text-decoration: <line>* || <style> || <color>`
pub(crate) fn expand(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let mut lines = Lines::default();
    let mut style = None;
    let mut color = None;

    for token in tokens {
        if lines.accept(token) {
            continue;
        }
        if let Some(s) = keyword_in(token, STYLES) {
            fill(&mut style, s, "multiple decoration styles")?;
        } else if let Some(c) = color_text(token) {
            fill(&mut color, c, "multiple colors")?;
        } else {
            return Err(Invalid::Reason("unrecognized decoration value"));
        }
    }

    Ok(vec![
        ("textDecorationLine".to_string(), StyleValue::from(lines.render())),
        ("textDecorationStyle".to_string(), StyleValue::from(style.unwrap_or_else(|| "solid".into()))),
        ("textDecorationColor".to_string(), color.unwrap_or_else(|| StyleValue::from("black"))),
    ])
}

/// `text-decoration-line: none | [underline || line-through]`
pub(crate) fn expand_line(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let mut lines = Lines::default();
    for token in tokens {
        if !lines.accept(token) {
            return Err(Invalid::Reason("unrecognized decoration line"));
        }
    }
    Ok(vec![("textDecorationLine".to_string(), StyleValue::from(lines.render()))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::values::tokenize_value;
    use pretty_assertions::assert_eq;

    fn run(value: &str) -> Result<Expansion, Invalid> {
        expand(&tokenize_value(value).unwrap())
    }

    fn decoration(line: &str, style: &str, color: &str) -> Expansion {
        vec![
            ("textDecorationLine".to_string(), StyleValue::from(line)),
            ("textDecorationStyle".to_string(), StyleValue::from(style)),
            ("textDecorationColor".to_string(), StyleValue::from(color)),
        ]
    }

    #[test]
    fn full_value() {
        assert_eq!(run("underline dotted red").unwrap(), decoration("underline", "dotted", "red"));
    }

    #[test]
    fn defaults() {
        assert_eq!(run("underline").unwrap(), decoration("underline", "solid", "black"));
        assert_eq!(run("underline red").unwrap(), decoration("underline", "solid", "red"));
    }

    #[test]
    fn line_order_is_canonical() {
        let expected = decoration("underline line-through", "dashed", "red");
        assert_eq!(run("underline line-through dashed red").unwrap(), expected);
        assert_eq!(run("dashed red line-through underline").unwrap(), expected);
        assert_eq!(
            run("yellow UNDERLINE LINE-THROUGH").unwrap(),
            decoration("underline line-through", "solid", "yellow")
        );
    }

    #[test]
    fn none_overrides_lines() {
        assert_eq!(run("none").unwrap(), decoration("none", "solid", "black"));
        assert_eq!(run("yellow NONE").unwrap(), decoration("none", "solid", "yellow"));
        assert_eq!(run("underline none").unwrap(), decoration("none", "solid", "black"));
    }

    #[test]
    fn multiple_colors_fail() {
        assert!(run("underline red yellow").is_err());
    }

    #[test]
    fn repeated_style_fails() {
        assert!(run("underline solid dashed").is_err());
    }

    #[test]
    fn line_only() {
        let line = |v: &str| expand_line(&tokenize_value(v).unwrap());
        let expected = |s: &str| vec![("textDecorationLine".to_string(), StyleValue::from(s))];
        assert_eq!(line("underline line-through").unwrap(), expected("underline line-through"));
        assert_eq!(line("line-through underline").unwrap(), expected("underline line-through"));
        assert_eq!(line("none").unwrap(), expected("none"));
        assert!(line("underline red").is_err());
    }
}
