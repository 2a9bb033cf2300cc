//! `font` shorthand and standalone `font-family`.

use crate::css::scalar::length;
use crate::css::style::StyleValue;
use crate::css::values::{TokenKind, ValueToken};

use super::{fill, keyword_in, Expansion, Invalid};

const STYLES: &[&str] = &["italic", "oblique"];
const WEIGHTS: &[&str] = &["bold", "bolder", "lighter"];
const VARIANTS: &[&str] = &[
    "small-caps",
    "oldstyle-nums",
    "lining-nums",
    "tabular-nums",
    "proportional-nums",
];

/// A keyword in front of the font size.
enum Leading {
    Normal,
    Style(String),
    Weight(String),
    Variant(String),
}

fn leading(token: &ValueToken) -> Option<Leading> {
    if token.is_keyword("normal") {
        return Some(Leading::Normal);
    }
    if let Some(style) = keyword_in(token, STYLES) {
        return Some(Leading::Style(style));
    }
    if let Some(weight) = keyword_in(token, WEIGHTS) {
        return Some(Leading::Weight(weight));
    }
    if let Some(variant) = keyword_in(token, VARIANTS) {
        return Some(Leading::Variant(variant));
    }
    match token.number() {
        Some(n) if n.fract() == 0.0 && (1.0..=1000.0).contains(&n) => {
            Some(Leading::Weight(token.text.clone()))
        }
        _ => None,
    }
}

/// `font: [<style> || <weight> || <variant>]* <size>[/<line-height>] <family>`
pub(crate) fn expand(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let mut style = None;
    let mut weight = None;
    let mut variant = Vec::new();

    let size_at = tokens
        .iter()
        .position(|token| length(token).is_some())
        .ok_or(Invalid::Reason("missing font size"))?;

    for token in &tokens[..size_at] {
        match leading(token).ok_or(Invalid::Reason("unrecognized font keyword"))? {
            Leading::Normal => {}
            Leading::Style(v) => fill(&mut style, v, "multiple font styles")?,
            Leading::Weight(v) => fill(&mut weight, v, "multiple font weights")?,
            Leading::Variant(v) => variant.push(v),
        }
    }

    let size = length(&tokens[size_at]).ok_or(Invalid::Reason("missing font size"))?;
    let mut rest = &tokens[size_at + 1..];

    let mut line_height = None;
    if let [slash, tail @ ..] = rest {
        if slash.kind == TokenKind::Slash {
            let (token, tail) = tail
                .split_first()
                .ok_or(Invalid::Reason("missing line height"))?;
            line_height = Some(resolve_line_height(token, &size)?);
            rest = tail;
        }
    }

    let family = family_name(rest)?;

    let mut out = vec![
        ("fontFamily".to_string(), StyleValue::from(family)),
        ("fontSize".to_string(), size),
        ("fontWeight".to_string(), StyleValue::from(weight.unwrap_or_else(|| "normal".into()))),
        ("fontStyle".to_string(), StyleValue::from(style.unwrap_or_else(|| "normal".into()))),
        ("fontVariant".to_string(), StyleValue::List(variant)),
    ];
    if let Some(line_height) = line_height {
        out.push(("lineHeight".to_string(), line_height));
    }
    Ok(out)
}

/// A bare number multiplies a numeric font size; a length stands alone.
fn resolve_line_height(token: &ValueToken, size: &StyleValue) -> Result<StyleValue, Invalid> {
    if let Some(factor) = token.number() {
        return size
            .as_number()
            .map(|size| size * factor)
            .filter(|px| px.is_finite())
            .map(StyleValue::Number)
            .ok_or(Invalid::Reason("line height multiplier needs a numeric font size"));
    }
    length(token).ok_or(Invalid::Reason("invalid line height"))
}

/// Family words after the size. Fallback lists are not supported.
fn family_name(tokens: &[ValueToken]) -> Result<String, Invalid> {
    let words = tokens
        .iter()
        .map(|token| match &token.kind {
            TokenKind::QuotedString(s) => Ok(s.as_str()),
            TokenKind::Slash => Err(Invalid::Reason("unexpected '/' in font family")),
            TokenKind::Comma => Err(Invalid::Reason("font family fallback list")),
            _ => Ok(token.text.as_str()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(Invalid::Reason("missing font family"));
    }
    Ok(words.join(" "))
}

/// `font-family`: one quoted string, or identifiers joined by a space.
pub(crate) fn expand_family(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let family = match tokens {
        [ValueToken {
            kind: TokenKind::QuotedString(s),
            ..
        }] => s.clone(),
        _ if tokens.iter().all(|t| t.kind == TokenKind::Ident) => tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        _ => return Err(Invalid::Reason("unquoted font family must be identifiers")),
    };
    Ok(vec![("fontFamily".to_string(), StyleValue::from(family))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::style::StyleMap;
    use crate::css::values::tokenize_value;
    use pretty_assertions::assert_eq;

    fn run(value: &str) -> Result<StyleMap, Invalid> {
        expand(&tokenize_value(value).unwrap()).map(|pairs| pairs.into_iter().collect())
    }

    fn family(value: &str) -> Result<StyleValue, Invalid> {
        let mut pairs = expand_family(&tokenize_value(value).unwrap())?;
        Ok(pairs.remove(0).1)
    }

    fn font(
        family: &str,
        size: f64,
        weight: &str,
        style: &str,
        variant: &[&str],
        line_height: Option<f64>,
    ) -> StyleMap {
        let mut map = StyleMap::new();
        map.insert("fontFamily".into(), StyleValue::from(family));
        map.insert("fontSize".into(), StyleValue::Number(size));
        map.insert("fontWeight".into(), StyleValue::from(weight));
        map.insert("fontStyle".into(), StyleValue::from(style));
        map.insert(
            "fontVariant".into(),
            StyleValue::List(variant.iter().map(|v| v.to_string()).collect()),
        );
        if let Some(lh) = line_height {
            map.insert("lineHeight".into(), StyleValue::Number(lh));
        }
        map
    }

    #[test]
    fn full_shorthand() {
        assert_eq!(
            run(r#"bold italic small-caps 16px/18px "Helvetica""#).unwrap(),
            font("Helvetica", 16.0, "bold", "italic", &["small-caps"], Some(18.0))
        );
    }

    #[test]
    fn leading_keywords_in_any_order() {
        assert_eq!(
            run(r#"italic small-caps 16px/18px "Helvetica""#).unwrap(),
            font("Helvetica", 16.0, "normal", "italic", &["small-caps"], Some(18.0))
        );
        assert_eq!(
            run(r#"small-caps 700 16px "Helvetica""#).unwrap(),
            font("Helvetica", 16.0, "700", "normal", &["small-caps"], None)
        );
        assert_eq!(
            run(r#"normal normal 16px/18px "Helvetica""#).unwrap(),
            font("Helvetica", 16.0, "normal", "normal", &[], Some(18.0))
        );
    }

    #[test]
    fn line_height_forms() {
        assert_eq!(
            run(r#"16px/1.5 "Helvetica""#).unwrap(),
            font("Helvetica", 16.0, "normal", "normal", &[], Some(24.0))
        );
        assert_eq!(
            run(r#"16px / 18px "Helvetica""#).unwrap(),
            font("Helvetica", 16.0, "normal", "normal", &[], Some(18.0))
        );
        assert!(!run(r#"16px "Helvetica""#).unwrap().contains_key("lineHeight"));
    }

    #[test]
    fn multiplier_needs_numeric_size() {
        assert!(run("2em/1.5 Helvetica").is_err());
        assert_eq!(
            run("2em/20px Helvetica").unwrap()["fontSize"],
            StyleValue::from("2em")
        );
    }

    #[test]
    fn unquoted_family_tail() {
        assert_eq!(
            run("bold italic small-caps 16px/18px Helvetica Neue").unwrap(),
            font("Helvetica Neue", 16.0, "bold", "italic", &["small-caps"], Some(18.0))
        );
    }

    #[test]
    fn family_fallback_list_fails() {
        assert!(run("12px Arial, sans-serif").is_err());
        assert!(run(r#"12px "Helvetica Neue", Arial"#).is_err());
        assert!(run("12px Arial,").is_err());
    }

    #[test]
    fn shorthand_failures() {
        assert!(run("bold italic Helvetica").is_err());
        assert!(run("16px").is_err());
        assert!(run("16px/").is_err());
        assert!(run("bold bold 16px Helvetica").is_err());
        assert!(run("italic oblique 16px Helvetica").is_err());
        assert!(run("fancy 16px Helvetica").is_err());
        assert!(run("16px/18px/20px Helvetica").is_err());
    }

    #[test]
    fn family_quoted() {
        assert_eq!(family(r#""Helvetica Neue""#).unwrap(), StyleValue::from("Helvetica Neue"));
        assert_eq!(family("'Helvetica Neue'").unwrap(), StyleValue::from("Helvetica Neue"));
        assert_eq!(
            family(r#""Goudy Bookletter 1911""#).unwrap(),
            StyleValue::from("Goudy Bookletter 1911")
        );
    }

    #[test]
    fn family_escapes() {
        assert_eq!(family(r#""test\A test""#).unwrap(), StyleValue::from("test\ntest"));
        assert_eq!(family(r#""test\"test""#).unwrap(), StyleValue::from("test\"test"));
    }

    #[test]
    fn family_unquoted() {
        assert_eq!(family("Helvetica Neue").unwrap(), StyleValue::from("Helvetica Neue"));
        assert_eq!(family("Helvetica").unwrap(), StyleValue::from("Helvetica"));
    }

    #[test]
    fn family_rejects_non_identifiers() {
        assert!(family("Goudy Bookletter 1911").is_err());
        assert!(family("Arial, sans-serif").is_err());
        assert!(family(r#""a" "b""#).is_err());
    }
}
