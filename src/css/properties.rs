//! Property expansion: one declaration → flat output attributes.
//!
//! Each property name routes to an [`Expander`]. Properties without a
//! dedicated expander pass through with light numeric normalization; the
//! shorthand families live in the submodules.

mod background;
mod border;
mod decoration;
mod edges;
mod flex;
mod font;
mod shadow;
mod transform;

pub use edges::{EdgeSet, Edges};
pub use shadow::ShadowKind;

use crate::css::naming::camel_case;
use crate::css::scalar::passthrough;
use crate::css::style::StyleValue;
use crate::css::values::{tokenize_value, ValueError, ValueToken};

/// Output attributes produced by one declaration, in emission order.
pub type Expansion = Vec<(String, StyleValue)>;

/// A declaration whose value does not fit its property's grammar.
///
/// `property` is the medial-capital output name and `value` the trimmed raw
/// value text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to parse declaration \"{property}: {value}\"")]
pub struct DeclarationError {
    pub property: String,
    pub value: String,
}

/// Why an expander rejected a value. Only surfaces in logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Invalid {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error("{0}")]
    Reason(&'static str),
}

/// The expander a property routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expander {
    /// Raw value, numbers and `px`/`rem` normalized.
    Passthrough,
    /// Raw value, always a string (`font-weight`).
    Text,
    /// Identifier list (`font-variant`).
    Keywords,
    Edges(EdgeSet),
    Border,
    Font,
    FontFamily,
    Shadow(ShadowKind),
    ShadowOffset,
    TextDecoration,
    TextDecorationLine,
    Flex,
    FlexFlow,
    Transform,
    Background,
}

impl Expander {
    /// Look up the expander for a lowercased, hyphenated property name.
    pub fn for_property(property: &str) -> Self {
        match property {
            "font-weight" => Expander::Text,
            "font-variant" => Expander::Keywords,
            "margin" => Expander::Edges(EdgeSet::Margin),
            "padding" => Expander::Edges(EdgeSet::Padding),
            "border-width" => Expander::Edges(EdgeSet::BorderWidth),
            "border-color" => Expander::Edges(EdgeSet::BorderColor),
            "border-radius" => Expander::Edges(EdgeSet::BorderRadius),
            "border" => Expander::Border,
            "font" => Expander::Font,
            "font-family" => Expander::FontFamily,
            "box-shadow" => Expander::Shadow(ShadowKind::Box),
            "text-shadow" => Expander::Shadow(ShadowKind::Text),
            "shadow-offset" | "text-shadow-offset" => Expander::ShadowOffset,
            "text-decoration" => Expander::TextDecoration,
            "text-decoration-line" => Expander::TextDecorationLine,
            "flex" => Expander::Flex,
            "flex-flow" => Expander::FlexFlow,
            "transform" => Expander::Transform,
            "background" => Expander::Background,
            _ => Expander::Passthrough,
        }
    }
}

/// Expand one declaration into its output attributes.
///
/// The property name is matched case-insensitively; the value is trimmed.
pub fn expand_declaration(property: &str, value: &str) -> Result<Expansion, DeclarationError> {
    let property = property.trim().to_ascii_lowercase();
    let key = camel_case(&property);
    let value = value.trim();

    match expand(Expander::for_property(&property), &key, value) {
        Ok(pairs) => {
            tracing::trace!("{}: {} → {} attribute(s)", key, value, pairs.len());
            Ok(pairs)
        }
        Err(reason) => {
            tracing::debug!("Rejected declaration {}: {} ({})", key, value, reason);
            Err(DeclarationError {
                property: key,
                value: value.to_string(),
            })
        }
    }
}

fn expand(expander: Expander, key: &str, value: &str) -> Result<Expansion, Invalid> {
    match expander {
        Expander::Passthrough => Ok(vec![(key.to_string(), passthrough(value))]),
        Expander::Text => Ok(vec![(key.to_string(), StyleValue::from(value))]),
        Expander::Keywords => keywords(key, &tokens(value)?),
        Expander::Edges(set) => edges::expand(set, &tokens(value)?),
        Expander::Border => border::expand(&tokens(value)?),
        Expander::Font => font::expand(&tokens(value)?),
        Expander::FontFamily => font::expand_family(&tokens(value)?),
        Expander::Shadow(kind) => shadow::expand(kind, &tokens(value)?),
        Expander::ShadowOffset => shadow::expand_offset(key, &tokens(value)?),
        Expander::TextDecoration => decoration::expand(&tokens(value)?),
        Expander::TextDecorationLine => decoration::expand_line(&tokens(value)?),
        Expander::Flex => flex::expand(&tokens(value)?),
        Expander::FlexFlow => flex::expand_flow(&tokens(value)?),
        Expander::Transform => transform::expand(&tokens(value)?),
        Expander::Background => background::expand(&tokens(value)?),
    }
}

/// Tokenize a shorthand value; shorthands never accept an empty value.
fn tokens(value: &str) -> Result<Vec<ValueToken>, Invalid> {
    let tokens = tokenize_value(value)?;
    if tokens.is_empty() {
        return Err(Invalid::Reason("empty value"));
    }
    Ok(tokens)
}

/// `font-variant: small-caps tabular-nums` → `["small-caps", "tabular-nums"]`.
fn keywords(key: &str, tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    let list = tokens
        .iter()
        .map(|token| token.keyword().ok_or(Invalid::Reason("expected keywords")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(vec![(key.to_string(), StyleValue::List(list))])
}

/// Store `value` in an empty slot, failing if the slot is already taken.
pub(crate) fn fill<T>(slot: &mut Option<T>, value: T, reason: &'static str) -> Result<(), Invalid> {
    if slot.is_some() {
        return Err(Invalid::Reason(reason));
    }
    *slot = Some(value);
    Ok(())
}

/// Lowercased keyword if the token is an identifier in `set`.
pub(crate) fn keyword_in(token: &ValueToken, set: &[&str]) -> Option<String> {
    token.keyword().filter(|k| set.contains(&k.as_str()))
}

/// Raw text of a token that may stand for a color.
pub(crate) fn color_text(token: &ValueToken) -> Option<StyleValue> {
    token
        .is_color_like()
        .then(|| StyleValue::from(token.text.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand_ok(property: &str, value: &str) -> Expansion {
        expand_declaration(property, value).unwrap()
    }

    #[test]
    fn routes_known_properties() {
        assert_eq!(Expander::for_property("margin"), Expander::Edges(EdgeSet::Margin));
        assert_eq!(Expander::for_property("box-shadow"), Expander::Shadow(ShadowKind::Box));
        assert_eq!(Expander::for_property("border-style"), Expander::Passthrough);
        assert_eq!(Expander::for_property("color"), Expander::Passthrough);
    }

    #[test]
    fn passthrough_camel_cases_the_key() {
        assert_eq!(
            expand_ok("background-color", "red"),
            vec![("backgroundColor".to_string(), StyleValue::from("red"))]
        );
    }

    #[test]
    fn property_name_is_case_insensitive() {
        assert_eq!(
            expand_ok("  Z-Index ", "2"),
            vec![("zIndex".to_string(), StyleValue::Number(2.0))]
        );
    }

    #[test]
    fn font_weight_is_text() {
        assert_eq!(
            expand_ok("font-weight", "400"),
            vec![("fontWeight".to_string(), StyleValue::from("400"))]
        );
    }

    #[test]
    fn font_variant_is_a_lowercase_list() {
        assert_eq!(
            expand_ok("font-variant", "Small-Caps tabular-nums"),
            vec![(
                "fontVariant".to_string(),
                StyleValue::List(vec!["small-caps".into(), "tabular-nums".into()])
            )]
        );
        assert!(expand_declaration("font-variant", "10px").is_err());
    }

    #[test]
    fn error_carries_camel_property_and_trimmed_value() {
        let err = expand_declaration("margin", " 10 ").unwrap_err();
        assert_eq!(
            err,
            DeclarationError {
                property: "margin".into(),
                value: "10".into(),
            }
        );
        assert_eq!(err.to_string(), "Failed to parse declaration \"margin: 10\"");
    }

    #[test]
    fn empty_shorthand_value_fails() {
        assert!(expand_declaration("margin", "  ").is_err());
        assert!(expand_declaration("border", "").is_err());
    }

    #[test]
    fn unbalanced_value_fails() {
        assert!(expand_declaration("box-shadow", "1px 1px rgb(0, 0").is_err());
    }

    #[test]
    fn fill_rejects_second_value() {
        let mut slot = None;
        assert!(fill(&mut slot, 1, "dup").is_ok());
        assert_eq!(fill(&mut slot, 2, "dup"), Err(Invalid::Reason("dup")));
        assert_eq!(slot, Some(1));
    }
}
