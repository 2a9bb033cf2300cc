//! `flex` and `flex-flow`.

use crate::css::scalar::length_percentage;
use crate::css::style::StyleValue;
use crate::css::values::ValueToken;

use super::{fill, keyword_in, Expansion, Invalid};

const DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
const WRAPS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

#[derive(Debug, Clone, PartialEq)]
enum Basis {
    /// `auto`: no basis attribute is written.
    Auto,
    Value(StyleValue),
}

fn basis(token: &ValueToken) -> Result<Basis, Invalid> {
    if token.is_keyword("auto") {
        return Ok(Basis::Auto);
    }
    length_percentage(token)
        .map(Basis::Value)
        .ok_or(Invalid::Reason("invalid flex basis"))
}

/// `flex: none | auto | [<grow> <shrink>?] || <basis>`
///
/// A bare number is always a factor unless both factors are already taken,
/// so `0 1 0` reads as grow 0, shrink 1, basis 0.
pub(crate) fn expand(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    if let [token] = tokens {
        if token.is_keyword("none") {
            return Ok(factors(0.0, 0.0));
        }
        if token.is_keyword("auto") {
            return Ok(factors(1.0, 1.0));
        }
    }
    if tokens.len() > 3 {
        return Err(Invalid::Reason("expected at most 3 flex values"));
    }

    let mut rest = tokens;
    let mut flex_basis = None;

    if let Some((first, tail)) = rest.split_first() {
        if first.number().is_none() {
            flex_basis = Some(basis(first)?);
            rest = tail;
        }
    }

    let numbers = rest
        .iter()
        .map_while(ValueToken::number)
        .take(2)
        .collect::<Vec<_>>();
    rest = &rest[numbers.len()..];

    if flex_basis.is_none() {
        if let Some((last, tail)) = rest.split_first() {
            flex_basis = Some(basis(last)?);
            rest = tail;
        }
    }
    if !rest.is_empty() {
        return Err(Invalid::Reason("flex factors must be adjacent"));
    }

    let grow = numbers.first().copied().unwrap_or(1.0);
    let shrink = numbers.get(1).copied().unwrap_or(1.0);

    let mut out = factors(grow, shrink);
    match flex_basis.unwrap_or(Basis::Value(StyleValue::Number(0.0))) {
        Basis::Auto => {}
        Basis::Value(v) => out.push(("flexBasis".to_string(), v)),
    }
    Ok(out)
}

fn factors(grow: f64, shrink: f64) -> Expansion {
    vec![
        ("flexGrow".to_string(), StyleValue::Number(grow)),
        ("flexShrink".to_string(), StyleValue::Number(shrink)),
    ]
}

/// `flex-flow: <direction> || <wrap>`
pub(crate) fn expand_flow(tokens: &[ValueToken]) -> Result<Expansion, Invalid> {
    if tokens.len() > 2 {
        return Err(Invalid::Reason("expected at most 2 flex-flow values"));
    }

    let mut direction = None;
    let mut wrap = None;
    for token in tokens {
        if let Some(d) = keyword_in(token, DIRECTIONS) {
            fill(&mut direction, d, "multiple flex directions")?;
        } else if let Some(w) = keyword_in(token, WRAPS) {
            fill(&mut wrap, w, "multiple flex wraps")?;
        } else {
            return Err(Invalid::Reason("unrecognized flex-flow value"));
        }
    }

    Ok(vec![
        ("flexDirection".to_string(), StyleValue::from(direction.unwrap_or_else(|| "row".into()))),
        ("flexWrap".to_string(), StyleValue::from(wrap.unwrap_or_else(|| "nowrap".into()))),
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

    fn flex(grow: f64, shrink: f64, basis: Option<StyleValue>) -> Expansion {
        let mut out = factors(grow, shrink);
        if let Some(b) = basis {
            out.push(("flexBasis".to_string(), b));
        }
        out
    }

    fn px(n: f64) -> Option<StyleValue> {
        Some(StyleValue::Number(n))
    }

    #[test]
    fn three_values_either_order() {
        assert_eq!(run("1 2 3px").unwrap(), flex(1.0, 2.0, px(3.0)));
        assert_eq!(run("3px 1 2").unwrap(), flex(1.0, 2.0, px(3.0)));
    }

    #[test]
    fn two_values() {
        assert_eq!(run("1 2").unwrap(), flex(1.0, 2.0, px(0.0)));
        assert_eq!(run("2 2px").unwrap(), flex(2.0, 1.0, px(2.0)));
        assert_eq!(run("2px 2").unwrap(), flex(2.0, 1.0, px(2.0)));
    }

    #[test]
    fn one_value() {
        assert_eq!(run("2").unwrap(), flex(2.0, 1.0, px(0.0)));
        assert_eq!(run("10px").unwrap(), flex(1.0, 1.0, px(10.0)));
        assert_eq!(run("50%").unwrap(), flex(1.0, 1.0, Some(StyleValue::from("50%"))));
    }

    #[test]
    fn unitless_zero_is_a_factor_first() {
        assert_eq!(run("0 1 0").unwrap(), flex(0.0, 1.0, px(0.0)));
    }

    #[test]
    fn auto_basis_is_omitted() {
        assert_eq!(run("0 1 auto").unwrap(), flex(0.0, 1.0, None));
        assert_eq!(run("auto 0 1").unwrap(), flex(0.0, 1.0, None));
    }

    #[test]
    fn keywords() {
        assert_eq!(run("auto").unwrap(), flex(1.0, 1.0, None));
        assert_eq!(run("NONE").unwrap(), flex(0.0, 0.0, None));
    }

    #[test]
    fn invalid_flex() {
        assert!(run("1 2px 3").is_err());
        assert!(run("1 2 3").is_err());
        assert!(run("1 2 3px 4").is_err());
        assert!(run("1px 2px").is_err());
        assert!(run("none 1").is_err());
    }

    #[test]
    fn flow() {
        let flow = |v: &str| expand_flow(&tokenize_value(v).unwrap());
        let expected = |d: &str, w: &str| {
            vec![
                ("flexDirection".to_string(), StyleValue::from(d)),
                ("flexWrap".to_string(), StyleValue::from(w)),
            ]
        };
        assert_eq!(flow("column wrap").unwrap(), expected("column", "wrap"));
        assert_eq!(flow("wrap column").unwrap(), expected("column", "wrap"));
        assert_eq!(flow("wrap").unwrap(), expected("row", "wrap"));
        assert_eq!(flow("column").unwrap(), expected("column", "nowrap"));
        assert!(flow("row column").is_err());
        assert!(flow("row wrap extra").is_err());
        assert!(flow("sideways").is_err());
    }
}
