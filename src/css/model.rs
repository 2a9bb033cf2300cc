//! Stylesheet AST: StyleSheet, Block, Rule, AtRule, Declaration.
//!
//! This is the structure the front-end parser hands to the transform. Values
//! stay as raw text; they are tokenized per property during expansion.

/// A single property declaration, e.g. `margin: 10px 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Hyphenated property name as written, e.g. `"border-radius"`.
    pub property: String,
    /// Raw, trimmed value text without any `!important` flag.
    pub value: String,
    /// Source order index within the owning rule.
    pub position: usize,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>, position: usize) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            position,
        }
    }
}

/// A style rule: selector text (possibly a comma-separated list) and its
/// declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Create a rule from a selector and `(property, value)` pairs, assigning
    /// positions in order.
    pub fn new<P, V>(selector: impl Into<String>, declarations: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        let declarations = declarations
            .into_iter()
            .enumerate()
            .map(|(position, (property, value))| Declaration::new(property, value, position))
            .collect();
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    /// The individual selectors of a comma-separated selector list.
    ///
    /// Commas inside parentheses or brackets (`:not(a, b)`, `[x=","]`) do not
    /// split.
    pub fn selectors(&self) -> Vec<&str> {
        let mut selectors = self.selector_members();
        selectors.retain(|s| !s.is_empty());
        selectors
    }

    /// Every comma-separated member, trimmed, including empty ones.
    pub(crate) fn selector_members(&self) -> Vec<&str> {
        let mut selectors = Vec::new();
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut start = 0;

        for (i, c) in self.selector.char_indices() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    '"' | '\'' => quote = Some(c),
                    '(' | '[' => depth += 1,
                    ')' | ']' => depth = depth.saturating_sub(1),
                    ',' if depth == 0 => {
                        selectors.push(self.selector[start..i].trim());
                        start = i + 1;
                    }
                    _ => {}
                },
            }
        }
        selectors.push(self.selector[start..].trim());
        selectors
    }
}

/// An at-rule block such as `@media (orientation: landscape) { ... }`.
///
/// Statement at-rules (`@import url(x);`) and blocks whose contents are not
/// style rules are kept with an empty rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// At-keyword without the `@`, lowercased: `"media"`.
    pub name: String,
    /// Verbatim, trimmed prelude text: `"(orientation: landscape)"`.
    pub prelude: String,
    pub rules: Vec<Rule>,
}

impl AtRule {
    /// Returns `true` for `@media` blocks.
    pub fn is_media(&self) -> bool {
        self.name == "media"
    }
}

/// One top-level item of a stylesheet, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Rule(Rule),
    AtRule(AtRule),
}

/// A parsed stylesheet: rules and at-rule blocks interleaved in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub blocks: Vec<Block>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Top-level style rules, skipping at-rule blocks.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Rule(rule) => Some(rule),
            Block::AtRule(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_assigns_positions() {
        let rule = Rule::new(".test", [("margin", "10px"), ("color", "red")]);
        assert_eq!(rule.declarations.len(), 2);
        assert_eq!(rule.declarations[0], Declaration::new("margin", "10px", 0));
        assert_eq!(rule.declarations[1], Declaration::new("color", "red", 1));
    }

    #[test]
    fn test_selectors_single() {
        let rule = Rule::new(".test", Vec::<(&str, &str)>::new());
        assert_eq!(rule.selectors(), vec![".test"]);
    }

    #[test]
    fn test_selectors_list() {
        let rule = Rule::new(" .test1 , .test2,.test3 ", Vec::<(&str, &str)>::new());
        assert_eq!(rule.selectors(), vec![".test1", ".test2", ".test3"]);
    }

    #[test]
    fn test_selectors_nested_commas_do_not_split() {
        let rule = Rule::new(".a:not(.b, .c), [data-x=\",\"]", Vec::<(&str, &str)>::new());
        assert_eq!(rule.selectors(), vec![".a:not(.b, .c)", "[data-x=\",\"]"]);
    }

    #[test]
    fn test_selectors_drop_empty_members() {
        let rule = Rule::new(".a,,", Vec::<(&str, &str)>::new());
        assert_eq!(rule.selectors(), vec![".a"]);
        assert_eq!(rule.selector_members(), vec![".a", "", ""]);
    }

    #[test]
    fn test_at_rule_is_media() {
        let media = AtRule {
            name: "media".into(),
            prelude: "(orientation: landscape)".into(),
            rules: Vec::new(),
        };
        assert!(media.is_media());

        let font_face = AtRule {
            name: "font-face".into(),
            prelude: String::new(),
            rules: Vec::new(),
        };
        assert!(!font_face.is_media());
    }

    #[test]
    fn test_stylesheet_rules_skip_at_rules() {
        let sheet = StyleSheet {
            blocks: vec![
                Block::Rule(Rule::new(".a", [("color", "red")])),
                Block::AtRule(AtRule {
                    name: "media".into(),
                    prelude: "print".into(),
                    rules: vec![Rule::new(".b", [("color", "blue")])],
                }),
                Block::Rule(Rule::new(".c", [("color", "green")])),
            ],
        };
        let selectors: Vec<&str> = sheet.rules().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a", ".c"]);
    }

    #[test]
    fn test_stylesheet_default() {
        assert!(StyleSheet::default().blocks.is_empty());
        assert!(StyleSheet::new().blocks.is_empty());
    }
}
