//! Stylesheet transform: rule merging, selector expansion, media bucketing.
//!
//! Folds a parsed [`StyleSheet`] into one flat [`StyleMap`] per selector.
//! Declarations apply in source order and every output key keeps the last
//! value written to it, whether by a longhand or by a shorthand expansion.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::css::model::{Block, Rule, StyleSheet};
use crate::css::properties::{expand_declaration, DeclarationError};
use crate::css::style::StyleMap;
use crate::options::TransformOptions;

/// Selector name → merged attributes.
pub type SelectorMap = BTreeMap<String, StyleMap>;

/// Result of transforming a stylesheet.
///
/// Serializes as one object: selector entries and `@media ...` entries side
/// by side at the top level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transformed {
    /// Base-scope selectors.
    pub styles: SelectorMap,
    /// Media key (`"@media <condition>"`) → selectors inside those blocks.
    pub media: BTreeMap<String, SelectorMap>,
}

impl Transformed {
    /// Attributes of a base-scope selector.
    pub fn get(&self, selector: &str) -> Option<&StyleMap> {
        self.styles.get(selector)
    }

    /// Selectors of a media bucket, looked up by its full key.
    pub fn media_query(&self, key: &str) -> Option<&SelectorMap> {
        self.media.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.media.is_empty()
    }

    /// The output as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Serialize for Transformed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.styles.len() + self.media.len()))?;
        for (selector, style) in &self.styles {
            map.serialize_entry(selector, style)?;
        }
        for (key, selectors) in &self.media {
            map.serialize_entry(key, selectors)?;
        }
        map.end()
    }
}

/// Output name for one selector: whitespace runs collapsed and a single
/// leading `.` removed, so `.test` becomes `test`.
pub fn selector_name(selector: &str) -> String {
    let collapsed = selector.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_prefix('.') {
        Some(rest) => rest.to_string(),
        None => collapsed,
    }
}

/// Top-level key of a media bucket.
pub fn media_key(condition: &str) -> String {
    format!("@media {}", condition.trim())
}

/// Transform an already-parsed stylesheet.
///
/// Fails on the first declaration that does not parse; no partial output is
/// returned.
pub fn transform_stylesheet(
    sheet: &StyleSheet,
    options: &TransformOptions,
) -> Result<Transformed, DeclarationError> {
    let mut out = Transformed::default();

    for block in &sheet.blocks {
        match block {
            Block::Rule(rule) => merge_rule(&mut out.styles, rule)?,
            Block::AtRule(at) if at.is_media() && options.parse_media_queries => {
                let scope = out.media.entry(media_key(&at.prelude)).or_default();
                for rule in &at.rules {
                    merge_rule(scope, rule)?;
                }
            }
            Block::AtRule(at) => {
                tracing::debug!("Dropping @{} {} ({} rule(s))", at.name, at.prelude, at.rules.len());
            }
        }
    }

    tracing::debug!(
        "Transformed stylesheet: {} selector(s), {} media bucket(s)",
        out.styles.len(),
        out.media.len()
    );
    Ok(out)
}

/// Fold a rule's declarations in source order, then copy the result into
/// each of its selectors.
fn merge_rule(scope: &mut SelectorMap, rule: &Rule) -> Result<(), DeclarationError> {
    let mut declarations = rule.declarations.iter().collect::<Vec<_>>();
    declarations.sort_by_key(|d| d.position);

    let mut merged = StyleMap::new();
    for declaration in declarations {
        merged.extend(expand_declaration(&declaration.property, &declaration.value)?);
    }

    for selector in rule.selectors() {
        scope
            .entry(selector_name(selector))
            .or_default()
            .extend(merged.clone());
    }
    Ok(())
}
