//! # flatstyle
//!
//! Expands a CSS subset into flat, shorthand-free style attribute maps, the
//! shape consumed by UI frameworks whose style model has no shorthand
//! properties (React Native style objects and similar).
//!
//! ```
//! let out = flatstyle::transform(".box { margin: 10px 0; border: 2px dashed #f00; }").unwrap();
//! let json = out.to_json().unwrap();
//! assert_eq!(json["box"]["marginTop"], 10);
//! assert_eq!(json["box"]["borderStyle"], "dashed");
//! ```
//!
//! ## Core Systems
//!
//! - **[`css::parser`]**: logos-based stylesheet parser producing rules and at-rule blocks
//! - **[`css::values`]**: value tokenizer and token classification
//! - **[`css::scalar`]**: length normalization (`px`, `rem`, relative units, zero)
//! - **[`css::properties`]**: per-property expanders and the declaration router
//! - **[`css::stylesheet`]**: rule merging, selector expansion, media bucketing
//! - **[`options`]**: [`TransformOptions`]

pub mod css;
pub mod options;

pub use css::model::{AtRule, Block, Declaration, Rule, StyleSheet};
pub use css::parser::{parse_css, ParseError};
pub use css::properties::{expand_declaration, DeclarationError};
pub use css::style::{StyleMap, StyleValue, TransformStep};
pub use css::stylesheet::{transform_stylesheet, Transformed};
pub use options::TransformOptions;

/// Errors from [`transform`] and [`transform_with`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// The stylesheet text is not well-formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A declaration value does not fit its property.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}

/// Transform stylesheet text with default options.
pub fn transform(css: &str) -> Result<Transformed, TransformError> {
    transform_with(css, &TransformOptions::default())
}

/// Transform stylesheet text.
pub fn transform_with(css: &str, options: &TransformOptions) -> Result<Transformed, TransformError> {
    let sheet = parse_css(css)?;
    tracing::debug!("Parsed stylesheet: {} block(s)", sheet.blocks.len());
    Ok(transform_stylesheet(&sheet, options)?)
}
