//! Transform configuration.

use serde::{Deserialize, Serialize};

/// Options for [`crate::transform_with`].
///
/// Deserializes from the camelCase form used by JSON callers:
/// `{"parseMediaQueries": true}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Bucket `@media` blocks under `"@media <condition>"` keys. When off,
    /// their rules are discarded.
    pub parse_media_queries: bool,
}

impl TransformOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable media query bucketing (builder).
    pub fn with_media_queries(mut self, enabled: bool) -> Self {
        self.parse_media_queries = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_media() {
        assert!(!TransformOptions::default().parse_media_queries);
    }

    #[test]
    fn builder() {
        let options = TransformOptions::new().with_media_queries(true);
        assert!(options.parse_media_queries);
    }

    #[test]
    fn from_json() {
        let options: TransformOptions =
            serde_json::from_str(r#"{"parseMediaQueries": true}"#).unwrap();
        assert!(options.parse_media_queries);

        let options: TransformOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TransformOptions::default());
    }

    #[test]
    fn to_json() {
        let json = serde_json::to_value(TransformOptions::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "parseMediaQueries": false }));
    }
}
