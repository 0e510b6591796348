//! Selector registry with built-in defaults and user overrides.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::selectors::SelectorRule;

/// Override-file key naming the fallback rule.
const DEFAULT_KEY: &str = "default";

/// Immutable table of selector rules keyed by domain.
///
/// Constructed once at startup and injected into the resolver; lookups
/// never mutate it.
#[derive(Debug, Clone)]
pub struct SelectorRegistry {
    default: SelectorRule,
    rules: HashMap<String, SelectorRule>,
}

impl SelectorRegistry {
    /// Registry with only the built-in rules.
    pub fn builtin() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            "imgur.com".to_string(),
            SelectorRule::new("link", [("rel", "image_src")], "href"),
        );
        rules.insert(
            "tinypic.com".to_string(),
            SelectorRule::new("a", [("class", "thickbox")], "href"),
        );
        rules.insert(
            "gfycat.com".to_string(),
            SelectorRule::new("meta", [("property", "og:url")], "content"),
        );

        Self {
            // og:image is a common pattern among image hosts
            default: SelectorRule::new("meta", [("property", "og:image")], "content"),
            rules,
        }
    }

    /// Built-in rules merged with user overrides from a JSON file.
    ///
    /// A malformed or unreadable override file logs a warning and leaves
    /// the built-ins untouched; it is never fatal.
    pub fn with_overrides(path: &Path) -> Self {
        let mut registry = Self::builtin();

        match load_overrides(path) {
            Ok(overrides) => registry.merge(overrides),
            Err(e) => tracing::warn!(
                "Could not read selector overrides from {}: {}",
                path.display(),
                e
            ),
        }

        registry
    }

    /// Merge rules over the current table; incoming entries win on
    /// collision. A `default` key replaces the fallback rule.
    pub fn merge(&mut self, mut overrides: HashMap<String, SelectorRule>) {
        if let Some(default) = overrides.remove(DEFAULT_KEY) {
            self.default = default;
        }
        self.rules.extend(overrides);
    }

    /// Rule for a domain, falling back to the default rule for any
    /// unmapped domain.
    pub fn rule_for(&self, domain: &str) -> &SelectorRule {
        self.rules.get(domain).unwrap_or(&self.default)
    }
}

fn load_overrides(path: &Path) -> Result<HashMap<String, SelectorRule>> {
    let content = fs::read_to_string(path)?;
    let overrides = serde_json::from_str(&content)?;
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = SelectorRegistry::builtin();

        let rule = registry.rule_for("imgur.com");
        assert_eq!(rule.tag, "link");
        assert_eq!(rule.attrs.get("rel").map(String::as_str), Some("image_src"));
        assert_eq!(rule.link_attr, "href");
    }

    #[test]
    fn test_unmapped_domain_falls_back_to_default() {
        let registry = SelectorRegistry::builtin();

        let rule = registry.rule_for("unknown.example");
        assert_eq!(rule.tag, "meta");
        assert_eq!(
            rule.attrs.get("property").map(String::as_str),
            Some("og:image")
        );
        assert_eq!(rule.link_attr, "content");
    }

    #[test]
    fn test_override_wins_on_collision() {
        let mut registry = SelectorRegistry::builtin();

        let override_rule = SelectorRule::new("img", [("id", "main")], "src");
        registry.merge(HashMap::from([(
            "example.com".to_string(),
            override_rule.clone(),
        )]));

        assert_eq!(registry.rule_for("example.com"), &override_rule);
        // other entries are unaffected
        assert_eq!(registry.rule_for("imgur.com").tag, "link");
    }

    #[test]
    fn test_default_key_replaces_fallback() {
        let mut registry = SelectorRegistry::builtin();

        let new_default = SelectorRule::new("img", [], "src");
        registry.merge(HashMap::from([(
            "default".to_string(),
            new_default.clone(),
        )]));

        assert_eq!(registry.rule_for("unknown.example"), &new_default);
    }

    #[test]
    fn test_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"example.com": {{"tag": "img", "attrs": {{"id": "main"}}, "link_attr": "src"}}}}"#
        )
        .unwrap();

        let registry = SelectorRegistry::with_overrides(file.path());
        assert_eq!(registry.rule_for("example.com").tag, "img");
        assert_eq!(registry.rule_for("imgur.com").tag, "link");
    }

    #[test]
    fn test_malformed_overrides_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let registry = SelectorRegistry::with_overrides(file.path());
        assert_eq!(registry.rule_for("imgur.com").tag, "link");
        assert_eq!(registry.rule_for("unknown.example").tag, "meta");
    }

    #[test]
    fn test_missing_overrides_file_falls_back() {
        let registry = SelectorRegistry::with_overrides(Path::new("/nonexistent/selectors.json"));
        assert_eq!(registry.rule_for("imgur.com").tag, "link");
    }
}
