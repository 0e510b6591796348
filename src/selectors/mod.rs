//! Domain selector rules for image link extraction.

pub mod registry;

pub use registry::SelectorRegistry;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Instructions for pulling an image link out of a page for one domain.
///
/// Identifies which HTML element carries the image URL and which attribute
/// holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorRule {
    /// Tag name of the element carrying the link.
    pub tag: String,

    /// Attribute values the element must carry, matched exactly.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,

    /// Attribute holding the image URL.
    pub link_attr: String,
}

impl SelectorRule {
    /// Build a rule from a tag, attribute matchers, and a link attribute.
    pub fn new<const N: usize>(tag: &str, attrs: [(&str, &str); N], link_attr: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            link_attr: link_attr.to_string(),
        }
    }
}
