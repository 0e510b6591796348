//! HTML link extraction.

use scraper::{Html, Selector};

use crate::selectors::SelectorRule;

/// Find the first element matching the rule and read its link attribute.
///
/// An element matches when its tag equals the rule's tag and every
/// attribute matcher equals the element's attribute value. Returns `None`
/// when no element matches or the link attribute is absent.
pub fn extract_link(html: &str, rule: &SelectorRule) -> Option<String> {
    let selector = Selector::parse(&rule.tag).ok()?;
    let document = Html::parse_document(html);

    document
        .select(&selector)
        .find(|element| {
            rule.attrs
                .iter()
                .all(|(name, value)| element.value().attr(name) == Some(value.as_str()))
        })
        .and_then(|element| element.value().attr(&rule.link_attr))
        .map(str::to_string)
}
