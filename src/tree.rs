//! Pre-order tree queries independent of any particular HTML parser.
//!
//! [`Node`] is implemented for [`scraper::ElementRef`] and for the in-memory
//! [`ElementNode`], which lets extraction logic be exercised without parsing.

use crate::error::ExtractError;
use scraper::ElementRef;
use std::fmt;

/// An element in a document tree.
pub trait Node: Copy {
    fn tag_name(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    /// Child elements in document order
    fn children(&self) -> Vec<Self>;
    /// All descendant text concatenated in document order
    fn text_content(&self) -> String;
}

impl<'a> Node for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn children(&self) -> Vec<Self> {
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}

/// A `tag.class` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelector {
    pub tag: String,
    pub class: String,
}

impl ElementSelector {
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: class.into(),
        }
    }

    /// Parse `"div.product-item"` into its tag and class.
    pub fn parse(selector: &str) -> Result<Self, ExtractError> {
        let (tag, class) = selector
            .trim()
            .split_once('.')
            .ok_or_else(|| ExtractError::InvalidSelector(selector.to_string()))?;

        let valid = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        if !valid(tag) || !valid(class) {
            return Err(ExtractError::InvalidSelector(selector.to_string()));
        }

        Ok(Self::new(tag, class))
    }

    pub fn matches<N: Node>(&self, node: &N) -> bool {
        node.tag_name().eq_ignore_ascii_case(&self.tag) && node.has_class(&self.class)
    }
}

impl fmt::Display for ElementSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tag, self.class)
    }
}

/// All descendants of `root` (not `root` itself) matching `predicate`, in
/// pre-order.
pub fn find_all<N, P>(root: N, predicate: P) -> Vec<N>
where
    N: Node,
    P: Fn(&N) -> bool,
{
    let mut found = Vec::new();
    let mut stack: Vec<N> = root.children().into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if predicate(&node) {
            found.push(node);
        }
        stack.extend(node.children().into_iter().rev());
    }

    found
}

/// The first descendant of `root` (not `root` itself) matching `predicate`
/// in pre-order.
pub fn find_first<N, P>(root: N, predicate: P) -> Option<N>
where
    N: Node,
    P: Fn(&N) -> bool,
{
    let mut stack: Vec<N> = root.children().into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if predicate(&node) {
            return Some(node);
        }
        stack.extend(node.children().into_iter().rev());
    }

    None
}

/// Minimal owned element tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub classes: Vec<String>,
    /// Text directly inside this element, placed before any children
    pub text: String,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }
}

impl<'a> Node for &'a ElementNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a ElementNode = *self;
        node.children.iter().collect()
    }

    fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn tree() -> ElementNode {
        ElementNode::new("root")
            .child(
                ElementNode::new("div")
                    .class("a")
                    .child(ElementNode::new("span").class("a").text("inner")),
            )
            .child(ElementNode::new("div").class("a").text("second"))
    }

    #[test]
    fn test_find_all_is_pre_order() {
        let root = tree();
        let found = find_all(&root, |n| n.has_class("a"));

        let tags: Vec<_> = found.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "span", "div"]);
    }

    #[test]
    fn test_find_first_excludes_root() {
        let root = ElementNode::new("div").class("a").child(ElementNode::new("p"));
        assert!(find_first(&root, |n| n.has_class("a")).is_none());
        assert_eq!(find_first(&root, |n| n.tag == "p").map(|n| n.tag.as_str()), Some("p"));
    }

    #[test]
    fn test_selector_parse() {
        let selector = ElementSelector::parse("h2.product-name").unwrap();
        assert_eq!(selector, ElementSelector::new("h2", "product-name"));
        assert_eq!(selector.to_string(), "h2.product-name");

        assert!(ElementSelector::parse("product-name").is_err());
        assert!(ElementSelector::parse(".product-name").is_err());
        assert!(ElementSelector::parse("div.a b").is_err());
    }

    #[test]
    fn test_scraper_element_matches_any_class() {
        let html = Html::parse_fragment(r#"<div class="card product-item">x</div>"#);
        let root = html.root_element();
        let selector = ElementSelector::new("div", "product-item");

        let found = find_all(root, |n| selector.matches(n));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text_content(), "x");
    }
}
