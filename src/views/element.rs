//! Inspectable element tree produced by views.
//!
//! Views render to a small DOM-like tree. The terminal front-end draws it and
//! tests query it with simple selectors (`button[type='submit']`,
//! `button.miniature__delete-button`, `input[name='username']`).

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append `child` only when `condition` holds.
    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Element) -> Self {
        if condition {
            self.child(child())
        } else {
            self
        }
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of this element and its descendants, with text
    /// nodes separated by single spaces.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Node::Text(text) if !text.trim().is_empty() => out.push(text.trim()),
                Node::Text(_) => {}
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Depth-first iterator over this element and all descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element (self included) matching a parsed selector.
    pub fn select(&self, selector: &Selector) -> Option<&Element> {
        self.descendants().find(|el| selector.matches(el))
    }

    pub fn select_all<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = &'a Element> {
        self.descendants().filter(move |el| selector.matches(el))
    }

    /// First element matching `selector`. An invalid selector matches nothing.
    pub fn find(&self, selector: &str) -> Option<&Element> {
        match Selector::parse(selector) {
            Ok(parsed) => self.select(&parsed),
            Err(err) => {
                tracing::warn!(selector, error = %err, "Invalid selector");
                None
            }
        }
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> usize {
        match Selector::parse(selector) {
            Ok(parsed) => self.select_all(&parsed).count(),
            Err(err) => {
                tracing::warn!(selector, error = %err, "Invalid selector");
                0
            }
        }
    }

    pub fn exists(&self, selector: &str) -> bool {
        self.find(selector).is_some()
    }
}

impl fmt::Display for Element {
    /// Indented markup, one element or text node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markup(f, 0)
    }
}

impl Element {
    fn write_markup(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{}<{}", indent, self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        if self.children.is_empty() {
            return writeln!(f, " />");
        }
        writeln!(f, ">")?;
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_markup(f, depth + 1)?,
                Node::Text(text) => writeln!(f, "{}  {}", indent, text)?,
            }
        }
        writeln!(f, "{}</{}>", indent, self.tag)
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        for child in next.children.iter().rev() {
            if let Node::Element(el) = child {
                self.stack.push(el);
            }
        }
        Some(next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid selector '{selector}': {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrCondition {
    name: String,
    value: Option<String>,
}

/// Compound selector: optional tag, any number of `.class`, `#id` and
/// `[attr]` / `[attr='value']` conditions. No combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let fail = |reason: &str| SelectorError {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        let source = input.trim();
        if source.is_empty() {
            return Err(fail("empty selector"));
        }

        let mut selector = Selector {
            tag: None,
            classes: Vec::new(),
            attrs: Vec::new(),
        };
        let mut rest = source;

        let tag_len = rest.find(['.', '#', '[']).unwrap_or(rest.len());
        if tag_len > 0 {
            let tag = &rest[..tag_len];
            if !is_ident(tag) {
                return Err(fail("invalid tag name"));
            }
            selector.tag = Some(tag.to_string());
            rest = &rest[tag_len..];
        }

        while let Some(first) = rest.chars().next() {
            match first {
                '.' | '#' => {
                    let body = &rest[1..];
                    let len = body.find(['.', '#', '[']).unwrap_or(body.len());
                    let name = &body[..len];
                    if !is_ident(name) {
                        return Err(fail("invalid class or id"));
                    }
                    if first == '.' {
                        selector.classes.push(name.to_string());
                    } else {
                        selector.attrs.push(AttrCondition {
                            name: "id".to_string(),
                            value: Some(name.to_string()),
                        });
                    }
                    rest = &body[len..];
                }
                '[' => {
                    let end = rest.find(']').ok_or_else(|| fail("unclosed '['"))?;
                    let condition = parse_attr(&rest[1..end])
                        .ok_or_else(|| fail("invalid attribute condition"))?;
                    selector.attrs.push(condition);
                    rest = &rest[end + 1..];
                }
                _ => return Err(fail("unexpected character")),
            }
        }

        Ok(selector)
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.tag.as_deref().map_or(true, |tag| tag == element.tag)
            && self.classes.iter().all(|c| element.has_class(c))
            && self.attrs.iter().all(|cond| match &cond.value {
                Some(value) => element.get_attr(&cond.name) == Some(value.as_str()),
                None => element.get_attr(&cond.name).is_some(),
            })
    }
}

fn parse_attr(body: &str) -> Option<AttrCondition> {
    match body.split_once('=') {
        None => {
            let name = body.trim();
            is_ident(name).then(|| AttrCondition {
                name: name.to_string(),
                value: None,
            })
        }
        Some((name, value)) => {
            let name = name.trim();
            let value = value.trim();
            let unquoted = value
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
                .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
                .unwrap_or(value);
            is_ident(name).then(|| AttrCondition {
                name: name.to_string(),
                value: Some(unquoted.to_string()),
            })
        }
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("form")
            .class("session-form")
            .child(Element::new("input").attr("name", "username").attr("type", "text"))
            .child(Element::new("input").attr("name", "password").attr("type", "password"))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .class("btn")
                    .class("btn--primary")
                    .text("Log in"),
            )
    }

    #[test]
    fn finds_by_attribute() {
        let tree = sample();
        assert!(tree.exists("button[type='submit']"));
        assert!(tree.exists("input[name=\"username\"]"));
        assert!(tree.exists("input[name=password]"));
        assert!(!tree.exists("input[name='email']"));
    }

    #[test]
    fn finds_by_class_and_tag() {
        let tree = sample();
        assert!(tree.exists("button.btn.btn--primary"));
        assert!(tree.exists(".session-form"));
        assert!(!tree.exists("div.session-form"));
    }

    #[test]
    fn displays_as_markup() {
        let tree = Element::new("p").class("note").attr("id", "x").text("hi");
        assert_eq!(tree.to_string(), "<p class=\"note\" id=\"x\">\n  hi\n</p>\n");
        assert_eq!(Element::new("br").to_string(), "<br />\n");
    }

    #[test]
    fn counts_matches() {
        assert_eq!(sample().count("input"), 2);
        assert_eq!(sample().count("input[type]"), 2);
    }

    #[test]
    fn text_content_joins_descendants() {
        let tree = Element::new("div")
            .text("Hello")
            .child(Element::new("span").text(" world "));
        assert_eq!(tree.text_content(), "Hello world");
    }

    #[test]
    fn invalid_selectors_are_rejected() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("button[type='submit'").is_err());
        assert!(Selector::parse("div > span").is_err());
        assert!(!sample().exists("div > span"));
    }

    #[test]
    fn id_selector_matches_id_attr() {
        let tree = Element::new("div").child(Element::new("p").attr("id", "intro"));
        assert!(tree.exists("#intro"));
        assert!(tree.exists("p#intro"));
    }

    #[test]
    fn child_if_skips_when_false() {
        let tree = Element::new("div").child_if(false, || Element::new("button"));
        assert!(!tree.exists("button"));
    }
}
