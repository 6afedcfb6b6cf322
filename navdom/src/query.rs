//! Typed selectors and the traversal queries built on them.
//!
//! A [`Selector`] is a single compound selector: an optional tag, any number
//! of required classes and any number of `:not(...)` exclusions. That covers
//! the shapes the sidebar markup needs (`li.toctree-l1`,
//! `ul.subnav:not(.toctree-l2)`) without a general CSS engine.

use std::fmt;
use std::str::FromStr;

use crate::document::Document;
use crate::error::{DomError, Result};
use crate::node::{ElementData, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    excluded: Vec<Selector>,
}

impl Selector {
    /// Matches every element.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_ascii_lowercase()),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Exclude elements matching `other`.
    pub fn not(mut self, other: Selector) -> Self {
        self.excluded.push(other);
        self
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (selector, rest) = parse_compound(trimmed, input)?;
        if !rest.is_empty() {
            return Err(DomError::selector(
                input,
                format!("unexpected input '{rest}'"),
            ));
        }
        Ok(selector)
    }

    pub fn matches(&self, element: &ElementData) -> bool {
        self.tag
            .as_deref()
            .is_none_or(|tag| tag == element.tag)
            && self.classes.iter().all(|c| element.classes.contains(c))
            && !self.excluded.iter().any(|s| s.matches(element))
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => f.write_str(tag)?,
            None if self.classes.is_empty() && self.excluded.is_empty() => f.write_str("*")?,
            None => {}
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for excluded in &self.excluded {
            write!(f, ":not({excluded})")?;
        }
        Ok(())
    }
}

fn split_ident(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(s.len());
    s.split_at(end)
}

fn parse_compound<'a>(s: &'a str, full: &str) -> Result<(Selector, &'a str)> {
    let mut selector = Selector::any();
    let mut rest = s;

    if let Some(r) = rest.strip_prefix('*') {
        rest = r;
    } else {
        let (tag, r) = split_ident(rest);
        if !tag.is_empty() {
            selector.tag = Some(tag.to_ascii_lowercase());
        }
        rest = r;
    }

    loop {
        if let Some(r) = rest.strip_prefix('.') {
            let (class, r) = split_ident(r);
            if class.is_empty() {
                return Err(DomError::selector(full, "expected class name after '.'"));
            }
            selector.classes.push(class.to_string());
            rest = r;
        } else if let Some(r) = rest.strip_prefix(":not(") {
            let (inner, r) = parse_compound(r.trim_start(), full)?;
            rest = r
                .trim_start()
                .strip_prefix(')')
                .ok_or_else(|| DomError::selector(full, "unclosed ':not('"))?;
            selector.excluded.push(inner);
        } else {
            break;
        }
    }

    if rest.len() == s.len() {
        return Err(DomError::selector(full, "empty selector"));
    }
    Ok((selector, rest))
}

impl Document {
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.element(id).is_some_and(|el| selector.matches(el))
    }

    /// First descendant of `scope` matching `selector`, in document order.
    pub fn find_first(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&n| self.matches(n, selector))
    }

    /// Every descendant of `scope` matching `selector`, in document order.
    pub fn find_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.matches(n, selector))
            .collect()
    }

    /// Every attached element matching `selector`.
    pub fn select_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.find_all(self.root(), selector)
    }

    /// `node` itself or its nearest ancestor matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.matches(id, selector) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }
}
