use super::ElementData;
use crate::types::Style;

#[derive(Debug, Clone)]
pub(crate) enum Child {
    Element(Element),
    Text(String),
}

/// Detached element description, mounted with
/// [`Document::mount`](crate::Document::mount).
///
/// ```
/// use navdom::{Document, Element};
///
/// let mut doc = Document::new();
/// let item = Element::new("li")
///     .class("toctree-l1")
///     .child(Element::new("a").attr("href", "index.html").text("Home"));
/// let id = doc.mount(doc.root(), item).unwrap();
/// assert_eq!(doc.text_content(id), "Home");
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    data: ElementData,
    children: Vec<Child>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            data: ElementData::new(tag),
            children: Vec::new(),
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.data.classes.add(class);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.data.set_attr(name, value);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.data.style = style;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }

    pub(crate) fn into_parts(self) -> (ElementData, Vec<Child>) {
        (self.data, self.children)
    }
}
