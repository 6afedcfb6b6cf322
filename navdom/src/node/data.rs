use crate::types::{ClassList, Style};

/// Element payload: tag name, attributes, class list and inline style.
///
/// `class` and `style` are kept typed rather than as raw attribute strings;
/// [`set_attr`](Self::set_attr) routes them to the right field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub classes: ClassList,
    pub style: Style,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Look up a plain attribute. `class` and `style` live in their own fields.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name.to_ascii_lowercase().as_str() {
            "class" => self.classes = ClassList::parse(&value),
            "style" => self.style = Style::parse(&value),
            lower => {
                match self.attrs.iter_mut().find(|(key, _)| key == lower) {
                    Some((_, existing)) => *existing = value,
                    None => self.attrs.push((lower.to_string(), value)),
                }
            }
        }
    }
}
