use std::fmt;

/// Ordered, duplicate-free list of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated `class` attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for class in value.split_whitespace() {
            list.add(class);
        }
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Append a class. Returns false if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if class.is_empty() || self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    /// Returns false if the class was not present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_duplicates_and_keeps_order() {
        let list = ClassList::parse("  fa fa-caret-left fa  collapse-navbar ");
        assert_eq!(list.to_string(), "fa fa-caret-left collapse-navbar");
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut list = ClassList::parse("fa fa-caret-left collapse-navbar");
        assert!(list.remove("fa-caret-left"));
        assert!(list.add("fa-caret-down"));
        assert!(!list.add("fa"));
        assert_eq!(list.to_string(), "fa collapse-navbar fa-caret-down");
    }
}
