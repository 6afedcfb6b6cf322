//! Collapser configuration.

use navdom::{Document, Selector};

use crate::error::{CollapseError, Result};
use crate::template::format_template;
use crate::toggle::CaretDirection;

/// Caret markup inserted in front of each section link. `{0}` is replaced
/// with the caret direction.
pub const DEFAULT_TOGGLE_TEMPLATE: &str = r##"<a class="fa fa-caret-{0} collapse-navbar" href="#" style="display: inline-block; position: absolute; width: auto; right: 0; margin-right: 2px; padding-left: 2px; padding-right: 2px; z-index: 1001;"></a>"##;

/// Where to find things in the sidebar markup and how toggles look.
///
/// The defaults match the Read the Docs style sidebar emitted by MkDocs.
///
/// # Example
///
/// ```
/// use navcollapse::CollapseConfig;
/// use navdom::Selector;
///
/// let config = CollapseConfig::default()
///     .with_top_level(Selector::tag("li").class("nav-l1"))
///     .with_current_class("active");
/// ```
#[derive(Debug, Clone)]
pub struct CollapseConfig {
    /// Top-level navigation items.
    ///
    /// Default: `li.toctree-l1`
    pub top_level: Selector,

    /// Label inside the following sibling that repeats the item's link text.
    ///
    /// Default: `span`
    pub label: Selector,

    /// Section link inside a top-level item.
    ///
    /// Default: `a`
    pub link: Selector,

    /// Nested sublists whose visibility is toggled.
    ///
    /// Default: `ul.subnav:not(li.toctree-l2)`
    pub sublist: Selector,

    /// Marks the active page and its ancestors.
    ///
    /// Default: `current`
    pub current_class: String,

    /// Class every toggle carries; clicks are matched against it.
    ///
    /// Default: `collapse-navbar`
    pub toggle_class: String,

    /// Toggle class while the sublist is hidden.
    ///
    /// Default: `fa-caret-left`
    pub collapsed_class: String,

    /// Toggle class while the sublist is shown.
    ///
    /// Default: `fa-caret-down`
    pub expanded_class: String,

    /// Toggle markup with a `{0}` placeholder for the caret direction. Must
    /// format into a single element carrying `toggle_class` and the matching
    /// collapsed/expanded class.
    pub toggle_template: String,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            top_level: Selector::tag("li").class("toctree-l1"),
            label: Selector::tag("span"),
            link: Selector::tag("a"),
            sublist: Selector::tag("ul")
                .class("subnav")
                .not(Selector::tag("li").class("toctree-l2")),
            current_class: "current".to_string(),
            toggle_class: "collapse-navbar".to_string(),
            collapsed_class: "fa-caret-left".to_string(),
            expanded_class: "fa-caret-down".to_string(),
            toggle_template: DEFAULT_TOGGLE_TEMPLATE.to_string(),
        }
    }
}

impl CollapseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_level(mut self, selector: Selector) -> Self {
        self.top_level = selector;
        self
    }

    pub fn with_label(mut self, selector: Selector) -> Self {
        self.label = selector;
        self
    }

    pub fn with_link(mut self, selector: Selector) -> Self {
        self.link = selector;
        self
    }

    pub fn with_sublist(mut self, selector: Selector) -> Self {
        self.sublist = selector;
        self
    }

    pub fn with_current_class(mut self, class: impl Into<String>) -> Self {
        self.current_class = class.into();
        self
    }

    /// Set the toggle template together with the classes it produces.
    pub fn with_toggle(
        mut self,
        template: impl Into<String>,
        toggle_class: impl Into<String>,
        collapsed_class: impl Into<String>,
        expanded_class: impl Into<String>,
    ) -> Self {
        self.toggle_template = template.into();
        self.toggle_class = toggle_class.into();
        self.collapsed_class = collapsed_class.into();
        self.expanded_class = expanded_class.into();
        self
    }

    /// Selector matching any toggle.
    pub fn toggle_selector(&self) -> Selector {
        Selector::any().class(self.toggle_class.as_str())
    }

    /// Toggle markup for one caret direction.
    pub fn caret_markup(&self, direction: CaretDirection) -> String {
        format_template(&self.toggle_template, &[direction.as_str()])
    }

    /// Check that both caret variants format into a single element that
    /// carries the toggle class and the matching state class.
    pub fn validate(&self) -> Result<()> {
        let mut scratch = Document::new();
        for (direction, state_class) in [
            (CaretDirection::Left, &self.collapsed_class),
            (CaretDirection::Down, &self.expanded_class),
        ] {
            let markup = self.caret_markup(direction);
            let node = match scratch.parse_fragment(&markup) {
                Ok(node) => node,
                Err(source) => return Err(CollapseError::Template { markup, source }),
            };
            for class in [&self.toggle_class, state_class] {
                if !scratch.has_class(node, class) {
                    return Err(CollapseError::ToggleClass {
                        markup,
                        class: class.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
