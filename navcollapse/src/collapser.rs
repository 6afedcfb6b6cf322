use navdom::{Document, Event, EventOutcome, Handler, MouseButton, NodeId};

use crate::config::CollapseConfig;
use crate::error::{CollapseError, Result};
use crate::toggle::{CaretDirection, Toggle, ToggleState};

/// Summary of an initialization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Toggles created, in document order.
    pub toggles: Vec<Toggle>,
    /// Items whose link text differed from the sibling label.
    pub unmatched: usize,
    /// Items missing a sibling, label or link, or already removed.
    pub skipped: usize,
}

impl InitReport {
    pub fn collapsed(&self) -> usize {
        self.toggles
            .iter()
            .filter(|t| t.state == ToggleState::Collapsed)
            .count()
    }
}

/// Result of a click offered to [`NavbarCollapser::on_toggle_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub outcome: EventOutcome,
    /// The toggle that was clicked, if the click landed on one.
    pub toggle: Option<NodeId>,
    /// State after the click.
    pub state: Option<ToggleState>,
}

impl Click {
    fn ignored() -> Self {
        Self {
            outcome: EventOutcome::ignored(),
            toggle: None,
            state: None,
        }
    }
}

enum ItemOutcome {
    Toggled(Toggle),
    Unmatched,
    Skipped,
}

/// Folds duplicated section headings into collapsible sublists.
#[derive(Debug, Clone, Default)]
pub struct NavbarCollapser {
    config: CollapseConfig,
}

impl NavbarCollapser {
    pub fn new(config: CollapseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollapseConfig {
        &self.config
    }

    /// Run the one-time restructuring pass over `doc`.
    ///
    /// Top-level items are snapshotted up front and visited in document
    /// order. Missing siblings, labels or links leave an item untouched.
    /// Fails before touching the document if the toggle template is unusable.
    pub fn initialize(&self, doc: &mut Document) -> Result<InitReport> {
        self.config.validate()?;
        let items = doc.select_all(&self.config.top_level);
        log::debug!(
            "[collapse] {} top-level items matching {}",
            items.len(),
            self.config.top_level
        );

        let mut report = InitReport::default();
        for item in items {
            match self.collapse_item(doc, item)? {
                ItemOutcome::Toggled(toggle) => report.toggles.push(toggle),
                ItemOutcome::Unmatched => report.unmatched += 1,
                ItemOutcome::Skipped => report.skipped += 1,
            }
        }

        log::debug!(
            "[collapse] {} toggles ({} collapsed), {} unmatched, {} skipped",
            report.toggles.len(),
            report.collapsed(),
            report.unmatched,
            report.skipped
        );
        Ok(report)
    }

    fn collapse_item(&self, doc: &mut Document, item: NodeId) -> Result<ItemOutcome> {
        let config = &self.config;

        if !doc.is_attached(item) {
            return Ok(ItemOutcome::Skipped);
        }
        let Some(next) = doc.next_element_sibling(item) else {
            log::trace!("[collapse] {item}: no following sibling");
            return Ok(ItemOutcome::Skipped);
        };
        let Some(link) = doc.find_first(item, &config.link) else {
            log::trace!("[collapse] {item}: no link");
            return Ok(ItemOutcome::Skipped);
        };
        let Some(label) = doc.find_first(next, &config.label) else {
            log::trace!("[collapse] {item}: sibling {next} has no label");
            return Ok(ItemOutcome::Skipped);
        };
        let sublists = doc.find_all(next, &config.sublist);

        let text = doc.text_content(link);
        if text != doc.text_content(label) {
            return Ok(ItemOutcome::Unmatched);
        }

        doc.prepend_child(next, link)?;
        doc.detach(label)?;
        if doc.has_class(item, &config.current_class) {
            doc.add_class(next, &config.current_class);
        }

        let has_current = sublists.iter().any(|&list| {
            doc.descendants(list)
                .into_iter()
                .any(|n| doc.has_class(n, &config.current_class))
        });
        let state = if has_current {
            ToggleState::Expanded
        } else {
            for &list in &sublists {
                doc.hide(list);
            }
            log::info!("caret left");
            ToggleState::Collapsed
        };

        let node = self.create_toggle(doc, state.caret())?;
        doc.insert_before(link, node)?;
        doc.detach(item)?;
        log::debug!("[collapse] '{text}' -> {state:?}");

        Ok(ItemOutcome::Toggled(Toggle {
            node,
            container: next,
            link,
            sublists,
            state,
        }))
    }

    fn create_toggle(&self, doc: &mut Document, direction: CaretDirection) -> Result<NodeId> {
        let markup = self.config.caret_markup(direction);
        doc.parse_fragment(&markup)
            .map_err(|source| CollapseError::Template { markup, source })
    }

    /// Handle a click that may have landed on a toggle.
    ///
    /// Clicks on anything other than a toggle (or an element inside one) are
    /// left alone. A toggle click never follows the link and flips the
    /// section between collapsed and expanded.
    pub fn on_toggle_click(&self, doc: &mut Document, event: &Event) -> Click {
        let config = &self.config;
        let Event::Click { target, button } = *event;
        if button != MouseButton::Left {
            return Click::ignored();
        }
        let Some(toggle) = doc.closest(target, &config.toggle_selector()) else {
            return Click::ignored();
        };

        let sublists = doc
            .closest(toggle, &config.top_level)
            .map(|parent| doc.find_all(parent, &config.sublist))
            .unwrap_or_default();

        // Anything not showing the collapsed caret counts as expanded.
        let current = if doc.has_class(toggle, &config.collapsed_class) {
            ToggleState::Collapsed
        } else {
            ToggleState::Expanded
        };
        let state = current.flipped();
        match state {
            ToggleState::Expanded => {
                for &list in &sublists {
                    doc.show(list);
                }
                doc.remove_class(toggle, &config.collapsed_class);
                doc.add_class(toggle, &config.expanded_class);
            }
            ToggleState::Collapsed => {
                for &list in &sublists {
                    doc.hide(list);
                }
                doc.add_class(toggle, &config.collapsed_class);
                doc.remove_class(toggle, &config.expanded_class);
            }
        }
        log::debug!("[collapse] toggle {toggle} -> {state:?}");

        Click {
            outcome: EventOutcome::handled().prevent_default(),
            toggle: Some(toggle),
            state: Some(state),
        }
    }

    /// Current state of a toggle, read back from its classes.
    pub fn toggle_state(&self, doc: &Document, toggle: NodeId) -> Option<ToggleState> {
        if doc.has_class(toggle, &self.config.collapsed_class) {
            Some(ToggleState::Collapsed)
        } else if doc.has_class(toggle, &self.config.expanded_class) {
            Some(ToggleState::Expanded)
        } else {
            None
        }
    }
}

impl Handler for NavbarCollapser {
    fn handle_event(&self, doc: &mut Document, event: &Event) -> navdom::Result<EventOutcome> {
        Ok(self.on_toggle_click(doc, event).outcome)
    }
}
