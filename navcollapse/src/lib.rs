//! Collapsible sections for a documentation sidebar.
//!
//! Documentation generators render a section both as a top-level link and as
//! a labelled sublist right after it. [`NavbarCollapser::initialize`] folds
//! the two together, puts a caret toggle in front of the link and collapses
//! the sublist unless it leads to the current page.
//! [`NavbarCollapser::on_toggle_click`] flips a section open or closed.

pub mod collapser;
pub mod config;
pub mod error;
pub mod logging;
pub mod template;
pub mod toggle;

pub use collapser::{Click, InitReport, NavbarCollapser};
pub use config::CollapseConfig;
pub use error::{CollapseError, Result};
pub use template::format_template;
pub use toggle::{CaretDirection, Toggle, ToggleState};
