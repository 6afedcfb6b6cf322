pub mod error;
pub mod event;
pub mod node;
pub mod query;
pub mod types;

mod document;
mod markup;

pub use document::Document;
pub use error::{DomError, Result};
pub use event::{Event, EventOutcome, Handler, MouseButton};
pub use node::{Element, ElementData, NodeId, NodeKind};
pub use query::Selector;
pub use types::{ClassList, Style};
