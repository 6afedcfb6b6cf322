use crate::document::Document;
use crate::error::Result;
use crate::node::NodeId;

/// Events delivered to handlers, targeted at the node that received them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on `target`.
    Click { target: NodeId, button: MouseButton },
}

impl Event {
    /// Primary-button click on `target`.
    pub fn click(target: NodeId) -> Self {
        Self::Click {
            target,
            button: MouseButton::Left,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// A handler recognised the event and acted on it.
    pub handled: bool,
    /// The default action (following a link) should not run.
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            default_prevented: false,
        }
    }

    pub fn prevent_default(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}

/// Something that reacts to events on a document.
pub trait Handler {
    fn handle_event(&self, doc: &mut Document, event: &Event) -> Result<EventOutcome>;
}

impl Document {
    /// Offer `event` to each handler in order until one handles it.
    pub fn dispatch(&mut self, event: &Event, handlers: &[&dyn Handler]) -> Result<EventOutcome> {
        for handler in handlers {
            let outcome = handler.handle_event(self, event)?;
            if outcome.handled {
                return Ok(outcome);
            }
        }
        log::trace!("[event] {event:?} not handled");
        Ok(EventOutcome::ignored())
    }
}
