use navdom::NodeId;

/// Which way the caret points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaretDirection {
    Left,
    Down,
}

impl CaretDirection {
    /// Token substituted into the toggle template.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Down => "down",
        }
    }
}

/// Whether a section's sublist is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleState {
    Collapsed,
    Expanded,
}

impl ToggleState {
    pub fn caret(self) -> CaretDirection {
        match self {
            Self::Collapsed => CaretDirection::Left,
            Self::Expanded => CaretDirection::Down,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// A toggle created by the initialization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    /// The caret element.
    pub node: NodeId,
    /// The sibling container that now holds the section link.
    pub container: NodeId,
    /// The section link moved into `container`.
    pub link: NodeId,
    /// Sublists whose visibility the caret controls.
    pub sublists: Vec<NodeId>,
    /// State the pass seeded.
    pub state: ToggleState,
}
