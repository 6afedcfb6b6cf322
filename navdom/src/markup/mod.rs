//! Minimal HTML fragment reader and writer.
//!
//! Enough HTML to round-trip sidebar fragments: elements, quoted or bare
//! attributes, text with the common entities, void elements, comments and
//! doctype declarations (both discarded). No implicit tag closing.

mod parse;
mod serialize;

pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}
