mod class_list;
mod style;

pub use class_list::ClassList;
pub use style::Style;
