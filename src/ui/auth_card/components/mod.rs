//! Auth card UI components
//!
//! Each component renders one part of the card into a buffer and reports
//! the rectangles it occupies for hit-testing.

pub mod fields;
pub mod header;
pub mod pin;
pub mod role_selector;
pub mod tabs;
