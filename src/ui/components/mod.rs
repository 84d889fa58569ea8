//! Composable UI components.
//!
//! Every component is a pure function from a slice of state to styled
//! [`Line`](crate::ui::helpers::Line)s. Components know nothing about the
//! terminal; calling one twice with the same input gives the same output.
//!
//! # Components
//!
//! - [`header`]: title badge
//! - [`footer`]: keybinding hints per mode
//! - [`search`]: search bar and applied-search indicator
//! - [`tag_strip`]: windowed horizontal tag menu
//! - [`list`]: numbered entry list
//! - [`detail`]: single entry sections
//! - [`selector`]: discovered sheets
//! - [`empty`]: loading, empty and error screens

pub mod detail;
pub mod empty;
pub mod footer;
pub mod header;
pub mod list;
pub mod search;
pub mod selector;
pub mod tag_strip;

pub use detail::render_detail;
pub use empty::{render_error_screen, render_message, render_no_sheets};
pub use footer::render_footer;
pub use header::render_header;
pub use list::{render_entry_list, EntryList};
pub use search::{render_search_bar, render_search_indicator};
pub use selector::render_selector;
pub use tag_strip::render_tag_strip;
