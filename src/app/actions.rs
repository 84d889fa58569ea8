//! Actions representing side effects to be executed by the event loop.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or loader results.
//! Actions bridge the pure transition function and effectful operations like
//! spawning a load or leaving the program.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::app::Action;
//! use cheatsheet_viewer::worker::LoadRequest;
//!
//! let actions = vec![Action::Load(LoadRequest::discover_sheets(1, "cheatsheets"))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::LoadRequest;

/// Commands representing side effects to be executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Restores the terminal and exits with status 0.
    Quit,

    /// Runs a one-shot load on a worker thread.
    ///
    /// The worker answers with exactly one `Event::Loaded` carrying the same
    /// sequence number as the request.
    Load(LoadRequest),
}
