//! Application layer coordinating state, events, and actions.
//!
//! This module defines the view-state machine, sitting between the event loop
//! (main.rs) and the domain, filter, ui and worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key press → keymap → Event → handle_event → Transition { state, actions }
//!                        ↑                                   ↓
//!                        └────────── Loader responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Pure transition function
//! - [`keymap`]: Key press to event mapping per mode
//! - [`modes`]: Screen state machine types
//! - [`state`]: View state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::app::{handle_event, Event, ViewState};
//!
//! let (state, _actions) = ViewState::start("cheatsheets".into(), None);
//! let transition = handle_event(state, &Event::Resize { width: 100, height: 30 });
//! assert!(transition.should_render);
//! assert_eq!(transition.state.width, 100);
//! ```

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, Transition};
pub use keymap::{map_key, Key};
pub use modes::{DetailOrigin, DetailView, Mode, SearchFocus};
pub use state::ViewState;
