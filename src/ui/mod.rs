//! User interface layer with component-based architecture.
//!
//! This module turns view state into terminal output in two steps. Pure
//! components format state slices into styled lines; the renderer resolves
//! styles through the active theme and paints the frame with crossterm.
//!
//! # Architecture
//!
//! ```text
//! ViewState → compute_viewmodel → UIViewModel → render → terminal
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: frame layout and body scrolling
//! - [`renderer`]: crossterm painter
//! - [`components`]: pure line producers for each screen part
//! - [`helpers`]: `Line`, `Span`, `Role` and match highlighting
//! - [`tag_window`]: bounded-width tag strip windowing
//! - [`theme`]: colour schemes and role styles

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod tag_window;
pub mod theme;
pub mod viewmodel;

pub use helpers::{Line, Role, Span};
pub use renderer::render;
pub use tag_window::{visible_tags, TagCellMetrics, TagWindow, VisibleTag};
pub use theme::Theme;
pub use viewmodel::UIViewModel;
