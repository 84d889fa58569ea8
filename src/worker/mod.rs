//! Background loading of sheets and catalog directories.
//!
//! This module implements the loader that performs all file I/O off the event loop.
//! Each request runs on its own thread and answers exactly once.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with sequence numbers
//! - `handler`: Loader implementation and thread spawning

pub mod handler;
pub mod messages;

pub use handler::Loader;
pub use messages::{LoadKind, LoadOutcome, LoadRequest, LoadResponse};
