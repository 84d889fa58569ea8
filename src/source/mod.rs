//! Sheet source layer.
//!
//! This module provides the abstraction over where cheat sheets are read from and
//! the YAML filesystem implementation used by the binary.
//!
//! # Modules
//!
//! - `backend`: [`SheetSource`] trait
//! - `yaml`: YAML file implementation with recursive discovery

pub mod backend;
pub mod yaml;

pub use backend::SheetSource;
pub use yaml::YamlSheetSource;
