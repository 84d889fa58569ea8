//! Loader request and response types.
//!
//! This module defines the protocol between the event loop and the one-shot loader
//! threads. Every request carries a sequence number chosen by the state machine;
//! the response echoes it so that completions of superseded requests can be
//! recognised and dropped.

use crate::domain::{Catalog, ErrorInfo};
use std::path::PathBuf;
use std::sync::Arc;

/// Macro to generate constructor methods for [`LoadKind`] variants.
///
/// Generates one constructor per variant that wraps the variant in a
/// [`LoadRequest`] with the given sequence number.
macro_rules! load_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $field:ident: $ty:ty })
        ),* $(,)?
    ) => {
        impl LoadRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request tagged with `seq`")]
                #[must_use]
                pub fn $builder_name(seq: u64, $field: impl Into<$ty>) -> Self {
                    Self {
                        seq,
                        kind: LoadKind::$variant { $field: $field.into() },
                    }
                }
            )*
        }
    };
}

load_request_builders! {
    load_catalog(Catalog { path: PathBuf }),
    discover_sheets(Sheets { dir: PathBuf }),
}

/// What a loader thread should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadKind {
    /// Read and decode one sheet.
    Catalog {
        /// Path of the sheet file.
        path: PathBuf,
    },

    /// List the sheets under a catalog directory.
    Sheets {
        /// Catalog root directory.
        dir: PathBuf,
    },
}

/// A load request sent to a loader thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Sequence number assigned by the state machine.
    pub seq: u64,
    pub kind: LoadKind,
}

/// Result of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A sheet was read successfully.
    CatalogLoaded(Arc<Catalog>),

    /// The catalog directory was scanned successfully.
    SheetsDiscovered(Vec<String>),

    /// The load failed; the viewer freezes on the error screen.
    Failed(ErrorInfo),
}

/// Response sent from a loader thread back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResponse {
    /// Sequence number of the request this answers.
    pub seq: u64,
    pub outcome: LoadOutcome,
}

impl LoadResponse {
    /// Successful sheet load.
    #[must_use]
    pub fn catalog(seq: u64, catalog: Catalog) -> Self {
        Self {
            seq,
            outcome: LoadOutcome::CatalogLoaded(Arc::new(catalog)),
        }
    }

    /// Successful directory scan.
    #[must_use]
    pub const fn sheets(seq: u64, sheets: Vec<String>) -> Self {
        Self {
            seq,
            outcome: LoadOutcome::SheetsDiscovered(sheets),
        }
    }

    /// Failed load with a display message.
    #[must_use]
    pub fn failed(seq: u64, message: impl Into<String>) -> Self {
        Self {
            seq,
            outcome: LoadOutcome::Failed(ErrorInfo {
                message: message.into(),
            }),
        }
    }
}
