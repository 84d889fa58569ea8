//! One-shot loader threads.
//!
//! The event loop never performs file I/O itself. Each [`LoadRequest`] is executed
//! by [`Loader::spawn`] on its own thread, which reports back exactly once through
//! the supplied callback. The loader never sees the view state.

use crate::domain::{ErrorInfo, Result};
use crate::source::SheetSource;
use crate::worker::{LoadKind, LoadOutcome, LoadRequest, LoadResponse};
use std::sync::Arc;
use std::thread;

/// Executes load requests against a [`SheetSource`].
#[derive(Clone)]
pub struct Loader {
    source: Arc<dyn SheetSource>,
}

impl Loader {
    /// Creates a loader reading from `source`.
    pub fn new(source: Arc<dyn SheetSource>) -> Self {
        Self { source }
    }

    /// Helper for turning a source result into a response with consistent logging.
    fn handle_result<T, F>(operation: &str, seq: u64, result: Result<T>, on_success: F) -> LoadResponse
    where
        F: FnOnce(T) -> LoadResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, seq, "load succeeded");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, seq, error = %e, "load failed");
                LoadResponse {
                    seq,
                    outcome: LoadOutcome::Failed(ErrorInfo::from(&e)),
                }
            }
        }
    }

    /// Runs `request` on the calling thread and returns its response.
    pub fn handle_request(&self, request: LoadRequest) -> LoadResponse {
        let _span = tracing::debug_span!("loader_handle_request", seq = request.seq, kind = ?request.kind).entered();

        let seq = request.seq;
        match request.kind {
            LoadKind::Catalog { path } => Self::handle_result(
                "load catalog",
                seq,
                self.source.load_catalog(&path),
                |catalog| LoadResponse::catalog(seq, catalog),
            ),
            LoadKind::Sheets { dir } => Self::handle_result(
                "discover sheets",
                seq,
                self.source.discover_sheets(&dir),
                |sheets| LoadResponse::sheets(seq, sheets),
            ),
        }
    }

    /// Runs `request` on a new thread and hands the response to `reply`.
    ///
    /// If the thread cannot be spawned the request is answered with a failure on the
    /// calling thread instead, so every request still gets exactly one reply.
    pub fn spawn<F>(&self, request: LoadRequest, reply: F)
    where
        F: FnOnce(LoadResponse) + Send + 'static,
    {
        let loader = self.clone();
        let seq = request.seq;
        // `Builder::spawn` drops its closure on failure, so `reply` is kept in a
        // shared slot to answer the failed spawn here. Without that reply the
        // state would wait on `pending_load` forever.
        let reply = Arc::new(std::sync::Mutex::new(Some(reply)));
        let thread_reply = Arc::clone(&reply);

        let spawned = thread::Builder::new()
            .name(format!("loader-{seq}"))
            .spawn(move || {
                let response = loader.handle_request(request);
                if let Some(reply) = thread_reply.lock().ok().and_then(|mut slot| slot.take()) {
                    reply(response);
                }
            });

        if let Err(e) = spawned {
            tracing::warn!(seq, error = %e, "failed to spawn loader thread");
            if let Some(reply) = reply.lock().ok().and_then(|mut slot| slot.take()) {
                reply(LoadResponse::failed(seq, format!("failed to start loader: {e}")));
            }
        }
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, Entry, ViewerError};
    use std::path::{Path, PathBuf};

    struct FakeSource;

    impl SheetSource for FakeSource {
        fn load_catalog(&self, path: &Path) -> Result<Catalog> {
            if path.ends_with("git.yaml") {
                Ok(Catalog {
                    title: "Git".into(),
                    entries: vec![Entry::new("git status", "")],
                    ..Catalog::default()
                })
            } else {
                Err(ViewerError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                })
            }
        }

        fn discover_sheets(&self, _dir: &Path) -> Result<Vec<String>> {
            Ok(vec!["git.yaml".into()])
        }
    }

    fn loader() -> Loader {
        Loader::new(Arc::new(FakeSource))
    }

    #[test]
    fn successful_load_echoes_sequence_number() {
        let response = loader().handle_request(LoadRequest::load_catalog(7, "dir/git.yaml"));
        assert_eq!(response.seq, 7);
        assert!(matches!(response.outcome, LoadOutcome::CatalogLoaded(ref c) if c.title == "Git"));
    }

    #[test]
    fn failed_load_reports_message() {
        let response = loader().handle_request(LoadRequest::load_catalog(3, PathBuf::from("x.yaml")));
        match response.outcome {
            LoadOutcome::Failed(info) => assert!(info.message.contains("x.yaml")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn spawned_load_replies_exactly_once() {
        let (tx, rx) = crossbeam_channel::unbounded();
        loader().spawn(LoadRequest::discover_sheets(2, "sheets"), move |response| {
            let _ = tx.send(response);
        });

        let response = rx.recv().unwrap();
        assert_eq!(response, LoadResponse::sheets(2, vec!["git.yaml".into()]));
        assert!(rx.recv().is_err());
    }
}
