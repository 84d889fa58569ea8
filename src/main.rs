//! Terminal entry point.
//!
//! This module wires the library to a real terminal. It owns the only mutable
//! copy of the [`ViewState`] and runs a single cooperative loop over one channel:
//!
//! ```text
//! ┌──────────────┐   LoopInput::Key / Resize   ┌─────────────────────┐
//! │ input thread │ ──────────────────────────▶ │                     │
//! └──────────────┘                             │   event loop        │
//! ┌──────────────┐   LoopInput::Event(Loaded)  │   handle_event      │
//! │ loader       │ ──────────────────────────▶ │   execute actions   │
//! │ (per load)   │ ◀────────── spawn ───────── │   render            │
//! └──────────────┘                             └─────────────────────┘
//! ```
//!
//! # Exit Codes
//!
//! - `0`: the user quit
//! - `1`: the theme, the terminal or the event loop could not be started

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use crossbeam_channel::{Receiver, Sender};

use cheatsheet_viewer::app::map_key;
use cheatsheet_viewer::cli::Cli;
use cheatsheet_viewer::source::YamlSheetSource;
use cheatsheet_viewer::terminal::{self, LoopInput, TerminalSession};
use cheatsheet_viewer::ui::render;
use cheatsheet_viewer::worker::Loader;
use cheatsheet_viewer::{
    handle_event, observability, resolve_theme, Action, Config, Event, Result, Theme, ViewState,
};

fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    observability::init_tracing(&config);

    tracing::info!(
        sheet_dir = %config.sheet_dir.display(),
        sheet_file = ?config.sheet_file,
        "starting cheatsheet viewer"
    );

    match run(&config) {
        Ok(()) => {
            tracing::info!("viewer exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "viewer failed to start");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Sets up the theme, terminal and threads, then runs the loop until quit.
fn run(config: &Config) -> Result<()> {
    let theme = resolve_theme(config)?;
    let loader = Loader::new(Arc::new(YamlSheetSource));
    let (tx, rx) = crossbeam_channel::unbounded();

    let (state, actions) = ViewState::start(config.sheet_dir.clone(), config.sheet_file.as_deref());

    let session = TerminalSession::enter()?;
    let (width, height) = session.size()?;
    terminal::spawn_input_thread(tx.clone())?;

    let mut event_loop = EventLoop {
        state,
        theme,
        loader,
        tx,
    };
    if event_loop.execute(actions) {
        return Ok(());
    }
    event_loop.dispatch(&Event::Resize { width, height })?;
    event_loop.run(&rx)?;

    drop(session);
    Ok(())
}

struct EventLoop {
    state: ViewState,
    theme: Theme,
    loader: Loader,
    tx: Sender<LoopInput>,
}

impl EventLoop {
    /// Processes input until an action asks to quit or every sender is gone.
    fn run(&mut self, rx: &Receiver<LoopInput>) -> Result<()> {
        while let Ok(input) = rx.recv() {
            let event = match input {
                LoopInput::Key(key) => match map_key(key, self.state.mode) {
                    Some(event) => event,
                    None => continue,
                },
                LoopInput::Event(event) => event,
            };

            if self.dispatch(&event)? {
                return Ok(());
            }
        }

        tracing::warn!("event channel closed");
        Ok(())
    }

    /// Feeds one event through the state machine.
    ///
    /// Returns `true` when the loop should stop.
    fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let state = std::mem::replace(&mut self.state, ViewState::new(PathBuf::new()));
        let transition = handle_event(state, event);
        self.state = transition.state;

        if self.execute(transition.actions) {
            return Ok(true);
        }

        if transition.should_render {
            self.paint()?;
        }
        Ok(false)
    }

    /// Runs side effects in order. Returns `true` on [`Action::Quit`].
    fn execute(&self, actions: Vec<Action>) -> bool {
        for action in actions {
            match action {
                Action::Quit => return true,
                Action::Load(request) => {
                    tracing::debug!(seq = request.seq, kind = ?request.kind, "dispatching load");
                    let tx = self.tx.clone();
                    self.loader.spawn(request, move |response| {
                        let _ = tx.send(LoopInput::Event(Event::Loaded(response)));
                    });
                }
            }
        }
        false
    }

    fn paint(&self) -> Result<()> {
        let vm = self.state.compute_viewmodel();
        let mut out = BufWriter::new(io::stdout().lock());
        render(&mut out, &vm, &self.theme, self.state.width, self.state.height)?;
        Ok(())
    }
}
