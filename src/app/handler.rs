//! Event handling and state transition logic.
//!
//! This module implements the transition function of the viewer. It processes
//! key presses, terminal resizes and loader responses, and turns them into a new
//! [`ViewState`] plus the side effects the event loop has to run.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the input thread or a loader thread
//! 2. [`handle_event`] consumes the current state and matches the event
//! 3. The state is updated through `ViewState` helpers
//! 4. [`ViewState::restore_invariants`] clamps every index once
//! 5. A [`Transition`] carrying the new state and the actions is returned
//!
//! The function never touches the terminal or the filesystem, so every
//! transition can be tested without an event loop.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::app::{handle_event, Action, Event, ViewState};
//!
//! let state = ViewState::new("cheatsheets".into());
//! let transition = handle_event(state, &Event::Quit);
//! assert_eq!(transition.actions, [Action::Quit]);
//! ```

#![deny(clippy::wildcard_enum_match_arm)]

use crate::app::modes::{DetailOrigin, Mode, SearchFocus};
use crate::app::{Action, ViewState};
use crate::worker::{LoadOutcome, LoadRequest, LoadResponse};

/// Inputs of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Move up a row, or scroll up in the detail view.
    Up,
    /// Move down a row, or scroll down in the detail view.
    Down,
    /// Previous tag (list view only).
    Left,
    /// Next tag (list view only).
    Right,
    /// Select a sheet, open an entry, or apply the search query.
    Enter,
    /// Leave the detail view or the search.
    Back,
    /// Exit the program. Honoured in every state.
    Quit,
    /// Start typing a new search query.
    StartSearch,
    /// Go back to the sheet selector.
    OpenSelector,
    /// Append a character to the search query.
    Char(char),
    /// Remove the last character of the search query.
    Backspace,

    /// The terminal was resized.
    Resize {
        width: usize,
        height: usize,
    },

    /// A loader thread finished.
    Loaded(LoadResponse),
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,

    /// Whether the frame has to be repainted.
    pub should_render: bool,

    /// Side effects, in execution order.
    pub actions: Vec<Action>,
}

/// Processes `event` and returns the next state with its side effects.
///
/// While a load error is displayed every event except [`Event::Quit`] is
/// ignored.
#[must_use]
pub fn handle_event(state: ViewState, event: &Event) -> Transition {
    let _span = tracing::debug_span!("handle_event", mode = state.mode.name(), event = ?event).entered();

    let mut state = state;
    let mut actions = Vec::new();

    if state.last_error.is_some() && *event != Event::Quit {
        tracing::trace!("input ignored while an error is shown");
        return Transition {
            state,
            should_render: false,
            actions,
        };
    }

    let should_render = match event {
        Event::Quit => {
            actions.push(Action::Quit);
            false
        }
        Event::Up => move_vertical(&mut state, false),
        Event::Down => move_vertical(&mut state, true),
        Event::Left => move_tag(&mut state, false),
        Event::Right => move_tag(&mut state, true),
        Event::Enter => on_enter(&mut state, &mut actions),
        Event::Back => on_back(&mut state),
        Event::StartSearch => start_search(&mut state),
        Event::OpenSelector => open_selector(&mut state, &mut actions),
        Event::Char(c) => edit_query(&mut state, |query| {
            query.push(*c);
            true
        }),
        Event::Backspace => edit_query(&mut state, |query| query.pop().is_some()),
        Event::Resize { width, height } => {
            tracing::debug!(width, height, "terminal resized");
            state.width = *width;
            state.height = *height;
            true
        }
        Event::Loaded(response) => on_loaded(&mut state, response),
    };

    state.restore_invariants();

    Transition {
        state,
        should_render,
        actions,
    }
}

fn move_vertical(state: &mut ViewState, down: bool) -> bool {
    let step = |index: usize| {
        if down {
            index.saturating_add(1)
        } else {
            index.saturating_sub(1)
        }
    };

    match state.mode {
        Mode::Selector => state.selected_sheet = step(state.selected_sheet),
        Mode::List | Mode::Search(_) => state.selected_entry = step(state.selected_entry),
        Mode::Detail(_) => state.detail_scroll = step(state.detail_scroll),
    }
    true
}

fn move_tag(state: &mut ViewState, right: bool) -> bool {
    match state.mode {
        Mode::List => {}
        Mode::Selector | Mode::Detail(_) | Mode::Search(_) => return false,
    }

    let next = if right {
        state.selected_tag + 1
    } else {
        match state.selected_tag.checked_sub(1) {
            Some(next) => next,
            None => return false,
        }
    };
    if next >= state.tag_menu.len() {
        return false;
    }

    state.selected_tag = next;
    state.refilter();
    tracing::debug!(tag = state.tag_menu.label(next), "tag selected");
    true
}

fn on_enter(state: &mut ViewState, actions: &mut Vec<Action>) -> bool {
    match state.mode {
        Mode::Selector => {
            let Some(sheet) = state
                .sheets
                .as_ref()
                .and_then(|sheets| sheets.get(state.selected_sheet))
            else {
                return false;
            };
            let path = state.sheet_dir.join(sheet);
            tracing::debug!(path = %path.display(), "sheet selected");
            actions.push(state.issue_load(|seq| LoadRequest::load_catalog(seq, path)));
            false
        }
        Mode::List => open_detail(state, DetailOrigin::List),
        Mode::Search(SearchFocus::Applied) => open_detail(state, DetailOrigin::SearchResults),
        Mode::Search(SearchFocus::Editing) => {
            tracing::debug!(query = %state.search_query, results = state.visible.len(), "search applied");
            state.mode = Mode::Search(SearchFocus::Applied);
            true
        }
        Mode::Detail(_) => false,
    }
}

fn open_detail(state: &mut ViewState, origin: DetailOrigin) -> bool {
    let Some(view) = state.detail_view(origin) else {
        return false;
    };
    state.mode = Mode::Detail(view);
    state.detail_scroll = 0;
    true
}

fn on_back(state: &mut ViewState) -> bool {
    match state.mode {
        Mode::Selector | Mode::List => false,
        Mode::Detail(view) => {
            state.mode = match view.origin {
                DetailOrigin::List => Mode::List,
                DetailOrigin::SearchResults => Mode::Search(SearchFocus::Applied),
            };
            state.detail_scroll = 0;
            true
        }
        Mode::Search(_) => {
            tracing::debug!("search cleared");
            state.mode = Mode::List;
            state.search_query.clear();
            state.refilter();
            true
        }
    }
}

fn start_search(state: &mut ViewState) -> bool {
    match state.mode {
        Mode::List | Mode::Search(SearchFocus::Applied) => {
            state.mode = Mode::Search(SearchFocus::Editing);
            state.search_query.clear();
            state.refilter();
            true
        }
        Mode::Selector | Mode::Detail(_) | Mode::Search(SearchFocus::Editing) => false,
    }
}

fn open_selector(state: &mut ViewState, actions: &mut Vec<Action>) -> bool {
    match state.mode {
        Mode::List | Mode::Detail(_) | Mode::Search(SearchFocus::Applied) => {
            state.mode = Mode::Selector;
            state.sheets = None;
            state.selected_sheet = 0;
            let dir = state.sheet_dir.clone();
            actions.push(state.issue_load(|seq| LoadRequest::discover_sheets(seq, dir)));
            true
        }
        Mode::Selector | Mode::Search(SearchFocus::Editing) => false,
    }
}

fn edit_query<F>(state: &mut ViewState, edit: F) -> bool
where
    F: FnOnce(&mut String) -> bool,
{
    if !state.mode.is_editing() || !edit(&mut state.search_query) {
        return false;
    }
    tracing::trace!(query = %state.search_query, "search query updated");
    state.refilter();
    true
}

fn on_loaded(state: &mut ViewState, response: &LoadResponse) -> bool {
    if state.pending_load != Some(response.seq) {
        tracing::debug!(
            seq = response.seq,
            pending = ?state.pending_load,
            "dropping stale load response"
        );
        return false;
    }
    state.pending_load = None;

    match &response.outcome {
        LoadOutcome::CatalogLoaded(catalog) => {
            state.install_catalog(catalog.clone());
        }
        LoadOutcome::SheetsDiscovered(sheets) => {
            tracing::debug!(count = sheets.len(), "sheets discovered");
            state.sheets = Some(sheets.clone());
            state.selected_sheet = 0;
        }
        LoadOutcome::Failed(info) => {
            tracing::warn!(error = %info.message, "load failed");
            state.last_error = Some(info.clone());
        }
    }
    true
}
