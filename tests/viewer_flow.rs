//! End-to-end flows through the public API: YAML sheets on disk, the loader, the
//! state machine and the frame painter.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use cheatsheet_viewer::app::{map_key, DetailOrigin, DetailView, Key};
use cheatsheet_viewer::source::YamlSheetSource;
use cheatsheet_viewer::ui::{render, Theme};
use cheatsheet_viewer::worker::Loader;
use cheatsheet_viewer::{handle_event, Action, Event, Mode, SearchFocus, ViewState};
use tempfile::TempDir;

const GIT_SHEET: &str = r"
title: Git Commands
description: Everyday version control
commands:
  - name: git status
    shortDesc: Show the working tree status
    syntax: git status [options]
    tags: [basics, inspect]
    options:
      - flag: -s
        description: Short format
  - name: git commit
    shortDesc: Record changes
    tags: [basics]
    examples:
      - code: git commit -m 'msg'
        description: Commit with a message
  - name: git log
    shortDesc: Show commit history
    tags: [inspect]
";

const DOCKER_SHEET: &str = r"
title: Docker
commands:
  - name: docker ps
    shortDesc: List containers
";

fn catalog_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("git.yaml"), GIT_SHEET).unwrap();
    fs::create_dir_all(dir.path().join("containers")).unwrap();
    fs::write(dir.path().join("containers/docker.yaml"), DOCKER_SHEET).unwrap();
    dir
}

/// Applies `event`, then runs every load it requested synchronously and feeds the
/// responses back, the same way the event loop does with threads.
fn step(state: ViewState, event: &Event, loader: &Loader) -> ViewState {
    let transition = handle_event(state, event);
    settle(transition.state, transition.actions, loader)
}

fn settle(mut state: ViewState, actions: Vec<Action>, loader: &Loader) -> ViewState {
    for action in actions {
        if let Action::Load(request) = action {
            let response = loader.handle_request(request);
            state = step(state, &Event::Loaded(response), loader);
        }
    }
    state
}

fn press(state: ViewState, keys: &[Key], loader: &Loader) -> ViewState {
    keys.iter().fold(state, |state, key| match map_key(*key, state.mode) {
        Some(event) => step(state, &event, loader),
        None => state,
    })
}

fn names(state: &ViewState) -> Vec<String> {
    state
        .visible_entries()
        .iter()
        .map(|e| e.name.clone())
        .collect()
}

fn screen(state: &ViewState) -> String {
    let mut out = Vec::new();
    render(
        &mut out,
        &state.compute_viewmodel(),
        &Theme::monochrome(),
        state.width,
        state.height,
    )
    .unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn selector_to_list_to_detail_and_back() {
    let dir = catalog_dir();
    let loader = Loader::new(Arc::new(YamlSheetSource));

    let (state, actions) = ViewState::start(dir.path().to_path_buf(), None);
    let state = settle(state, actions, &loader);

    assert_eq!(state.mode, Mode::Selector);
    let sheets = state.sheets.clone().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[1], "git.yaml");

    let state = press(state, &[Key::Down, Key::Enter], &loader);
    assert_eq!(state.mode, Mode::List);
    assert_eq!(names(&state), ["git status", "git commit", "git log"]);

    // Tags: all, basics, inspect.
    let state = press(state, &[Key::Right, Key::Right], &loader);
    assert_eq!(names(&state), ["git status", "git log"]);

    let state = press(state, &[Key::Down, Key::Enter], &loader);
    assert_eq!(
        state.mode,
        Mode::Detail(DetailView {
            entry: 2,
            origin: DetailOrigin::List
        })
    );

    let state = press(state, &[Key::Esc], &loader);
    assert_eq!(state.mode, Mode::List);
    assert_eq!(state.selected_entry, 1);
    assert_eq!(names(&state), ["git status", "git log"]);
}

#[test]
fn search_typing_confirm_and_clear() {
    let dir = catalog_dir();
    let loader = Loader::new(Arc::new(YamlSheetSource));
    let sheet = dir.path().join("git.yaml");

    let (state, actions) = ViewState::start(dir.path().to_path_buf(), Some(&sheet));
    let state = settle(state, actions, &loader);
    let state = press(state, &[Key::Right], &loader);
    assert_eq!(names(&state), ["git status", "git commit"]);

    let state = press(
        state,
        &[Key::Char('/'), Key::Char('L'), Key::Char('O'), Key::Char('g')],
        &loader,
    );
    assert_eq!(state.mode, Mode::Search(SearchFocus::Editing));
    assert_eq!(state.search_query, "LOg");
    assert_eq!(names(&state), ["git log"]);

    let state = press(state, &[Key::Enter], &loader);
    assert_eq!(state.mode, Mode::Search(SearchFocus::Applied));
    assert!(screen(&state).contains("Search: LOg (1 results)"));

    let state = press(state, &[Key::Esc], &loader);
    assert_eq!(state.mode, Mode::List);
    assert!(state.search_query.is_empty());
    assert_eq!(names(&state), ["git status", "git commit"]);
}

#[test]
fn broken_sheet_freezes_on_error_until_quit() {
    let dir = catalog_dir();
    fs::write(dir.path().join("broken.yaml"), "commands: [name: [unclosed").unwrap();
    let loader = Loader::new(Arc::new(YamlSheetSource));

    let (state, actions) = ViewState::start(dir.path().to_path_buf(), Some(&dir.path().join("broken.yaml")));
    let state = settle(state, actions, &loader);

    let error = state.last_error.clone().unwrap();
    assert!(error.message.contains("broken.yaml"));
    assert!(screen(&state).contains("Press q to quit."));

    let frozen = press(state.clone(), &[Key::Down, Key::Char('/'), Key::Enter], &loader);
    assert_eq!(frozen, state);

    let transition = handle_event(state, &Event::Quit);
    assert_eq!(transition.actions, [Action::Quit]);
}

#[test]
fn detail_frame_shows_sections() {
    let dir = catalog_dir();
    let loader = Loader::new(Arc::new(YamlSheetSource));
    let sheet = dir.path().join("git.yaml");

    let (state, actions) = ViewState::start(dir.path().to_path_buf(), Some(&sheet));
    let state = settle(state, actions, &loader);
    let state = step(
        state,
        &Event::Resize {
            width: 100,
            height: 40,
        },
        &loader,
    );
    let state = press(state, &[Key::Enter], &loader);

    let frame = screen(&state);
    assert!(frame.contains("git status"));
    assert!(frame.contains("Syntax:"));
    assert!(frame.contains("Options:"));
    assert!(frame.contains("-s"));
}

#[test]
fn empty_catalog_directory_lists_no_sheets() {
    let dir = TempDir::new().unwrap();
    let loader = Loader::new(Arc::new(YamlSheetSource));

    let (state, actions) = ViewState::start(dir.path().to_path_buf(), None);
    let state = settle(state, actions, &loader);

    assert_eq!(state.sheets.as_deref(), Some(&[][..]));
    let frame = screen(&state);
    assert!(frame.contains("No cheatsheets found in"));
}

#[test]
fn reopening_the_selector_rescans_the_directory() {
    let dir = catalog_dir();
    let loader = Loader::new(Arc::new(YamlSheetSource));
    let sheet = dir.path().join("git.yaml");

    let (state, actions) = ViewState::start(dir.path().to_path_buf(), Some(&sheet));
    let state = settle(state, actions, &loader);
    fs::write(dir.path().join("zsh.yaml"), DOCKER_SHEET).unwrap();

    let state = press(state, &[Key::Char('o')], &loader);
    assert_eq!(state.mode, Mode::Selector);
    assert_eq!(state.sheets.as_ref().map(Vec::len), Some(3));
    assert!(Path::new(&state.sheets.unwrap()[2]).ends_with("zsh.yaml"));
}
