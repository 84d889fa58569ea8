//! View state and view model computation.
//!
//! This module defines [`ViewState`], the single source of truth for everything
//! on screen, along with the derived-list and clamping helpers the event handler
//! uses and the [`compute_viewmodel`](ViewState::compute_viewmodel) step that
//! turns a state snapshot into a frame.
//!
//! # Architecture
//!
//! `ViewState` separates core data (the loaded catalog, its tag menu, the
//! discovered sheets) from derived state (`visible`, the positions of the entries
//! currently listed). `visible` is recomputed by [`refilter`](ViewState::refilter)
//! whenever the tag selection or the search query changes, and every transition
//! ends with [`restore_invariants`](ViewState::restore_invariants), the only place
//! where indices are clamped.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::app::{Action, ViewState};
//!
//! let (state, actions) = ViewState::start("cheatsheets".into(), None);
//! assert!(matches!(actions[..], [Action::Load(_)]));
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.body[0].plain(), "Loading cheatsheets...");
//! ```

use crate::app::actions::Action;
use crate::app::modes::{DetailOrigin, DetailView, Mode, SearchFocus};
use crate::domain::{Catalog, Entry, ErrorInfo, TagMenu};
use crate::filter;
use crate::ui::components::{self, empty, header};
use crate::ui::helpers::{Line, Role};
use crate::ui::tag_window::{strip_budget, visible_tags, TagCellMetrics, TagWindow};
use crate::ui::viewmodel::{body_rows, scroll_offset, window, UIViewModel};
use crate::worker::LoadRequest;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Terminal size assumed until the first resize event arrives.
pub const DEFAULT_SIZE: (usize, usize) = (80, 24);

/// Complete view state.
///
/// Owned by the event loop and replaced wholesale by every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current screen.
    pub mode: Mode,

    /// Loaded sheet, if any.
    pub catalog: Option<Arc<Catalog>>,

    /// Tag labels of the loaded sheet, `"all"` first.
    pub tag_menu: TagMenu,

    /// Index into `tag_menu`.
    pub selected_tag: usize,

    /// Index into `visible`; 0 when the list is empty.
    pub selected_entry: usize,

    /// Search query; only meaningful in search modes.
    pub search_query: String,

    /// Positions into the catalog's entries of the listed entries, strictly increasing.
    pub visible: Vec<usize>,

    /// Terminal width in columns.
    pub width: usize,

    /// Terminal height in rows.
    pub height: usize,

    /// Set by a failed load. While set, only quit is honoured.
    pub last_error: Option<ErrorInfo>,

    /// Catalog root directory.
    pub sheet_dir: PathBuf,

    /// Discovered sheets relative to `sheet_dir`; `None` while scanning.
    pub sheets: Option<Vec<String>>,

    /// Index into `sheets`.
    pub selected_sheet: usize,

    /// First body row shown in the detail view.
    pub detail_scroll: usize,

    /// Sequence number of the last issued load.
    pub load_seq: u64,

    /// Sequence number of the load whose answer is awaited.
    pub pending_load: Option<u64>,
}

impl ViewState {
    /// Empty state in selector mode, nothing loaded.
    #[must_use]
    pub fn new(sheet_dir: PathBuf) -> Self {
        let (width, height) = DEFAULT_SIZE;
        Self {
            mode: Mode::Selector,
            catalog: None,
            tag_menu: TagMenu::default(),
            selected_tag: 0,
            selected_entry: 0,
            search_query: String::new(),
            visible: Vec::new(),
            width,
            height,
            last_error: None,
            sheet_dir,
            sheets: None,
            selected_sheet: 0,
            detail_scroll: 0,
            load_seq: 0,
            pending_load: None,
        }
    }

    /// Initial state and the first load to run.
    ///
    /// With `sheet_file` the sheet is opened directly and the selector is
    /// skipped; otherwise the catalog directory is scanned.
    #[must_use]
    pub fn start(sheet_dir: PathBuf, sheet_file: Option<&Path>) -> (Self, Vec<Action>) {
        let mut state = Self::new(sheet_dir);
        let action = match sheet_file {
            Some(path) => {
                state.mode = Mode::List;
                state.issue_load(|seq| LoadRequest::load_catalog(seq, path))
            }
            None => {
                let dir = state.sheet_dir.clone();
                state.issue_load(|seq| LoadRequest::discover_sheets(seq, dir))
            }
        };
        (state, vec![action])
    }

    /// Allocates the next sequence number and marks it as the awaited load.
    ///
    /// Any load still in flight becomes stale.
    pub fn issue_load<F>(&mut self, request: F) -> Action
    where
        F: FnOnce(u64) -> LoadRequest,
    {
        self.load_seq += 1;
        self.pending_load = Some(self.load_seq);
        Action::Load(request(self.load_seq))
    }

    /// Replaces the catalog and resets every index, entering the list view.
    pub fn install_catalog(&mut self, catalog: Arc<Catalog>) {
        tracing::debug!(
            title = %catalog.title,
            entries = catalog.entries.len(),
            "catalog installed"
        );
        self.tag_menu = catalog.tag_menu();
        self.catalog = Some(catalog);
        self.mode = Mode::List;
        self.selected_tag = 0;
        self.search_query.clear();
        self.detail_scroll = 0;
        self.refilter();
    }

    /// Entries of the loaded sheet; empty before a load.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        match self.catalog.as_deref() {
            Some(catalog) => &catalog.entries,
            None => &[],
        }
    }

    /// Returns `true` when the list is driven by the search query.
    ///
    /// This holds in both search modes and in a detail view opened from search
    /// results.
    #[must_use]
    pub const fn search_active(&self) -> bool {
        match self.mode {
            Mode::Detail(view) => matches!(view.origin, DetailOrigin::SearchResults),
            mode => mode.is_search(),
        }
    }

    /// Recomputes `visible` and moves the selection to the first entry.
    ///
    /// Search supersedes the tag filter; the two are never combined.
    pub fn refilter(&mut self) {
        let _span = tracing::debug_span!(
            "refilter",
            total = self.entries().len(),
            search = self.search_active(),
            query_len = self.search_query.len(),
            tag = self.tag_menu.label(self.selected_tag)
        )
        .entered();

        self.visible = if self.search_active() {
            filter::by_search(self.entries(), &self.search_query)
        } else {
            filter::by_tag(self.entries(), self.tag_menu.label(self.selected_tag))
        };
        self.selected_entry = 0;

        tracing::debug!(visible = self.visible.len(), "filter applied");
    }

    /// Clamps every index into range.
    ///
    /// Called once at the end of each transition.
    pub fn restore_invariants(&mut self) {
        self.selected_tag = self.selected_tag.min(self.tag_menu.len().saturating_sub(1));
        self.selected_entry = self.selected_entry.min(self.visible.len().saturating_sub(1));

        let sheet_count = self.sheets.as_ref().map_or(0, Vec::len);
        self.selected_sheet = self.selected_sheet.min(sheet_count.saturating_sub(1));

        if let Mode::Detail(view) = self.mode {
            if self.entries().get(view.entry).is_none() {
                self.mode = Mode::List;
            }
        }
        self.detail_scroll = self.detail_scroll.min(self.detail_max_scroll());
    }

    /// Entries currently listed, in sheet order.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&Entry> {
        let entries = self.entries();
        self.visible.iter().filter_map(|&i| entries.get(i)).collect()
    }

    /// The highlighted entry of the list, if any.
    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.visible
            .get(self.selected_entry)
            .and_then(|&i| self.entries().get(i))
    }

    /// Snapshot for opening the highlighted entry.
    #[must_use]
    pub fn detail_view(&self, origin: DetailOrigin) -> Option<DetailView> {
        self.visible
            .get(self.selected_entry)
            .map(|&entry| DetailView { entry, origin })
    }

    /// The entry shown by the detail view.
    #[must_use]
    pub fn detail_entry(&self) -> Option<&Entry> {
        match self.mode {
            Mode::Detail(view) => self.entries().get(view.entry),
            Mode::Selector | Mode::List | Mode::Search(_) => None,
        }
    }

    /// Largest useful `detail_scroll` for the current entry and terminal.
    #[must_use]
    pub fn detail_max_scroll(&self) -> usize {
        self.detail_entry().map_or(0, |entry| {
            components::render_detail(entry)
                .len()
                .saturating_sub(body_rows(self.height, true, true))
        })
    }

    /// Windowed tag strip for the current width.
    #[must_use]
    pub fn tag_window(&self) -> TagWindow {
        visible_tags(
            self.tag_menu.labels(),
            self.selected_tag,
            strip_budget(self.width),
            TagCellMetrics::default(),
        )
    }

    /// Computes the frame for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        if let Some(error) = &self.last_error {
            return UIViewModel {
                body: components::render_error_screen(&error.message),
                ..UIViewModel::default()
            };
        }

        match self.mode {
            Mode::Selector => self.selector_viewmodel(),
            Mode::List | Mode::Search(_) => self.list_viewmodel(),
            Mode::Detail(view) => self.detail_viewmodel(view),
        }
    }

    fn selector_viewmodel(&self) -> UIViewModel {
        let rows = body_rows(self.height, true, false);
        let body = match &self.sheets {
            None => vec![components::render_message(empty::LOADING_SHEETS)],
            Some(sheets) if sheets.is_empty() => {
                vec![components::render_no_sheets(&self.sheet_dir)]
            }
            Some(sheets) => {
                let (lines, selected) = components::render_selector(sheets, self.selected_sheet);
                let offset = scroll_offset(lines.len(), selected, rows);
                window(lines, offset, rows)
            }
        };

        UIViewModel {
            header: Some(components::render_header(header::SELECTOR_TITLE, Role::Title)),
            bar: None,
            body,
            footer: Some(components::render_footer(self.mode)),
        }
    }

    fn list_viewmodel(&self) -> UIViewModel {
        let rows = body_rows(self.height, true, true);
        let title = self
            .catalog
            .as_ref()
            .map_or(header::LOADING_TITLE, |c| c.title.as_str());

        let bar = match self.mode {
            Mode::Search(SearchFocus::Editing) => components::render_search_bar(&self.search_query),
            Mode::Search(SearchFocus::Applied) => {
                components::render_search_indicator(&self.search_query, self.visible.len())
            }
            Mode::Selector | Mode::List | Mode::Detail(_) => {
                components::render_tag_strip(&self.tag_window())
            }
        };

        let body = match &self.catalog {
            None => vec![components::render_message(empty::LOADING_SHEET)],
            Some(catalog) => {
                let highlight = (self.search_active() && !self.search_query.is_empty())
                    .then_some(self.search_query.as_str());
                let list = components::render_entry_list(
                    &catalog.description,
                    &self.visible_entries(),
                    self.selected_entry,
                    highlight,
                );
                let mut lines = list.lines;
                if self.visible.is_empty() {
                    lines.push(self.empty_list_message());
                }
                let offset = scroll_offset(lines.len(), list.selected_line, rows);
                window(lines, offset, rows)
            }
        };

        UIViewModel {
            header: Some(components::render_header(title, Role::Title)),
            bar: Some(bar),
            body,
            footer: Some(components::render_footer(self.mode)),
        }
    }

    fn detail_viewmodel(&self, view: DetailView) -> UIViewModel {
        let rows = body_rows(self.height, true, true);
        let entry = self.entries().get(view.entry);

        let title = entry.map_or("", |e| e.name.as_str());
        let body = entry.map_or_else(Vec::new, |e| {
            window(components::render_detail(e), self.detail_scroll, rows)
        });

        let bar = match view.origin {
            DetailOrigin::List => components::render_tag_strip(&self.tag_window()),
            DetailOrigin::SearchResults => {
                components::render_search_indicator(&self.search_query, self.visible.len())
            }
        };

        UIViewModel {
            header: Some(components::render_header(title, Role::DetailTitle)),
            bar: Some(bar),
            body,
            footer: Some(components::render_footer(self.mode)),
        }
    }

    fn empty_list_message(&self) -> Line {
        if self.entries().is_empty() {
            components::render_message(empty::NO_ENTRIES)
        } else {
            components::render_message(empty::NO_MATCHES)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::plain_text;

    fn entry(name: &str, tags: &[&str]) -> Entry {
        Entry {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            ..Entry::new(name, format!("about {name}"))
        }
    }

    fn loaded() -> ViewState {
        let catalog = Catalog {
            title: "Ops".into(),
            description: "Everyday commands".into(),
            entries: vec![
                entry("git status", &["git"]),
                entry("git commit", &["git"]),
                entry("kubectl get pods", &["k8s"]),
            ],
            ..Catalog::default()
        };
        let mut state = ViewState::new("sheets".into());
        state.install_catalog(Arc::new(catalog));
        state
    }

    #[test]
    fn install_catalog_shows_every_entry() {
        let state = loaded();
        assert_eq!(state.mode, Mode::List);
        assert_eq!(state.tag_menu.labels(), ["all", "git", "k8s"]);
        assert_eq!(state.visible, [0, 1, 2]);
    }

    #[test]
    fn unmatched_query_resets_selection() {
        let mut state = loaded();
        state.selected_entry = 2;
        state.mode = Mode::Search(SearchFocus::Editing);
        state.search_query = "nonexistent".into();
        state.refilter();
        state.restore_invariants();

        assert!(state.visible.is_empty());
        assert_eq!(state.selected_entry, 0);
        assert!(state.current_entry().is_none());
        let vm = state.compute_viewmodel();
        assert!(plain_text(&vm.body).contains(empty::NO_MATCHES));
    }

    #[test]
    fn reselecting_all_restores_full_list() {
        let mut state = loaded();
        state.selected_tag = 2;
        state.refilter();
        assert_eq!(state.visible, [2]);

        state.selected_tag = 0;
        state.refilter();
        assert_eq!(state.visible, [0, 1, 2]);
    }

    #[test]
    fn restore_invariants_clamps_indices() {
        let mut state = loaded();
        state.selected_tag = 99;
        state.selected_entry = 99;
        state.selected_sheet = 5;
        state.restore_invariants();
        assert_eq!(state.selected_tag, 2);
        assert_eq!(state.selected_entry, 2);
        assert_eq!(state.selected_sheet, 0);
    }

    #[test]
    fn detail_from_search_keeps_search_list() {
        let mut state = loaded();
        state.mode = Mode::Search(SearchFocus::Applied);
        state.search_query = "commit".into();
        state.refilter();
        let view = state.detail_view(DetailOrigin::SearchResults).unwrap();
        state.mode = Mode::Detail(view);
        assert!(state.search_active());
        state.refilter();
        assert_eq!(state.visible, [1]);
    }

    #[test]
    fn detail_bar_follows_its_origin() {
        let mut state = loaded();
        state.selected_tag = 2;
        state.refilter();
        let view = state.detail_view(DetailOrigin::List).unwrap();
        state.mode = Mode::Detail(view);
        let bar = state.compute_viewmodel().bar.unwrap();
        assert!(bar.plain().contains("k8s"));
        assert!(bar.has_role(Role::Selected));

        state.mode = Mode::Search(SearchFocus::Applied);
        state.search_query = "gi".into();
        state.refilter();
        let view = state.detail_view(DetailOrigin::SearchResults).unwrap();
        state.mode = Mode::Detail(view);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.map(|h| h.plain()), Some(" git status ".to_string()));
        assert_eq!(vm.bar.map(|b| b.plain()), Some("Search: gi (2 results)".to_string()));
    }

    #[test]
    fn issue_load_supersedes_pending() {
        let mut state = ViewState::new("sheets".into());
        let first = state.issue_load(|seq| LoadRequest::discover_sheets(seq, "sheets"));
        let second = state.issue_load(|seq| LoadRequest::discover_sheets(seq, "sheets"));
        assert_eq!(first, Action::Load(LoadRequest::discover_sheets(1, "sheets")));
        assert_eq!(second, Action::Load(LoadRequest::discover_sheets(2, "sheets")));
        assert_eq!(state.pending_load, Some(2));
    }

    #[test]
    fn start_with_file_skips_selector() {
        let (state, actions) = ViewState::start("sheets".into(), Some(Path::new("git.yaml")));
        assert_eq!(state.mode, Mode::List);
        assert_eq!(actions, [Action::Load(LoadRequest::load_catalog(1, "git.yaml"))]);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.body[0].plain(), empty::LOADING_SHEET);
    }

    #[test]
    fn list_viewmodel_scrolls_to_selection() {
        let mut state = loaded();
        state.height = 10;
        state.selected_entry = 2;
        let vm = state.compute_viewmodel();
        assert_eq!(vm.body.len(), body_rows(10, true, true));
        assert!(vm.body.iter().any(|line| line.has_role(Role::Selected)));
        assert_eq!(vm.header.map(|h| h.plain()), Some(" Ops ".to_string()));
    }

    #[test]
    fn error_viewmodel_has_no_chrome() {
        let mut state = loaded();
        state.last_error = Some(ErrorInfo {
            message: "bad yaml".into(),
        });
        let vm = state.compute_viewmodel();
        assert!(vm.header.is_none() && vm.footer.is_none() && vm.bar.is_none());
        assert_eq!(vm.body[0].plain(), "Error: bad yaml");
    }
}
