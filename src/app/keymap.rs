//! Key bindings.
//!
//! Terminal key presses are first normalised into [`Key`] by the terminal backend
//! and then mapped to state machine [`Event`]s here. The mapping depends on the
//! current mode: while a search query is being edited every printable character is
//! search input, so `q`, `j`, `k`, `o` and `/` lose their command meaning.
//!
//! | Key | Event |
//! |-----|-------|
//! | `↑` / `k` | up |
//! | `↓` / `j` | down |
//! | `←` / `h` | left |
//! | `→` / `l` | right |
//! | `Enter` | confirm / open |
//! | `Esc` | back |
//! | `q` / `Ctrl-C` | quit |
//! | `/` | search |
//! | `o` | open selector |

use crate::app::handler::Event;
use crate::app::modes::Mode;

/// A key press, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    CtrlC,
    Char(char),
}

/// Maps a key press to an event for the given mode.
///
/// Returns `None` for keys that have no meaning in `mode`.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::app::keymap::{map_key, Key};
/// use cheatsheet_viewer::app::modes::{Mode, SearchFocus};
/// use cheatsheet_viewer::app::Event;
///
/// assert_eq!(map_key(Key::Char('q'), Mode::List), Some(Event::Quit));
/// assert_eq!(
///     map_key(Key::Char('q'), Mode::Search(SearchFocus::Editing)),
///     Some(Event::Char('q'))
/// );
/// ```
#[must_use]
pub fn map_key(key: Key, mode: Mode) -> Option<Event> {
    if key == Key::CtrlC {
        return Some(Event::Quit);
    }

    if mode.is_editing() {
        return match key {
            Key::Char(c) => Some(Event::Char(c)),
            Key::Backspace => Some(Event::Backspace),
            Key::Enter => Some(Event::Enter),
            Key::Esc => Some(Event::Back),
            Key::Up => Some(Event::Up),
            Key::Down => Some(Event::Down),
            Key::Left | Key::Right | Key::CtrlC => None,
        };
    }

    match key {
        Key::Up | Key::Char('k') => Some(Event::Up),
        Key::Down | Key::Char('j') => Some(Event::Down),
        Key::Left | Key::Char('h') => Some(Event::Left),
        Key::Right | Key::Char('l') => Some(Event::Right),
        Key::Enter => Some(Event::Enter),
        Key::Esc => Some(Event::Back),
        Key::Char('q') | Key::CtrlC => Some(Event::Quit),
        Key::Char('/') => Some(Event::StartSearch),
        Key::Char('o') => Some(Event::OpenSelector),
        Key::Char(_) | Key::Backspace => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::SearchFocus;

    #[test]
    fn vim_and_arrow_keys_are_equivalent() {
        for (a, b) in [
            (Key::Up, Key::Char('k')),
            (Key::Down, Key::Char('j')),
            (Key::Left, Key::Char('h')),
            (Key::Right, Key::Char('l')),
        ] {
            assert_eq!(map_key(a, Mode::List), map_key(b, Mode::List));
        }
    }

    #[test]
    fn editing_turns_command_letters_into_input() {
        let editing = Mode::Search(SearchFocus::Editing);
        for c in ['q', 'j', 'k', 'h', 'l', 'o', '/'] {
            assert_eq!(map_key(Key::Char(c), editing), Some(Event::Char(c)));
        }
        assert_eq!(map_key(Key::Backspace, editing), Some(Event::Backspace));
        assert_eq!(map_key(Key::CtrlC, editing), Some(Event::Quit));
        assert_eq!(map_key(Key::Left, editing), None);
    }

    #[test]
    fn applied_search_uses_command_bindings() {
        let applied = Mode::Search(SearchFocus::Applied);
        assert_eq!(map_key(Key::Char('q'), applied), Some(Event::Quit));
        assert_eq!(map_key(Key::Char('j'), applied), Some(Event::Down));
        assert_eq!(map_key(Key::Char('x'), applied), None);
    }
}
