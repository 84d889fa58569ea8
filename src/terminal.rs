//! Terminal session and input thread.
//!
//! [`TerminalSession`] puts the terminal into raw mode on the alternate screen and
//! restores it when dropped, including on early returns and panics unwinding
//! through `main`. [`spawn_input_thread`] forwards crossterm key and resize events
//! into the event loop's channel as [`LoopInput`] values.

use crate::app::{Event, Key};
use crossbeam_channel::Sender;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io::{self, Write};
use std::thread;

/// Messages consumed by the event loop.
///
/// Key presses are mapped to events by the loop itself because the mapping
/// depends on the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopInput {
    Key(Key),
    Event(Event),
}

/// Raw-mode alternate-screen session, restored on drop.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal does not support raw mode or the escape
    /// sequences cannot be written.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let session = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(session)
    }

    /// Current terminal size as `(width, height)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    pub fn size(&self) -> io::Result<(usize, usize)> {
        let (width, height) = terminal::size()?;
        Ok((usize::from(width), usize::from(height)))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

/// Normalises a crossterm key event.
///
/// Only presses are reported; releases and repeats from terminals with keyboard
/// enhancement are dropped.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::app::Key;
/// use cheatsheet_viewer::terminal::map_key_event;
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
/// assert_eq!(map_key_event(ctrl_c), Some(Key::CtrlC));
/// ```
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Key::CtrlC),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Converts a crossterm event into loop input, if it is relevant.
#[must_use]
pub fn translate(event: &event::Event) -> Option<LoopInput> {
    match event {
        event::Event::Key(key) => map_key_event(*key).map(LoopInput::Key),
        event::Event::Resize(width, height) => Some(LoopInput::Event(Event::Resize {
            width: usize::from(*width),
            height: usize::from(*height),
        })),
        _ => None,
    }
}

/// Starts the thread reading terminal events into `tx`.
///
/// The thread ends when the receiver is dropped. If reading from the terminal
/// fails it sends a quit event so the loop shuts down instead of hanging.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_input_thread(tx: Sender<LoopInput>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new().name("input".to_string()).spawn(move || loop {
        let input = match event::read() {
            Ok(event) => translate(&event),
            Err(e) => {
                tracing::warn!(error = %e, "reading terminal input failed");
                let _ = tx.send(LoopInput::Event(Event::Quit));
                return;
            }
        };

        if let Some(input) = input {
            if tx.send(input).is_err() {
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn plain_keys_are_normalised() {
        assert_eq!(map_key_event(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(Key::Esc));
        assert_eq!(map_key_event(press(KeyCode::Char('/'))), Some(Key::Char('/')));
        assert_eq!(map_key_event(press(KeyCode::F(1))), None);
    }

    #[test]
    fn shifted_characters_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(key), Some(Key::Char('Q')));
    }

    #[test]
    fn releases_and_other_control_chords_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release), None);

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_x), None);
    }

    #[test]
    fn resize_becomes_a_state_event() {
        assert_eq!(
            translate(&event::Event::Resize(120, 40)),
            Some(LoopInput::Event(Event::Resize {
                width: 120,
                height: 40
            }))
        );
        assert_eq!(translate(&event::Event::FocusGained), None);
    }
}
