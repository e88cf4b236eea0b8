use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Search edits apply immediately — the visible list narrows on every
/// keystroke, no debounce.
pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Keep the query active and go back to navigating
            app.mode = Mode::Navigate;
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.refresh();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.refresh();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.refresh();
        }
        _ => {}
    }
}
