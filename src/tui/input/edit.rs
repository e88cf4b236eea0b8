use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::common;

pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Char(c) => {
            common::insert_char(&mut app.edit_buffer, &mut app.edit_cursor, c);
        }
        KeyCode::Backspace => {
            common::backspace(&mut app.edit_buffer, &mut app.edit_cursor);
        }
        KeyCode::Left => {
            app.edit_cursor = common::prev_boundary(&app.edit_buffer, app.edit_cursor);
        }
        KeyCode::Right => {
            app.edit_cursor = common::next_boundary(&app.edit_buffer, app.edit_cursor);
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        _ => {}
    }
}
