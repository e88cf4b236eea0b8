use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::query::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_bottom(),

        // Mutations
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('C') => app.clear_completed_tasks(),

        // Mode switches
        KeyCode::Char('a') => {
            app.mode = Mode::Add;
        }
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
        }

        // Filters
        KeyCode::Tab => {
            let next = app.filter.next();
            app.set_filter(next);
        }
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),

        _ => {}
    }
}
