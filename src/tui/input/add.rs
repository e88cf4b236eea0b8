use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FormField, Mode};

pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Close the form; typed values are kept for next time
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => app.submit_add(),
        KeyCode::Tab | KeyCode::Down => {
            app.form.field = app.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.field = app.form.field.prev();
        }
        _ => match app.form.field {
            FormField::Text => handle_text_key(&mut app.form.text, key),
            FormField::Due => handle_text_key(&mut app.form.due, key),
            FormField::Category => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                    app.form.category = app.form.category.next();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.form.category = app.form.category.prev();
                }
                _ => {}
            },
            FormField::Priority => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                    app.form.priority = app.form.priority.next();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.form.priority = app.form.priority.prev();
                }
                _ => {}
            },
        },
    }
}

/// Form text fields edit at the end of the buffer
fn handle_text_key(buf: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => buf.push(c),
        KeyCode::Backspace => {
            buf.pop();
        }
        _ => {}
    }
}
