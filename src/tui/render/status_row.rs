use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): key hints per mode, and the
/// live search prompt while searching.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => hint_line(
            app,
            width,
            " a add  space toggle  enter edit  d delete  tab filter  / search  C clear done  q quit",
        ),
        Mode::Add => hint_line(app, width, " tab next field  \u{2190}/\u{2192} change  enter add  esc close"),
        Mode::Edit => hint_line(app, width, " enter save  esc cancel"),
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            let hint = "enter keep  esc clear ";
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let hint_width = hint.chars().count();
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(
                    hint,
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hint_line<'a>(app: &App, width: usize, hint: &'a str) -> Line<'a> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        hint,
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let used = hint.chars().count();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    Line::from(spans)
}
