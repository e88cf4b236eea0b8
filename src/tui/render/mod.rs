pub mod add_form;
pub mod filter_bar;
pub mod header;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Mode};

/// Main render function — full rebuild from (collection, filter, search)
/// on every draw, no diffing.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3) | filter bar (2) | list | status row (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    list_view::render_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Add-task form popup (rendered on top of everything)
    if app.mode == Mode::Add {
        add_form::render_add_form(frame, app, area);
    }
}

/// Push spans for text with search-match highlighting: unmatched stretches
/// get `base_style`, matched stretches get `highlight_style`. Without a
/// regex the whole text goes out as one base-styled span.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let Some(re) = search_re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut rest = 0;
    for m in re.find_iter(text) {
        if m.start() > rest {
            spans.push(Span::styled(text[rest..m.start()].to_string(), base_style));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        rest = m.end();
    }
    if rest < text.len() || text.is_empty() {
        spans.push(Span::styled(text[rest..].to_string(), base_style));
    }
}
