use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::query::Filter;
use crate::tui::app::App;

/// Render the filter bar: one tab per filter mode with the active one
/// highlighted, plus a separator line below. When a search is live the
/// query is shown on the right of the separator.
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    spans.push(Span::styled(" ", Style::default().bg(bg)));
    for filter in Filter::ALL {
        let is_current = app.filter == filter;
        spans.push(Span::styled(
            format!(" {} ", filter.label()),
            tab_style(app, is_current),
        ));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let tabs = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    // Right-aligned search indicator when a query is live
    let indicator = if app.search_input.is_empty() {
        None
    } else {
        Some(format!("/{}", app.search_input))
    };
    let indicator_width = indicator.as_ref().map_or(0, |s| s.chars().count() + 2);

    let separator_end = width.saturating_sub(indicator_width);
    let mut sep_text = String::with_capacity(separator_end * 3);
    for col in 0..separator_end {
        if sep_cols.contains(&col) {
            sep_text.push('\u{2534}');
        } else {
            sep_text.push('\u{2500}');
        }
    }

    let mut spans = vec![Span::styled(sep_text, Style::default().fg(dim).bg(bg))];
    if let Some(query) = indicator {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            query,
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
