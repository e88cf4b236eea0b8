use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: title + task count, progress bar, progress stats.
/// Statistics always cover the entire collection, not the filtered subset.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let stats = app.stats();

    // Title row with right-aligned task count
    let title = " stackz";
    let count = format!("{} tasks ", stats.total);
    let mut title_spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = title.chars().count() + count.chars().count();
    if used < width {
        title_spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    title_spans.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));

    // Progress bar row: filled portion proportional to percent
    let bar_width = width.saturating_sub(2);
    let filled = bar_width * stats.percent as usize / 100;
    let bar_spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            "\u{2500}".repeat(bar_width - filled),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    // Stats row: "40% complete (2/5 tasks)"
    let stats_line = format!(
        " {}% complete ({}/{} tasks)",
        stats.percent, stats.completed, stats.total
    );
    let stats_spans = vec![Span::styled(
        stats_line,
        Style::default().fg(app.theme.text).bg(bg),
    )];

    let lines = vec![
        Line::from(title_spans),
        Line::from(bar_spans),
        Line::from(stats_spans),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
