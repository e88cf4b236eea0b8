use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::Category;
use crate::tui::app::{App, Mode};

use super::push_highlighted_spans;

/// Render the task list: one row per visible task, in collection order.
/// Rebuilt in full on every draw.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible();
    let bg = app.theme.background;

    if visible.is_empty() {
        let message = if app.tasks.is_empty() {
            " No tasks yet \u{2014} press a to add one"
        } else {
            " No tasks match"
        };
        let empty = Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and scroll the window so it stays on screen
    let count = visible.len();
    if app.cursor >= count {
        app.cursor = count - 1;
    }
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor - height + 1;
    }

    let search_re = app.search_regex();
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    let end = (app.scroll_offset + height).min(count);
    for flat_idx in app.scroll_offset..end {
        let task = &app.tasks[visible[flat_idx]];
        let is_cursor = flat_idx == app.cursor && app.mode != Mode::Add;
        // Entrance stagger: rows past the reveal counter draw dimmed until
        // the tick catches up (cosmetic only)
        let pending = flat_idx >= app.reveal;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();

        // Cursor bar
        if is_cursor {
            spans.push(Span::styled(
                "\u{258E}",
                Style::default()
                    .fg(app.theme.selection_border)
                    .bg(app.theme.selection_bg),
            ));
        } else {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }

        // Completion checkbox
        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let checkbox_color = if task.completed {
            app.theme.green
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            checkbox,
            Style::default().fg(dim_if(pending, checkbox_color, app)).bg(row_bg),
        ));

        // Right-hand badges: priority always; category when set; due when set
        let mut badges: Vec<Span> = Vec::new();
        badges.push(Span::styled(
            task.priority.label(),
            Style::default()
                .fg(dim_if(pending, app.theme.priority_color(task.priority), app))
                .bg(row_bg)
                .add_modifier(Modifier::BOLD),
        ));
        if task.category != Category::None {
            badges.push(Span::styled(" ", Style::default().bg(row_bg)));
            badges.push(Span::styled(
                task.category.label(),
                Style::default()
                    .fg(dim_if(pending, app.theme.category_color(task.category), app))
                    .bg(row_bg),
            ));
        }
        if let Some(due) = &task.due {
            badges.push(Span::styled(" ", Style::default().bg(row_bg)));
            badges.push(Span::styled(
                format!("due {}", due),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }
        badges.push(Span::styled(" ", Style::default().bg(row_bg)));
        let badges_width: usize = badges.iter().map(|s| s.content.width()).sum();

        // Task text, truncated to the space left of the badges. The row
        // under edit shows the live edit buffer with a block cursor.
        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let text_budget = width.saturating_sub(left_width + badges_width + 1);

        let editing_here = app.mode == Mode::Edit && app.editing_id.as_deref() == Some(&task.id);
        if editing_here {
            let shown = truncate_to_width(&app.edit_buffer, text_budget.saturating_sub(1));
            spans.push(Span::styled(
                shown,
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
        } else {
            let mut text_style = Style::default().bg(row_bg);
            text_style = if task.completed {
                text_style
                    .fg(app.theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                text_style
                    .fg(app.theme.text_bright)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style.fg(app.theme.text_bright)
            };
            if pending {
                text_style = Style::default().fg(app.theme.dim).bg(row_bg);
            }
            let hl_style = Style::default()
                .fg(app.theme.search_match_fg)
                .bg(app.theme.search_match_bg)
                .add_modifier(Modifier::BOLD);
            let shown = truncate_to_width(&task.text, text_budget);
            push_highlighted_spans(&mut spans, &shown, text_style, hl_style, search_re.as_ref());
        }

        // Pad between text and badges so badges sit on the right edge
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = width.saturating_sub(used + badges_width);
        if pad > 0 {
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
        }
        spans.extend(badges);

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pending rows render entirely dim
fn dim_if(pending: bool, color: ratatui::style::Color, app: &App) -> ratatui::style::Color {
    if pending { app.theme.dim } else { color }
}

/// Truncate to at most `max` display columns, appending an ellipsis when cut
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello\u{2026}");
    }
}
