use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField};

/// Render the new-task form as a centered popup overlay
pub fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    let popup_h: u16 = 8.min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(app.theme.text).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" New Task", header_style)));
    lines.push(Line::from(Span::styled("", label_style)));

    lines.push(field_line(app, FormField::Text, "Text", &app.form.text, true));
    lines.push(field_line(
        app,
        FormField::Category,
        "Category",
        app.form.category.label(),
        false,
    ));
    lines.push(field_line(
        app,
        FormField::Priority,
        "Priority",
        app.form.priority.label(),
        false,
    ));
    let due_label = if app.form.due.is_empty() && app.form.field != FormField::Due {
        "(none)".to_string()
    } else {
        app.form.due.clone()
    };
    lines.push(field_line(app, FormField::Due, "Due", &due_label, true));

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// One form row: marker for the active field, label column, value, and a
/// block cursor on text-input fields.
fn field_line<'a>(
    app: &App,
    field: FormField,
    label: &'a str,
    value: &str,
    text_input: bool,
) -> Line<'a> {
    let bg = app.theme.background;
    let is_active = app.form.field == field;

    let marker = if is_active { "\u{25B8} " } else { "  " };
    let value_style = if is_active {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {}{:<9}", marker, label),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(value.to_string(), value_style),
    ];
    if is_active && text_input {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    if is_active && !text_input {
        spans.push(Span::styled(
            "  \u{2190}/\u{2192}",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
