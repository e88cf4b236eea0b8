use ratatui::style::Color;

use crate::model::{Category, Priority, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x1C),
            text: Color::Rgb(0xA8, 0xB0, 0xC8),
            text_bright: Color::Rgb(0xF5, 0xF5, 0xFF),
            dim: Color::Rgb(0x5A, 0x60, 0x78),
            highlight: Color::Rgb(0x3E, 0xD5, 0x98),
            green: Color::Rgb(0x3E, 0xD5, 0x98),
            yellow: Color::Rgb(0xE8, 0xC4, 0x5A),
            red: Color::Rgb(0xE8, 0x5A, 0x6A),
            cyan: Color::Rgb(0x56, 0xC8, 0xD8),
            purple: Color::Rgb(0xB4, 0x86, 0xE8),
            blue: Color::Rgb(0x5A, 0x96, 0xE8),
            selection_bg: Color::Rgb(0x28, 0x2C, 0x40),
            selection_border: Color::Rgb(0x3E, 0xD5, 0x98),
            search_match_bg: Color::Rgb(0xE8, 0xC4, 0x5A),
            search_match_fg: Color::Rgb(0x10, 0x10, 0x1C),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from user config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    "red" => theme.red = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "blue" => theme.blue = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Badge color for a priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.blue,
            Priority::Medium => self.yellow,
            Priority::High => self.red,
        }
    }

    /// Badge color for a category (`None` has no badge)
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::None => self.text,
            Category::Work => self.blue,
            Category::Personal => self.purple,
            Category::Shopping => self.cyan,
            Category::Health => self.green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::Rgb(0xFF, 0, 0)));
        assert_eq!(parse_hex_color("112233"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn config_overrides_apply() {
        let mut colors = HashMap::new();
        colors.insert("highlight".to_string(), "#123456".to_string());
        colors.insert("bogus_slot".to_string(), "#123456".to_string());
        let theme = Theme::from_config(&UiConfig { colors });
        assert_eq!(theme.highlight, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.text, Theme::default().text);
    }
}
