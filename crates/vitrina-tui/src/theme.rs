//! Color palettes for the two themes.

use ratatui::style::{Color, Modifier, Style};
use vitrina_core::config::Theme;
use vitrina_core::script::sequenced::SpanStyle;

/// Resolved colors for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub panel_border: Color,
    pub code_keyword: Color,
    pub code_function: Color,
    pub code_punctuation: Color,
    pub code_comment: Color,
    pub chat_bubble: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                text: Color::Rgb(229, 231, 235),
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(59, 130, 246),
                panel_border: Color::Rgb(55, 65, 81),
                code_keyword: Color::Rgb(199, 146, 234),
                code_function: Color::Rgb(130, 170, 255),
                code_punctuation: Color::Rgb(137, 221, 255),
                code_comment: Color::Rgb(105, 112, 125),
                chat_bubble: Color::Rgb(31, 41, 55),
                success: Color::Rgb(34, 197, 94),
            },
            Theme::Light => Self {
                background: Color::Rgb(249, 250, 251),
                text: Color::Rgb(31, 41, 55),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(37, 99, 235),
                panel_border: Color::Rgb(209, 213, 219),
                code_keyword: Color::Rgb(124, 58, 237),
                code_function: Color::Rgb(29, 78, 216),
                code_punctuation: Color::Rgb(8, 145, 178),
                code_comment: Color::Rgb(148, 155, 170),
                chat_bubble: Color::Rgb(229, 231, 235),
                success: Color::Rgb(22, 163, 74),
            },
        }
    }

    /// Style for a span class in the code panel.
    pub fn span_style(&self, style: SpanStyle) -> Style {
        match style {
            SpanStyle::Plain => Style::default().fg(self.text),
            SpanStyle::Keyword => Style::default().fg(self.code_keyword),
            SpanStyle::Function => Style::default().fg(self.code_function),
            SpanStyle::Punctuation => Style::default().fg(self.code_punctuation),
            SpanStyle::Comment => Style::default().fg(self.code_comment),
            SpanStyle::Accent => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}
