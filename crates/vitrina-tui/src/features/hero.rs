//! Hero page: the looping headline typewriter.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Palette;

/// Caret appended to an animating typewriter line.
const CARET: &str = "▌";

/// Latest frames from the two title typewriters. The project title is
/// rendered on the demo page, above the editor panel.
#[derive(Debug, Default)]
pub struct HeroState {
    pub title: String,
    pub project_title: String,
}

/// Renders the hero page: animated headline and tagline.
pub fn render(frame: &mut Frame, area: Rect, state: &HeroState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            state.title.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(CARET, Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        rows[1],
    );

    let tagline = Line::from(Span::styled(
        "Tu futuro en la tecnología empieza hoy.",
        Style::default().fg(palette.muted),
    ));
    frame.render_widget(
        Paragraph::new(tagline).alignment(Alignment::Center),
        rows[2],
    );
}
