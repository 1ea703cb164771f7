//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui `Frame`, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::features::{chat, demo, hero};
use crate::state::{AppState, Page};
use crate::theme::Palette;

/// Height of the tab bar at the top.
const TABS_HEIGHT: u16 = 1;

/// Height of the key-hint line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let palette = Palette::for_theme(state.theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_tabs(frame, rows[0], state, &palette);

    match state.page {
        Page::Hero => hero::render(frame, rows[1], &state.hero, &palette),
        Page::Demo => demo::render(
            frame,
            rows[1],
            &state.demo,
            &state.hero.project_title,
            &palette,
        ),
    }

    render_status(frame, rows[2], state, &palette);

    // Chat floats above whichever page is active.
    if state.chat.open {
        chat::render(frame, rows[1], &state.chat, &palette);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = vec![Span::styled(
        " ProgCero ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for page in [Page::Hero, Page::Demo] {
        let style = if page == state.page {
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!("  {}  ", page.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let hints = " Tab páginas · c chat · t tema · r repetir · q salir ";
    let theme_label = format!("tema: {} ", state.theme.display_name());

    let pad = (area.width as usize)
        .saturating_sub(hints.width())
        .saturating_sub(theme_label.width());

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(palette.muted)),
        Span::raw(" ".repeat(pad)),
        Span::styled(theme_label, Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
