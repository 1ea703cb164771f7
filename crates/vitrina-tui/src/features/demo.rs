//! Code demo page: the typed listing and the staged output panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use vitrina_core::script::sequenced::{DemoEvent, StyledLine};

use crate::theme::Palette;

/// Caret shown at the end of the line currently being typed.
const CARET: &str = "▌";

/// One line of the code panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoLine {
    /// Still typing: raw text revealed so far, caret visible.
    Typing(String),
    /// Finished: the rich rendering replaced the raw text.
    Committed(StyledLine),
}

/// One row of the output panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputItem {
    pub text: String,
    pub completed: bool,
}

/// Accumulated view of the demo engine's event stream.
#[derive(Debug, Default)]
pub struct DemoState {
    pub lines: Vec<DemoLine>,
    pub output_header: Option<String>,
    pub items: Vec<OutputItem>,
    pub finished: bool,
    /// Set once the demo page has been visited; the first visit starts
    /// the run.
    pub started: bool,
}

impl DemoState {
    /// Applies one engine event. Events arrive in run order; indexes are
    /// trusted to be dense because the engine emits them that way.
    pub fn apply(&mut self, event: DemoEvent) {
        match event {
            DemoEvent::Reset => {
                self.lines.clear();
                self.output_header = None;
                self.items.clear();
                self.finished = false;
            }
            DemoEvent::LineStarted { .. } => {
                self.lines.push(DemoLine::Typing(String::new()));
            }
            DemoEvent::LineText { index, text } => {
                if let Some(line) = self.lines.get_mut(index) {
                    *line = DemoLine::Typing(text);
                }
            }
            DemoEvent::LineCommitted { index, line } => {
                if let Some(slot) = self.lines.get_mut(index) {
                    *slot = DemoLine::Committed(line);
                }
            }
            DemoEvent::OutputStarted { header } => {
                self.output_header = Some(header);
            }
            DemoEvent::ItemRevealed { text, .. } => {
                self.items.push(OutputItem {
                    text,
                    completed: false,
                });
            }
            DemoEvent::ItemCompleted { index } => {
                if let Some(item) = self.items.get_mut(index) {
                    item.completed = true;
                }
            }
            DemoEvent::Finished => {
                self.finished = true;
            }
        }
    }
}

/// Renders the demo page: animated section title, editor panel, and the
/// output panel once it has appeared.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &DemoState,
    section_title: &str,
    palette: &Palette,
) {
    let output_height = if state.output_header.is_some() {
        state.items.len() as u16 + 3
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(output_height),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            section_title.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(CARET, Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    render_editor(frame, rows[1], state, palette);
    if state.output_header.is_some() {
        render_output(frame, rows[2], state, palette);
    }
}

fn render_editor(frame: &mut Frame, area: Rect, state: &DemoState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.panel_border))
        .title(Span::styled(" main.py ", Style::default().fg(palette.muted)));

    let lines: Vec<Line<'static>> = state
        .lines
        .iter()
        .map(|line| match line {
            DemoLine::Typing(text) => Line::from(vec![
                Span::styled(text.clone(), Style::default().fg(palette.text)),
                Span::styled(CARET, Style::default().fg(palette.accent)),
            ]),
            DemoLine::Committed(styled) => Line::from(
                styled
                    .spans
                    .iter()
                    .map(|span| {
                        Span::styled(span.text.clone(), palette.span_style(span.style))
                    })
                    .collect::<Vec<_>>(),
            ),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_output(frame: &mut Frame, area: Rect, state: &DemoState, palette: &Palette) {
    let header = state.output_header.clone().unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.panel_border))
        .title(Span::styled(
            format!(" {header} "),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line<'static>> = state
        .items
        .iter()
        .map(|item| {
            if item.completed {
                Line::from(vec![
                    Span::styled("✔ ", Style::default().fg(palette.success)),
                    Span::styled(
                        item.text.clone(),
                        Style::default()
                            .fg(palette.muted)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled("○ ", Style::default().fg(palette.muted)),
                    Span::styled(item.text.clone(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use vitrina_core::script::sequenced::{SpanStyle, StyledSpan};

    use super::*;

    #[test]
    fn test_apply_line_lifecycle() {
        let mut state = DemoState::default();
        state.apply(DemoEvent::Reset);
        state.apply(DemoEvent::LineStarted { index: 0 });
        state.apply(DemoEvent::LineText {
            index: 0,
            text: "cla".to_string(),
        });

        assert_eq!(state.lines, vec![DemoLine::Typing("cla".to_string())]);

        let styled = StyledLine {
            spans: vec![StyledSpan::new("class", SpanStyle::Keyword)],
        };
        state.apply(DemoEvent::LineCommitted {
            index: 0,
            line: styled.clone(),
        });
        assert_eq!(state.lines, vec![DemoLine::Committed(styled)]);
    }

    #[test]
    fn test_apply_output_and_completion() {
        let mut state = DemoState::default();
        state.apply(DemoEvent::OutputStarted {
            header: "Tareas".to_string(),
        });
        state.apply(DemoEvent::ItemRevealed {
            index: 0,
            text: "uno".to_string(),
        });
        state.apply(DemoEvent::ItemCompleted { index: 0 });
        state.apply(DemoEvent::Finished);

        assert_eq!(state.output_header.as_deref(), Some("Tareas"));
        assert!(state.items[0].completed);
        assert!(state.finished);
    }

    /// Reset wipes a previous run but keeps the started marker, so a replay
    /// does not re-trigger the page-activation start.
    #[test]
    fn test_reset_clears_previous_run() {
        let mut state = DemoState::default();
        state.started = true;
        state.apply(DemoEvent::LineStarted { index: 0 });
        state.apply(DemoEvent::Finished);

        state.apply(DemoEvent::Reset);
        assert!(state.lines.is_empty());
        assert!(!state.finished);
        assert!(state.started);
    }
}
