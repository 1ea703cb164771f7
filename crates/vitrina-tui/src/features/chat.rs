//! Chat widget: the scripted two-message reply panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use vitrina_core::script::chat::ChatEvent;

use crate::theme::Palette;

/// One rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub timestamp: String,
}

/// Accumulated view of the chat reply event stream.
#[derive(Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub opener: Option<ChatMessage>,
    pub follow_up: Option<ChatMessage>,
    pub typing: bool,
}

impl ChatState {
    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Reset => {
                self.opener = None;
                self.follow_up = None;
                self.typing = false;
            }
            ChatEvent::Opener { text, timestamp } => {
                self.opener = Some(ChatMessage { text, timestamp });
            }
            ChatEvent::TypingShown => self.typing = true,
            ChatEvent::TypingHidden => self.typing = false,
            ChatEvent::FollowUp { text, timestamp } => {
                self.follow_up = Some(ChatMessage { text, timestamp });
            }
        }
    }
}

/// Renders the chat panel in the lower-right corner of `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &ChatState, palette: &Palette) {
    let width = (area.width * 2 / 3).clamp(30, 60).min(area.width);
    let height = 12.min(area.height);
    let panel = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(height),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(
            " Asesor ProgCero ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in [&state.opener, &state.follow_up].into_iter().flatten() {
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(palette.text).bg(palette.chat_bubble),
        )));
        lines.push(
            Line::from(Span::styled(
                message.timestamp.clone(),
                Style::default().fg(palette.muted),
            ))
            .alignment(Alignment::Right),
        );
    }
    if state.typing {
        lines.push(Line::from(Span::styled(
            "escribiendo…",
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: false }),
        panel,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_full_sequence() {
        let mut state = ChatState::default();
        state.apply(ChatEvent::Reset);
        state.apply(ChatEvent::Opener {
            text: "hola".to_string(),
            timestamp: "3:05 PM".to_string(),
        });
        state.apply(ChatEvent::TypingShown);
        assert!(state.typing);

        state.apply(ChatEvent::TypingHidden);
        state.apply(ChatEvent::FollowUp {
            text: "sigo aquí".to_string(),
            timestamp: "3:05 PM".to_string(),
        });

        assert!(!state.typing);
        assert_eq!(state.opener.as_ref().unwrap().text, "hola");
        assert_eq!(state.follow_up.as_ref().unwrap().text, "sigo aquí");
    }

    /// A retriggered run begins with Reset, wiping the stale messages.
    #[test]
    fn test_reset_wipes_messages() {
        let mut state = ChatState::default();
        state.apply(ChatEvent::Opener {
            text: "vieja".to_string(),
            timestamp: "1:00 PM".to_string(),
        });
        state.apply(ChatEvent::TypingShown);

        state.apply(ChatEvent::Reset);
        assert!(state.opener.is_none());
        assert!(state.follow_up.is_none());
        assert!(!state.typing);
    }
}
