//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects. This is the single source of truth for
//! how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Page};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { width, height } => {
            state.width = width;
            state.height = height;
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, &term_event),
        UiEvent::HeroFrame(text) => {
            state.hero.title = text;
            vec![]
        }
        UiEvent::ProjectFrame(text) => {
            state.hero.project_title = text;
            vec![]
        }
        UiEvent::Demo(demo_event) => {
            state.demo.apply(demo_event);
            vec![]
        }
        UiEvent::Chat(chat_event) => {
            state.chat.apply(chat_event);
            vec![]
        }
    }
}

fn handle_terminal_event(state: &mut AppState, event: &Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return vec![UiEffect::Quit];
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Char('t') => {
            state.theme = state.theme.toggled();
            vec![UiEffect::PersistTheme]
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Left => switch_page(state),
        KeyCode::Char('r') if state.page == Page::Demo => vec![UiEffect::StartDemo],
        KeyCode::Char('c') => toggle_chat(state),
        KeyCode::Esc if state.chat.open => toggle_chat(state),
        _ => vec![],
    }
}

fn switch_page(state: &mut AppState) -> Vec<UiEffect> {
    state.page = state.page.next();
    // First visit to the demo page starts the run; replays go through `r`.
    if state.page == Page::Demo && !state.demo.started {
        state.demo.started = true;
        return vec![UiEffect::StartDemo];
    }
    vec![]
}

fn toggle_chat(state: &mut AppState) -> Vec<UiEffect> {
    state.chat.open = !state.chat.open;
    if state.chat.open {
        vec![UiEffect::StartChatReply]
    } else {
        vec![UiEffect::CancelChatReply]
    }
}

#[cfg(test)]
mod tests {
    use vitrina_core::config::Theme;
    use vitrina_core::showcase::ShowSpec;

    use super::*;

    fn state() -> AppState {
        AppState::new(ShowSpec::builtin(), Theme::Dark)
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = state();
        assert_eq!(update(&mut app, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
        assert!(app.should_quit);

        let mut app = state();
        assert_eq!(update(&mut app, ctrl('c')), vec![UiEffect::Quit]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut app = state();
        let effects = update(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(effects, vec![UiEffect::PersistTheme]);
    }

    /// First switch to the demo page starts the demo; returning to it does
    /// not start a second run.
    #[test]
    fn test_demo_starts_on_first_page_visit_only() {
        let mut app = state();
        let effects = update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.page, Page::Demo);
        assert_eq!(effects, vec![UiEffect::StartDemo]);

        assert_eq!(update(&mut app, key(KeyCode::Tab)), vec![]);
        assert_eq!(update(&mut app, key(KeyCode::Tab)), vec![]);
        assert_eq!(app.page, Page::Demo);
    }

    #[test]
    fn test_replay_key_only_on_demo_page() {
        let mut app = state();
        assert_eq!(update(&mut app, key(KeyCode::Char('r'))), vec![]);

        update(&mut app, key(KeyCode::Tab));
        assert_eq!(
            update(&mut app, key(KeyCode::Char('r'))),
            vec![UiEffect::StartDemo]
        );
    }

    #[test]
    fn test_chat_toggle_effects() {
        let mut app = state();
        assert_eq!(
            update(&mut app, key(KeyCode::Char('c'))),
            vec![UiEffect::StartChatReply]
        );
        assert!(app.chat.open);

        assert_eq!(
            update(&mut app, key(KeyCode::Esc)),
            vec![UiEffect::CancelChatReply]
        );
        assert!(!app.chat.open);
    }

    #[test]
    fn test_engine_events_update_feature_state() {
        let mut app = state();
        update(&mut app, UiEvent::HeroFrame("Apre".to_string()));
        assert_eq!(app.hero.title, "Apre");

        update(
            &mut app,
            UiEvent::Demo(vitrina_core::script::sequenced::DemoEvent::LineStarted { index: 0 }),
        );
        assert_eq!(app.demo.lines.len(), 1);
    }
}
