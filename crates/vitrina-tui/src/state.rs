//! Application state composition.
//!
//! `AppState` is everything the reducer mutates and the render functions
//! read. Feature states live under `features/`; this module only composes
//! them and tracks the page selection.

use vitrina_core::config::Theme;
use vitrina_core::showcase::ShowSpec;

use crate::features::chat::ChatState;
use crate::features::demo::DemoState;
use crate::features::hero::HeroState;

/// The two pages of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Hero,
    Demo,
}

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Hero => Page::Demo,
            Page::Demo => Page::Hero,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Hero => "Inicio",
            Page::Demo => "Proyecto",
        }
    }
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Active theme; `t` toggles and persists it.
    pub theme: Theme,
    /// Active page.
    pub page: Page,
    /// The show content (read-only after startup).
    pub show: ShowSpec,
    pub hero: HeroState,
    pub demo: DemoState,
    pub chat: ChatState,
    /// Last known terminal size.
    pub width: u16,
    pub height: u16,
}

impl AppState {
    pub fn new(show: ShowSpec, theme: Theme) -> Self {
        Self {
            should_quit: false,
            theme,
            page: Page::Hero,
            show,
            hero: HeroState::default(),
            demo: DemoState::default(),
            chat: ChatState::default(),
            width: 0,
            height: 0,
        }
    }
}
