//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Engine tasks never touch state directly. Each engine writes typed events
//! to its own channel; a forwarder task maps them into `UiEvent`s and sends
//! them to the runtime inbox. The runtime drains the inbox every loop
//! iteration and feeds the reducer. When the runtime goes away the inbox
//! closes, the forwarders stop, their engine channels close, and the
//! engines wind down on their own.

use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use vitrina_core::config::{Config, Theme};
use vitrina_core::script::chat::ChatScript;
use vitrina_core::script::sequenced::{SequencedTyper, SequencedTyperOptions};
use vitrina_core::script::typewriter::{Typewriter, TypewriterOptions};
use vitrina_core::showcase::ShowSpec;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Page};
use crate::{render, terminal, update};

/// Target frame rate while something animates (60fps = ~16ms per frame).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when nothing on screen is moving.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Inbox sender, cloned into every forwarder task.
    inbox_tx: UiEventSender,
    /// Inbox receiver, drained each loop iteration.
    inbox_rx: UiEventReceiver,
    /// Demo engine, shared with spawned runs. Enforces single-run itself.
    demo: Arc<SequencedTyper>,
    chat: ChatScript,
    /// Token of the in-flight chat reply; a retrigger cancels it first.
    chat_cancel: Option<CancellationToken>,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime over a validated show.
    pub fn new(show: ShowSpec, theme: Theme) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let demo = Arc::new(SequencedTyper::new(
            show.code.clone(),
            show.output_header.clone(),
            show.tasks.clone(),
            SequencedTyperOptions::default(),
        )?);
        let chat = ChatScript::new(show.conversations.clone())?;

        let state = AppState::new(show, theme);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            demo,
            chat,
            chat_cancel: None,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        self.spawn_typewriters()?;
        let result = self.event_loop();
        // A dangling chat task would outlive the loop otherwise.
        if let Some(cancel) = self.chat_cancel.take() {
            cancel.cancel();
        }
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // initial render

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so layout-dependent handling sees the
            // current size.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                // Only Tick schedules a render; engine events batch up to
                // the next tick so the frame rate stays capped.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal, then emits Tick
    /// when the tick interval has elapsed.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let tick_interval = if self.needs_fast_poll() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Block until the next tick is due unless events are already
        // waiting; input stays responsive either way.
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    /// Fast polling while anything on screen animates.
    fn needs_fast_poll(&self) -> bool {
        self.state.page == Page::Hero
            || (self.state.demo.started && !self.state.demo.finished)
            || self.state.chat.open
    }

    // ========================================================================
    // Effect dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::PersistTheme => {
                if let Err(err) = Config::save_theme(self.state.theme) {
                    tracing::warn!(error = %err, "failed to persist theme");
                }
            }
            UiEffect::StartDemo => self.spawn_demo(),
            UiEffect::StartChatReply => self.spawn_chat_reply(),
            UiEffect::CancelChatReply => {
                if let Some(cancel) = self.chat_cancel.take() {
                    cancel.cancel();
                }
            }
        }
    }

    // ========================================================================
    // Engine tasks
    // ========================================================================

    /// Starts both title typewriters for the lifetime of the runtime.
    fn spawn_typewriters(&self) -> Result<()> {
        self.spawn_typewriter(
            self.state.show.hero_titles.clone(),
            ShowSpec::hero_options(),
            UiEvent::HeroFrame,
        )?;
        self.spawn_typewriter(
            vec![self.state.show.project_title.clone()],
            ShowSpec::project_options(),
            UiEvent::ProjectFrame,
        )?;
        Ok(())
    }

    fn spawn_typewriter(
        &self,
        texts: Vec<String>,
        options: TypewriterOptions,
        map: fn(String) -> UiEvent,
    ) -> Result<()> {
        let typewriter = Typewriter::new(texts, options)?;
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(typewriter.run(tx));

        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            while let Some(frame) = rx.recv().await {
                if inbox.send(map(frame)).is_err() {
                    return;
                }
            }
        });
        Ok(())
    }

    fn spawn_demo(&self) {
        if self.demo.is_running() {
            return;
        }
        let demo = Arc::clone(&self.demo);
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            demo.start(&tx).await;
        });

        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                if inbox.send(UiEvent::Demo(event)).is_err() {
                    return;
                }
            }
        });
    }

    fn spawn_chat_reply(&mut self) {
        // Whole-chain cancellation: a retriggered reply can never interleave
        // with a stale one.
        if let Some(cancel) = self.chat_cancel.take() {
            cancel.cancel();
        }
        let token = CancellationToken::new();
        self.chat_cancel = Some(token.clone());

        let chat = self.chat.clone();
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            chat.run(token, tx).await;
        });

        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                if inbox.send(UiEvent::Chat(event)).is_err() {
                    return;
                }
            }
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
