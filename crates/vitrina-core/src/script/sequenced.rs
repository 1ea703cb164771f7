//! Scripted code-typing demo engine.
//!
//! Types a sequence of pre-scripted lines into a code panel one character at
//! a time, swaps each line for its pre-built rich rendering once it finishes,
//! then reveals an output panel through a second scripted sub-sequence: all
//! items appear first, then each is marked completed, strictly in order.
//!
//! A run emits [`DemoEvent`]s; the front-end applies them to its panel
//! state. `start` is guarded so two overlapping runs against the same
//! instance are impossible — the second call is a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use unicode_segmentation::UnicodeSegmentation;

/// Style classes for pre-built rich line renderings.
///
/// The engine never deals in colors; the front-end theme maps each class to
/// a concrete style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStyle {
    Plain,
    Keyword,
    Function,
    Punctuation,
    Comment,
    Accent,
}

/// One styled fragment of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Pre-built rich rendering of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// A line consisting of a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![StyledSpan::new(text, SpanStyle::Plain)],
        }
    }

    /// Concatenated text content, styles dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One scripted line: raw text that drives the reveal animation, plus the
/// rich rendering substituted verbatim once the line finishes typing.
///
/// The rendering may differ from the raw text character-for-character; it is
/// a one-shot substitution, not an incremental restyle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    pub plain: String,
    pub styled: StyledLine,
}

/// Options for [`SequencedTyper`]. Defaults are applied at construction.
#[derive(Debug, Clone)]
pub struct SequencedTyperOptions {
    /// Delay per revealed character.
    pub type_speed: Duration,
    /// Pause after a line commits before the next line starts.
    pub line_delay: Duration,
    /// Pause before the first line starts.
    pub start_delay: Duration,
    /// Pause between the last typed line and the output panel appearing.
    pub output_lead: Duration,
    /// Pause before each revealed output item.
    pub item_delay: Duration,
    /// Pause between the last revealed item and the first completion mark.
    pub completion_lead: Duration,
    /// Pause before each completion mark.
    pub completion_step: Duration,
}

impl Default for SequencedTyperOptions {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(25),
            line_delay: Duration::from_millis(200),
            start_delay: Duration::from_millis(500),
            output_lead: Duration::from_millis(1000),
            item_delay: Duration::from_millis(700),
            completion_lead: Duration::from_millis(1500),
            completion_step: Duration::from_millis(1000),
        }
    }
}

impl SequencedTyperOptions {
    /// Every delay collapsed to `short`; for headless quick runs.
    pub fn uniform(short: Duration) -> Self {
        Self {
            type_speed: short,
            line_delay: short,
            start_delay: short,
            output_lead: short,
            item_delay: short,
            completion_lead: short,
            completion_step: short,
        }
    }
}

/// Events emitted by [`SequencedTyper`] during a run.
///
/// Serializable for the headless JSON output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DemoEvent {
    /// Both panels cleared; output panel hidden.
    Reset,
    /// A new, empty line was appended to the code panel.
    LineStarted { index: usize },
    /// Raw text revealed so far for the active line. The front-end shows a
    /// trailing caret while a line is active.
    LineText { index: usize, text: String },
    /// The line's content was replaced with its rich rendering; the caret
    /// goes away.
    LineCommitted { index: usize, line: StyledLine },
    /// Output panel unhidden, header rendered.
    OutputStarted { header: String },
    /// An output item row appeared.
    ItemRevealed { index: usize, text: String },
    /// A previously revealed row was marked completed.
    ItemCompleted { index: usize },
    /// The full sequence finished; a new run may start.
    Finished,
}

/// Receiver went away; the run ends quietly.
struct Closed;

type SendResult = std::result::Result<(), Closed>;

fn send(events: &UnboundedSender<DemoEvent>, event: DemoEvent) -> SendResult {
    events.send(event).map_err(|_dropped| Closed)
}

/// Clears the running flag on every exit path of a run.
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Scripted code-typing demo. One instance per demo panel; a run is
/// created fresh on each activation and leaves no state behind.
#[derive(Debug)]
pub struct SequencedTyper {
    lines: Vec<LineSpec>,
    header: String,
    items: Vec<String>,
    options: SequencedTyperOptions,
    running: AtomicBool,
}

impl SequencedTyper {
    /// Creates a typer over a non-empty line list.
    pub fn new(
        lines: Vec<LineSpec>,
        header: impl Into<String>,
        items: Vec<String>,
        options: SequencedTyperOptions,
    ) -> Result<Self> {
        if lines.is_empty() {
            bail!("SequencedTyper requires at least one line");
        }
        Ok(Self {
            lines,
            header: header.into(),
            items,
            options,
            running: AtomicBool::new(false),
        })
    }

    /// Whether a run is currently in progress.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Runs the full scripted sequence.
    ///
    /// Idempotent while running: a second call is a no-op until the first
    /// run finishes. Steps are strictly sequential; every delay suspends
    /// this task only.
    pub async fn start(&self, events: &UnboundedSender<DemoEvent>) {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("demo run already in progress, start ignored");
            return;
        }
        let _guard = RunningGuard(&self.running);

        tracing::debug!(lines = self.lines.len(), "demo run starting");
        let _ = self.run_sequence(events).await;
    }

    async fn run_sequence(&self, events: &UnboundedSender<DemoEvent>) -> SendResult {
        send(events, DemoEvent::Reset)?;
        sleep(self.options.start_delay).await;

        for (index, line) in self.lines.iter().enumerate() {
            send(events, DemoEvent::LineStarted { index })?;
            self.type_line(index, &line.plain, events).await?;
            send(
                events,
                DemoEvent::LineCommitted {
                    index,
                    line: line.styled.clone(),
                },
            )?;
            sleep(self.options.line_delay).await;
        }

        sleep(self.options.output_lead).await;
        self.run_output(events).await?;

        send(events, DemoEvent::Finished)
    }

    /// Reveals the raw text one grapheme at a time. Resolves exactly once,
    /// when the whole text has been revealed.
    async fn type_line(
        &self,
        index: usize,
        plain: &str,
        events: &UnboundedSender<DemoEvent>,
    ) -> SendResult {
        if plain.is_empty() {
            // An empty line still burns one interval before committing.
            sleep(self.options.type_speed).await;
            return Ok(());
        }

        let mut revealed = String::new();
        for grapheme in plain.graphemes(true) {
            sleep(self.options.type_speed).await;
            revealed.push_str(grapheme);
            send(
                events,
                DemoEvent::LineText {
                    index,
                    text: revealed.clone(),
                },
            )?;
        }
        Ok(())
    }

    /// Two-phase output reveal: every item appears before the first
    /// completion mark, and completions follow appearance order.
    async fn run_output(&self, events: &UnboundedSender<DemoEvent>) -> SendResult {
        send(
            events,
            DemoEvent::OutputStarted {
                header: self.header.clone(),
            },
        )?;

        for (index, item) in self.items.iter().enumerate() {
            sleep(self.options.item_delay).await;
            send(
                events,
                DemoEvent::ItemRevealed {
                    index,
                    text: item.clone(),
                },
            )?;
        }

        sleep(self.options.completion_lead).await;
        for index in 0..self.items.len() {
            sleep(self.options.completion_step).await;
            send(events, DemoEvent::ItemCompleted { index })?;
        }
        Ok(())
    }
}
