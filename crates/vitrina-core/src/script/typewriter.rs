//! Character-by-character title animation.
//!
//! The classic landing-page typewriter: type a phrase, pause, delete it,
//! move on to the next one. Each step re-schedules itself after a delay —
//! this is deliberately not a fixed-interval timer, because the delay
//! depends on the phase (typing, deleting, pausing, phrase gap).
//!
//! The state machine itself is synchronous ([`Typewriter::tick`]) so it can
//! be tested without a runtime; [`Typewriter::run`] drives it with timer
//! awaits and a frame channel.

use std::time::Duration;

use anyhow::{Result, bail};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;

use crate::script::text::{grapheme_count, grapheme_prefix};

/// Fixed gap between deleting one phrase and typing the next,
/// independent of the configured speeds.
const PHRASE_GAP: Duration = Duration::from_millis(150);

/// Options for [`Typewriter`]. Defaults are applied at construction.
#[derive(Debug, Clone)]
pub struct TypewriterOptions {
    /// Cycle back through the phrase list after a phrase completes.
    /// When false, the machine halts once the first phrase is fully typed.
    pub loop_forever: bool,
    /// Delay per typed character.
    pub type_speed: Duration,
    /// Delay per deleted character.
    pub delete_speed: Duration,
    /// Pause once a phrase is fully typed.
    pub pause_after_complete: Duration,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            loop_forever: false,
            type_speed: Duration::from_millis(60),
            delete_speed: Duration::from_millis(30),
            pause_after_complete: Duration::from_millis(2000),
        }
    }
}

/// One step of the typewriter state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterStep {
    /// Text to display after this step, replacing prior content.
    pub frame: String,
    /// Delay before the next step. `None` means the machine has halted
    /// and no further step will ever be produced.
    pub delay: Option<Duration>,
}

/// Phrase-cycling typewriter state machine.
#[derive(Debug)]
pub struct Typewriter {
    texts: Vec<String>,
    options: TypewriterOptions,
    text_index: usize,
    char_index: usize,
    deleting: bool,
    halted: bool,
}

impl Typewriter {
    /// Creates a typewriter over a non-empty phrase list.
    pub fn new(texts: Vec<String>, options: TypewriterOptions) -> Result<Self> {
        if texts.is_empty() {
            bail!("Typewriter requires at least one phrase");
        }
        Ok(Self {
            texts,
            options,
            text_index: 0,
            char_index: 0,
            deleting: false,
            halted: false,
        })
    }

    /// Advances the state machine by one step.
    ///
    /// Order matters and mirrors the animation contract: the character index
    /// moves first, then the frame is rendered, then phase transitions pick
    /// the delay for the next step. Calling `tick` after the machine halted
    /// returns the final frame with no delay, forever.
    pub fn tick(&mut self) -> TypewriterStep {
        let current = &self.texts[self.text_index];
        let len = grapheme_count(current);

        if self.halted {
            return TypewriterStep {
                frame: current.clone(),
                delay: None,
            };
        }

        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.options.delete_speed
        } else {
            // Clamped so a pathological empty phrase still reaches the
            // completion transition instead of running away.
            self.char_index = (self.char_index + 1).min(len);
            self.options.type_speed
        };

        let frame = grapheme_prefix(current, self.char_index).to_string();

        if !self.deleting && self.char_index == len {
            delay = self.options.pause_after_complete;
            if self.options.loop_forever {
                self.deleting = true;
            } else {
                self.halted = true;
                tracing::debug!(text_index = self.text_index, "typewriter halted");
                return TypewriterStep { frame, delay: None };
            }
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay = PHRASE_GAP;
        }

        TypewriterStep {
            frame,
            delay: Some(delay),
        }
    }

    /// Drives the state machine, sending one frame per step.
    ///
    /// Returns when the machine halts (non-looping phrase fully typed) or
    /// when the receiver side is dropped. Looping typewriters therefore run
    /// until the UI goes away — there is no explicit stop call.
    pub async fn run(mut self, frames: UnboundedSender<String>) {
        loop {
            let step = self.tick();
            if frames.send(step.frame).is_err() {
                return;
            }
            match step.delay {
                Some(delay) => sleep(delay).await,
                None => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn fast(loop_forever: bool) -> TypewriterOptions {
        TypewriterOptions {
            loop_forever,
            type_speed: Duration::from_millis(10),
            delete_speed: Duration::from_millis(5),
            pause_after_complete: Duration::from_millis(50),
        }
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        assert!(Typewriter::new(Vec::new(), TypewriterOptions::default()).is_err());
    }

    /// Non-looping: types the phrase, then halts with no further delay.
    #[test]
    fn test_non_loop_reaches_terminal_state() {
        let mut tw = Typewriter::new(vec!["Hi".to_string()], fast(false)).unwrap();

        let s1 = tw.tick();
        assert_eq!(s1.frame, "H");
        assert_eq!(s1.delay, Some(Duration::from_millis(10)));

        let s2 = tw.tick();
        assert_eq!(s2.frame, "Hi");
        assert_eq!(s2.delay, None);

        // Terminal state is idempotent: no mutation ever again.
        for _ in 0..3 {
            let s = tw.tick();
            assert_eq!(s.frame, "Hi");
            assert_eq!(s.delay, None);
        }
    }

    /// Looping: phrases cycle in order, index advances only on
    /// delete-complete, and the fixed 150ms gap applies between phrases.
    #[test]
    fn test_loop_cycles_phrases_in_order() {
        let mut tw = Typewriter::new(vec!["ab".to_string(), "c".to_string()], fast(true)).unwrap();

        assert_eq!(tw.tick().frame, "a");
        let full = tw.tick();
        assert_eq!(full.frame, "ab");
        assert_eq!(full.delay, Some(Duration::from_millis(50))); // pause

        assert_eq!(tw.tick().frame, "a"); // deleting
        let gap = tw.tick();
        assert_eq!(gap.frame, "");
        assert_eq!(gap.delay, Some(Duration::from_millis(150)));

        // Second phrase, then wraps back to the first.
        assert_eq!(tw.tick().frame, "c");
        assert_eq!(tw.tick().frame, "");
        assert_eq!(tw.tick().frame, "a");
    }

    /// Deleting uses the delete speed, typing the type speed.
    #[test]
    fn test_phase_delays() {
        let mut tw = Typewriter::new(vec!["ab".to_string()], fast(true)).unwrap();

        assert_eq!(tw.tick().delay, Some(Duration::from_millis(10)));
        tw.tick(); // full -> pause
        assert_eq!(tw.tick().delay, Some(Duration::from_millis(5))); // deleting
    }

    /// Grapheme-aware: accented text never splits mid-cluster.
    #[test]
    fn test_multibyte_frames() {
        let mut tw = Typewriter::new(vec!["día".to_string()], fast(false)).unwrap();
        assert_eq!(tw.tick().frame, "d");
        assert_eq!(tw.tick().frame, "dí");
        assert_eq!(tw.tick().frame, "día");
    }

    /// run(): sends each frame, then closes the channel after the terminal
    /// state. No further frames arrive past the last expected tick.
    #[tokio::test(start_paused = true)]
    async fn test_run_non_loop_sends_frames_then_stops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tw = Typewriter::new(vec!["Hi".to_string()], fast(false)).unwrap();

        tokio::spawn(tw.run(tx));

        assert_eq!(rx.recv().await, Some("H".to_string()));
        assert_eq!(rx.recv().await, Some("Hi".to_string()));
        // Channel closes because the task returned; nothing else is queued.
        assert_eq!(rx.recv().await, None);
    }

    /// run(): stops quietly when the receiver goes away.
    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_receiver_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tw = Typewriter::new(vec!["loop".to_string()], fast(true)).unwrap();

        let handle = tokio::spawn(tw.run(tx));

        assert_eq!(rx.recv().await, Some("l".to_string()));
        drop(rx);

        handle.await.unwrap();
    }
}
