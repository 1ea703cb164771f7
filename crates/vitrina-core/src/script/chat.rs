//! Scripted chat reply sequence.
//!
//! Opening the chat panel triggers a canned two-message reply: the first
//! message lands after 500ms, a typing indicator appears at 1500ms, and at
//! 4000ms the indicator goes away and the second message lands. Both
//! messages carry the wall-clock time of the trigger, not of their own
//! arrival.
//!
//! Unlike the other engines, a run can be cancelled mid-flight (the panel
//! was closed, or reopened for a fresh run). Cancellation covers the whole
//! chain, first message included, so a stale run can never touch the panel
//! after a newer run has reset it. On cancel the indicator is hidden before
//! the run ends, never left dangling.

use std::time::Duration;

use anyhow::{Result, bail};
use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// Delay from trigger to the first message.
const FIRST_MESSAGE_DELAY: Duration = Duration::from_millis(500);

/// Delay from trigger to the typing indicator.
const TYPING_DELAY: Duration = Duration::from_millis(1500);

/// Delay from the typing indicator to the second message.
const REPLY_DELAY: Duration = Duration::from_millis(2500);

/// One canned conversation: a greeting and a follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationPair {
    pub opener: String,
    pub follow_up: String,
}

/// Events emitted by a chat reply run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Both reply messages cleared from the panel.
    Reset,
    /// The opener message appeared.
    Opener { text: String, timestamp: String },
    /// Typing indicator appeared.
    TypingShown,
    /// Typing indicator went away.
    TypingHidden,
    /// The follow-up message appeared; the run is over.
    FollowUp { text: String, timestamp: String },
}

/// The canned conversation pool. One instance lives for the whole session;
/// each run picks a pair at random.
#[derive(Debug, Clone)]
pub struct ChatScript {
    conversations: Vec<ConversationPair>,
}

impl ChatScript {
    /// Creates a script over a non-empty conversation pool.
    pub fn new(conversations: Vec<ConversationPair>) -> Result<Self> {
        if conversations.is_empty() {
            bail!("ChatScript requires at least one conversation");
        }
        Ok(Self { conversations })
    }

    /// Runs one scripted reply, picking a random conversation.
    pub async fn run(&self, token: CancellationToken, events: UnboundedSender<ChatEvent>) {
        let index = rand::rng().random_range(0..self.conversations.len());
        self.run_conversation(index, token, events).await;
    }

    /// Runs one scripted reply with a fixed conversation.
    ///
    /// Returns when the sequence completes, the token is cancelled, or the
    /// receiver is dropped. Cancellation between steps suppresses every
    /// remaining step; a [`ChatEvent::TypingHidden`] is emitted on the way
    /// out so the indicator never outlives the run.
    pub async fn run_conversation(
        &self,
        index: usize,
        token: CancellationToken,
        events: UnboundedSender<ChatEvent>,
    ) {
        let pair = &self.conversations[index];
        // Both messages stamp the trigger time, not their arrival time.
        let timestamp = Local::now().format("%-I:%M %p").to_string();

        tracing::debug!(index, "chat reply starting");

        if events.send(ChatEvent::Reset).is_err() {
            return;
        }

        if wait(&token, FIRST_MESSAGE_DELAY).await.is_err() {
            let _ = events.send(ChatEvent::TypingHidden);
            return;
        }
        if events
            .send(ChatEvent::Opener {
                text: pair.opener.clone(),
                timestamp: timestamp.clone(),
            })
            .is_err()
        {
            return;
        }

        if wait(&token, TYPING_DELAY - FIRST_MESSAGE_DELAY).await.is_err() {
            let _ = events.send(ChatEvent::TypingHidden);
            return;
        }
        if events.send(ChatEvent::TypingShown).is_err() {
            return;
        }

        if wait(&token, REPLY_DELAY).await.is_err() {
            let _ = events.send(ChatEvent::TypingHidden);
            return;
        }
        if events.send(ChatEvent::TypingHidden).is_err() {
            return;
        }
        let _ = events.send(ChatEvent::FollowUp {
            text: pair.follow_up.clone(),
            timestamp,
        });
    }
}

/// Sleeps unless the token fires first.
async fn wait(token: &CancellationToken, delay: Duration) -> std::result::Result<(), ()> {
    tokio::select! {
        () = token.cancelled() => Err(()),
        () = tokio::time::sleep(delay) => Ok(()),
    }
}
