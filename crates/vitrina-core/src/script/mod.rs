//! Scripted sequencing engines.
//!
//! Every animation in vitrina is a cooperative async task: each suspension
//! point is a timer await, and all observable progress is emitted as typed
//! events over an unbounded channel (the same event-channel seam the TUI
//! drains into its inbox). Within one run, steps are strictly sequential;
//! there is no parallel fan-out.
//!
//! Engines stop on their own when the receiving side of the channel is
//! dropped. That is the only cancellation path for [`typewriter`] and
//! [`sequenced`]; the chat sequence additionally carries an explicit
//! `CancellationToken` (see [`chat`]).

pub mod chat;
pub mod sequenced;
pub mod typewriter;

mod text;
