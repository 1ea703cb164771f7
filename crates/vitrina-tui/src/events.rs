//! UI event types.
//!
//! Everything that can happen to the TUI arrives as a `UiEvent`: terminal
//! input, the frame-cadence tick, and engine events forwarded from the
//! showcase tasks into the runtime inbox.

use vitrina_core::script::chat::ChatEvent;
use vitrina_core::script::sequenced::DemoEvent;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Frame-cadence tick; the only event that schedules a render.
    Tick,
    /// Terminal size, prepended every loop iteration before other events.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// New frame from the hero title typewriter.
    HeroFrame(String),
    /// New frame from the project title typewriter.
    ProjectFrame(String),
    /// Progress from the code demo engine.
    Demo(DemoEvent),
    /// Progress from the chat reply sequence.
    Chat(ChatEvent),
}
