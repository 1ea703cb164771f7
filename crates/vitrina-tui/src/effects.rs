//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist the current theme preference to config.
    PersistTheme,

    /// Start (or restart) the code demo engine.
    ///
    /// A no-op while a run is in progress; the engine enforces this.
    StartDemo,

    /// Start a scripted chat reply. Cancels the previous run first, so a
    /// reopened panel always gets a fresh chain.
    StartChatReply,

    /// Cancel the in-flight chat reply, if any.
    CancelChatReply,
}
