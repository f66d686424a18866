//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App turns them into state changes.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Selection ===
    /// Start a random pick
    Pick,
    /// Clear the result and refill the pool
    Reset,
    /// Flip the avoid-repeat checkbox
    ToggleAvoidRepeat,

    // === Panels ===
    /// Show or hide the history panel
    ToggleHistory,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === No-op ===
    /// No action to take
    None,
}
