//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `header` - Title, subtitle and feature tags
//! - `controls` - Pick/reset buttons, avoid-repeat checkbox, store count, history toggle
//! - `result_card` - The shuffling or revealed store
//! - `preview` - First few candidates
//! - `history_panel` - Recent picks
//! - `confetti_layer` - Falling confetti overlay
//! - `help_popup` - Help overlay with keybindings

mod confetti_layer;
mod controls;
mod header;
mod help_popup;
mod history_panel;
mod preview;
mod result_card;

pub use confetti_layer::render_confetti;
pub use controls::render_controls;
pub use header::render_header;
pub use help_popup::render_help_popup;
pub use history_panel::render_history_panel;
pub use preview::render_preview;
pub use result_card::render_result_card;

use ratatui::{style::Style, text::Span};

use crate::tui::theme::{TAG_BG, LOGO_GOLD};

/// A favorite dish rendered as a chip.
pub fn dish_tag(dish: &str) -> Span<'_> {
    Span::styled(format!(" {} ", dish), Style::new().fg(LOGO_GOLD).bg(TAG_BG))
}
