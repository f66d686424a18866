use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use super::components::*;
use super::theme::*;

/// Width of the history panel when shown
const HISTORY_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Click regions are rebuilt every frame
    app.interactions.clear();

    // Main vertical layout: header, controls, card (+history), preview, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Controls
        Constraint::Length(1), // Spacing
        Constraint::Min(8),    // Result card / history
        Constraint::Length(4), // Preview
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_header(frame, main_layout[0]);
    render_controls(frame, main_layout[2], app);

    if app.show_history {
        let content_layout = Layout::horizontal([
            Constraint::Min(0),                // Result card
            Constraint::Length(1),             // Gap
            Constraint::Length(HISTORY_WIDTH), // History
        ])
        .split(main_layout[4]);
        render_result_card(frame, content_layout[0], app);
        render_history_panel(frame, content_layout[2], app);
    } else {
        render_result_card(frame, main_layout[4], app);
    }

    render_preview(frame, main_layout[5], app);
    render_hotkeys(frame, main_layout[6], app);

    render_confetti(frame, area, app, Instant::now());

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::new().fg(TEXT_WHITE));
    let label = |l: &'static str| Span::styled(l, Style::new().fg(TEXT_DIM));

    let line = Line::from(vec![
        key("[space]"),
        label(" pick  "),
        key("[r]"),
        label(" reset  "),
        key("[a]"),
        label(" avoid repeats  "),
        key("[h]"),
        label(" history  "),
        key("[?]"),
        label(" help  "),
        key("[q]"),
        label(" quit   "),
        Span::styled(
            format!("data: {}", app.source_label),
            Style::new().fg(TEXT_DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
