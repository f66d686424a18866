//! Control bar - the buttons of the picker.
//!
//! Every button is also registered as a click region so the mouse works
//! the same as the hotkeys.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::ClickRegion;
use crate::tui::theme::*;

/// Render the control bar on a single row.
pub fn render_controls(frame: &mut Frame, area: Rect, app: &mut App) {
    let rolling = app.selector.is_animating();

    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::new().fg(TEXT_WHITE).bg(LOGO_CORAL).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };
        Span::styled(label, style)
    };

    let checkbox = if app.selector.avoid_repeat() {
        "[x] avoid repeats"
    } else {
        "[ ] avoid repeats"
    };

    let history_label = if app.show_history {
        "[ hide history ]"
    } else {
        "[ show history ]"
    };

    // (span, click action) in display order
    let items: Vec<(Span, Option<(&'static str, Action)>)> = vec![
        (button("[ Pick ]", !rolling), Some(("pick_button", Action::Pick))),
        (Span::raw("  "), None),
        (button("[ Reset ]", !rolling), Some(("reset_button", Action::Reset))),
        (Span::raw("  "), None),
        (
            Span::styled(checkbox, Style::new().fg(LOGO_LIGHT_BLUE)),
            Some(("avoid_repeat_checkbox", Action::ToggleAvoidRepeat)),
        ),
        (Span::raw("  "), None),
        (
            Span::styled(store_count(app.selector.candidates().len()), Style::new().fg(TEXT_DIM)),
            None,
        ),
        (Span::raw("  "), None),
        (
            Span::styled(history_label, Style::new().fg(LOGO_GOLD)),
            Some(("history_toggle", Action::ToggleHistory)),
        ),
    ];

    let mut x = area.x;
    let mut spans = vec![];
    for (span, click) in items {
        let width = span.width() as u16;
        if let Some((id, action)) = click {
            app.interactions
                .register_click(id, ClickRegion::new(x, area.y, width, 1), action);
        }
        x = x.saturating_add(width);
        spans.push(span);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn store_count(n: usize) -> String {
    if n == 1 {
        "1 store".to_string()
    } else {
        format!("{} stores", n)
    }
}
