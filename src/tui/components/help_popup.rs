//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

const BINDINGS: [(&str, &str); 6] = [
    ("  Space   ", "Pick a store (also Enter, p)"),
    ("  r       ", "Reset result and pool"),
    ("  a       ", "Toggle avoid repeats"),
    ("  h       ", "Show/hide history"),
    ("  ?       ", "This help"),
    ("  q       ", "Quit (also Esc, C-c)"),
];

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 14u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    for (key, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(key, Style::new().fg(TEXT_WHITE)),
            Span::styled(description, Style::new().fg(TEXT_DIM)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Buttons on the control bar are clickable.",
        Style::new().fg(TEXT_DIM),
    ));
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);

    // Clicking anywhere closes the popup and blocks the controls underneath
    let screen = ClickRegion::new(area.x, area.y, area.width, area.height);
    app.interactions.register(
        InteractiveRegion::clickable("help_popup", screen, Action::CloseHelp).with_priority(10),
    );
}
