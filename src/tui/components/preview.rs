//! Preview strip - a glance at the first few candidates.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Number of candidates shown in the preview
pub const PREVIEW_COUNT: usize = 6;

/// Render the first candidates side by side.
pub fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(" Browse ", Style::new().fg(LOGO_LIGHT_BLUE).bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stores: Vec<_> = app.selector.candidates().iter().take(PREVIEW_COUNT).collect();
    if stores.is_empty() {
        return;
    }

    let columns = Layout::horizontal(vec![Constraint::Fill(1); stores.len()]).split(inner);
    for (store, column) in stores.iter().zip(columns.iter()) {
        let mut lines = vec![Line::from(Span::styled(
            store.name.as_str(),
            Style::new().fg(TEXT_WHITE).bold(),
        ))];
        if let Some(address) = store.address() {
            lines.push(Line::styled(address, Style::new().fg(TEXT_DIM)));
        }
        frame.render_widget(Paragraph::new(lines), *column);
    }
}
