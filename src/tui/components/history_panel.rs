//! History panel - recent picks, newest on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::selector::HISTORY_LIMIT;
use crate::tui::theme::*;

use super::dish_tag;

/// Favorites shown per history entry
const HISTORY_TAGS: usize = 3;

/// Render the history panel.
pub fn render_history_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .title(Span::styled(
            format!(" History {}/{} ", app.selector.history().len(), HISTORY_LIMIT),
            Style::new().fg(LOGO_LIGHT_BLUE).bold(),
        ));

    let mut lines: Vec<Line> = vec![];

    if app.selector.history().len() == 0 {
        lines.push(Line::styled("No history yet", Style::new().fg(TEXT_DIM)));
    }

    for (i, store) in app.selector.history().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::new().fg(TEXT_DIM)),
            Span::styled(store.name.as_str(), Style::new().fg(TEXT_WHITE).bold()),
        ]));
        if let Some(address) = store.address() {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(address, Style::new().fg(TEXT_DIM)),
            ]));
        }
        if !store.favorites.is_empty() {
            let mut tags = vec![Span::raw("   ")];
            for dish in store.favorites.iter().take(HISTORY_TAGS) {
                tags.push(dish_tag(dish));
                tags.push(Span::raw(" "));
            }
            lines.push(Line::from(tags));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
