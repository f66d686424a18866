//! Header component - title, subtitle and feature tags.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

const FEATURES: [&str; 4] = ["random pick", "avoid repeats", "favorite dishes", "history"];

/// Render the title block. Needs three rows.
pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("What's ", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("for ", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("lunch", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("?", Style::new().fg(LOGO_MINT).bold()),
    ]);

    let subtitle = Line::styled(
        "Can't decide? One key picks a store and the dishes worth ordering there",
        Style::new().fg(TEXT_DIM),
    );

    let mut feature_spans = vec![];
    for (i, feature) in FEATURES.iter().enumerate() {
        if i > 0 {
            feature_spans.push(Span::raw("  "));
        }
        feature_spans.push(Span::styled(
            format!("· {}", feature),
            Style::new().fg(LOGO_MINT),
        ));
    }

    let paragraph = Paragraph::new(vec![title, subtitle, Line::from(feature_spans)])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
