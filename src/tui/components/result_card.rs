//! Result card - the store currently shuffling past or the revealed pick.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::selector::timeline::FRAME_COUNT;
use crate::tui::theme::*;

use super::dish_tag;

/// Render the result card.
pub fn render_result_card(frame: &mut Frame, area: Rect, app: &App) {
    let rolling = app.selector.is_animating();

    let (title, border) = if rolling {
        (
            format!(" Rolling... {}/{} ", app.selector.frames_shown(), FRAME_COUNT),
            LOGO_GOLD,
        )
    } else if app.selector.result().is_some() {
        (" Today's pick ".to_string(), LOGO_MINT)
    } else {
        (" Pick ".to_string(), TEXT_DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border))
        .title(Span::styled(title, Style::new().fg(border).bold()));

    let Some(store) = app.selector.displayed() else {
        let hint = if app.selector.candidates().is_empty() {
            "No stores loaded, check the data file"
        } else {
            "Nothing picked yet, press Space to pick"
        };
        let paragraph = Paragraph::new(vec![Line::raw(""), Line::styled(hint, Style::new().fg(TEXT_DIM))])
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let name_style = if app.selector.current_display().is_some() {
        Style::new().fg(TEXT_WHITE)
    } else {
        Style::new().fg(LOGO_CORAL).bold()
    };

    let mut lines = vec![Line::from(Span::styled(store.name.as_str(), name_style))];

    if let Some(address) = store.address() {
        lines.push(Line::styled(address, Style::new().fg(TEXT_DIM)));
    }

    if !store.favorites.is_empty() {
        lines.push(Line::raw(""));
        let mut tags = vec![];
        for (i, dish) in store.favorites.iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw(" "));
            }
            tags.push(dish_tag(dish));
        }
        lines.push(Line::from(tags));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("image ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            store.image_or(&app.placeholder_image),
            Style::new().fg(LOGO_LIGHT_BLUE).add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
