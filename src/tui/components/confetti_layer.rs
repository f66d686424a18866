//! Confetti overlay drawn on top of everything else.

use std::time::Instant;

use ratatui::{Frame, layout::Rect};

use crate::app::App;

/// Draw the live confetti burst, if any.
pub fn render_confetti(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let Some(burst) = &app.confetti else {
        return;
    };

    let elapsed = burst.elapsed(now);
    let buffer = frame.buffer_mut();
    for piece in &burst.pieces {
        let Some((x, y)) = piece.cell(elapsed, area.width, area.height) else {
            continue;
        };
        if let Some(cell) = buffer.cell_mut((area.x + x, area.y + y)) {
            cell.set_char(piece.glyph()).set_fg(piece.color);
        }
    }
}
