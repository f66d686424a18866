//! Confetti burst shown after a store is revealed.
//!
//! A burst is fire-and-forget: it is created with random pieces, rendered
//! while it is live and dropped once `BURST_DURATION` has passed. Nothing in
//! the selection logic depends on it.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

use crate::tui::theme::CONFETTI_COLORS;

/// Number of pieces in a burst
pub const PIECE_COUNT: usize = 50;

/// How long a burst stays on screen
pub const BURST_DURATION: Duration = Duration::from_millis(1800);

/// Glyphs cycled through by piece size, smallest first
const GLYPHS: [char; 4] = ['·', '•', '◆', '█'];

/// A single falling piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Horizontal position in percent of the screen width, `[0, 100)`
    pub left: f64,
    /// Relative size, `[6, 16)`; picks the glyph
    pub size: f64,
    pub color: Color,
    /// Seconds before the piece starts falling, `[0, 0.3)`
    pub delay: f64,
    /// Seconds to fall the full height, `[1.2, 2.0)`
    pub duration: f64,
}

impl Piece {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(0.0..100.0),
            size: 6.0 + rng.random_range(0.0..10.0),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            delay: rng.random_range(0.0..0.3),
            duration: 1.2 + rng.random_range(0.0..0.8),
        }
    }

    /// Fraction of the fall completed after `elapsed`, or `None` when the
    /// piece has not started yet or has already landed.
    pub fn progress(&self, elapsed: Duration) -> Option<f64> {
        let t = elapsed.as_secs_f64() - self.delay;
        if t < 0.0 {
            return None;
        }
        let p = t / self.duration;
        (p < 1.0).then_some(p)
    }

    /// Cell position inside a `width` x `height` area after `elapsed`.
    pub fn cell(&self, elapsed: Duration, width: u16, height: u16) -> Option<(u16, u16)> {
        if width == 0 || height == 0 {
            return None;
        }
        let p = self.progress(elapsed)?;
        let x = ((self.left / 100.0) * width as f64) as u16;
        let y = (p * height as f64) as u16;
        Some((x.min(width - 1), y.min(height - 1)))
    }

    pub fn glyph(&self) -> char {
        let bucket = ((self.size - 6.0) / 10.0 * GLYPHS.len() as f64) as usize;
        GLYPHS[bucket.min(GLYPHS.len() - 1)]
    }
}

/// A live confetti burst.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pub pieces: Vec<Piece>,
    started: Instant,
}

impl ConfettiBurst {
    pub fn new<R: Rng>(rng: &mut R, now: Instant) -> Self {
        Self {
            pieces: (0..PIECE_COUNT).map(|_| Piece::random(rng)).collect(),
            started: now,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= BURST_DURATION
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_burst_pieces_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let burst = ConfettiBurst::new(&mut rng, Instant::now());

        assert_eq!(burst.pieces.len(), PIECE_COUNT);
        for piece in &burst.pieces {
            assert!((0.0..100.0).contains(&piece.left));
            assert!((6.0..16.0).contains(&piece.size));
            assert!((0.0..0.3).contains(&piece.delay));
            assert!((1.2..2.0).contains(&piece.duration));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn test_burst_expires_after_duration() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Instant::now();
        let burst = ConfettiBurst::new(&mut rng, start);

        assert!(!burst.is_expired(start));
        assert!(!burst.is_expired(start + Duration::from_millis(1799)));
        assert!(burst.is_expired(start + BURST_DURATION));
    }

    #[test]
    fn test_piece_falls_top_to_bottom() {
        let piece = Piece {
            left: 50.0,
            size: 10.0,
            color: CONFETTI_COLORS[0],
            delay: 0.25,
            duration: 1.0,
        };

        assert_eq!(piece.cell(Duration::from_millis(100), 40, 10), None);
        assert_eq!(piece.cell(Duration::from_millis(250), 40, 10), Some((20, 0)));
        assert_eq!(piece.cell(Duration::from_millis(750), 40, 10), Some((20, 5)));
        assert_eq!(piece.cell(Duration::from_millis(1250), 40, 10), None);
        assert_eq!(piece.cell(Duration::from_millis(500), 0, 10), None);
    }

    #[test]
    fn test_glyph_by_size() {
        let mut piece = Piece {
            left: 0.0,
            size: 6.0,
            color: CONFETTI_COLORS[0],
            delay: 0.0,
            duration: 1.0,
        };
        assert_eq!(piece.glyph(), '·');
        piece.size = 15.9;
        assert_eq!(piece.glyph(), '█');
    }
}
