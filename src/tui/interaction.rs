//! Component-level mouse interactivity.
//!
//! Components register their clickable regions during render, and mouse
//! clicks are routed to the region under the cursor.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a clickable region:
//! app.interactions.register(
//!     InteractiveRegion::clickable("pick_button", ClickRegion::new(x, y, 8, 1), Action::Pick),
//! );
//!
//! // A click at (x, y) now dispatches Action::Pick
//! ```

use crate::events::Action;
use crate::log;

/// A rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is within this region (right/bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.width)
            && y < self.y.saturating_add(self.height)
    }
}

/// A clickable region that dispatches an action.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Unique identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click
    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first)
    /// Use this for popups that should capture clicks over underlying content
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: action,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the point.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        let Some(region) = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y))
            .max_by_key(|r| r.priority)
        else {
            return Action::None;
        };

        log::log_event(&format!("click on {}", region.id));
        region.on_click
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable("background", ClickRegion::new(0, 0, 100, 100), Action::Pick)
                .with_priority(0),
        );
        registry.register(
            InteractiveRegion::clickable("popup", ClickRegion::new(20, 20, 60, 60), Action::CloseHelp)
                .with_priority(10),
        );

        // Click in popup area should return popup's action
        assert_eq!(registry.handle_click(50, 50), Action::CloseHelp);

        // Click outside popup should return background's action
        assert_eq!(registry.handle_click(5, 5), Action::Pick);
    }

    #[test]
    fn test_clear_and_miss() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("reset", ClickRegion::new(0, 0, 5, 1), Action::Reset);
        assert_eq!(registry.handle_click(6, 0), Action::None);

        registry.clear();
        assert_eq!(registry.handle_click(0, 0), Action::None);
    }
}
