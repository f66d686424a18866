use std::time::Instant;

use rand::rngs::StdRng;

use crate::config::Config;
use crate::confetti::ConfettiBurst;
use crate::events::Action;
use crate::log;
use crate::selector::{Selector, SpinEvent};
use crate::store::Store;
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Picking
    Help,   // Help popup showing all hotkeys
}

/// What the event loop has to do after an action was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing beyond a redraw
    None,
    /// A spin started; run the frame timeline
    StartSpin,
    /// Leave the event loop
    Quit,
}

pub struct App {
    pub selector: Selector,
    pub input_mode: InputMode,
    pub show_history: bool,
    pub confetti: Option<ConfettiBurst>,
    pub interactions: InteractionRegistry,
    pub placeholder_image: String,
    /// Where the store list came from, shown in the footer
    pub source_label: String,
    rng: StdRng,
}

impl App {
    pub fn new(stores: Vec<Store>, config: &Config, source_label: String, rng: StdRng) -> Self {
        Self {
            selector: Selector::new(stores, config.avoid_repeat()),
            input_mode: InputMode::Normal,
            show_history: config.show_history(),
            confetti: None,
            interactions: InteractionRegistry::new(),
            placeholder_image: config.placeholder_image().to_string(),
            source_label,
            rng,
        }
    }

    /// Apply an action and tell the event loop what to do next.
    pub fn dispatch(&mut self, action: Action) -> Command {
        match action {
            Action::Quit => return Command::Quit,
            Action::Pick => {
                if self.selector.pick() {
                    log::log_event(&format!(
                        "pick started (avoid_repeat={}, pool={})",
                        self.selector.avoid_repeat(),
                        self.selector.pool().len()
                    ));
                    return Command::StartSpin;
                }
                if !self.selector.is_animating() {
                    log::log_event("pick ignored: no stores");
                }
            }
            Action::Reset => {
                if self.selector.reset() {
                    log::log_event("reset");
                }
            }
            Action::ToggleAvoidRepeat => {
                let enabled = !self.selector.avoid_repeat();
                self.selector.set_avoid_repeat(enabled);
                log::log_event(&format!("avoid_repeat={}", enabled));
            }
            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,
            Action::None => {}
        }
        Command::None
    }

    /// Apply an event from the spin timeline.
    pub fn on_spin_event(&mut self, event: SpinEvent, now: Instant) {
        match event {
            SpinEvent::Frame(_) => {
                self.selector.show_frame(&mut self.rng);
            }
            SpinEvent::Settle => {
                if let Some(store) = self.selector.settle(&mut self.rng) {
                    log::log_event(&format!(
                        "picked '{}' (pool left: {})",
                        store.name,
                        self.selector.pool().len()
                    ));
                    self.confetti = Some(ConfettiBurst::new(&mut self.rng, now));
                }
            }
        }
    }

    /// Periodic housekeeping: drop an expired confetti burst.
    pub fn tick(&mut self, now: Instant) {
        if self.confetti.as_ref().is_some_and(|c| c.is_expired(now)) {
            self.confetti = None;
        }
    }
}

/// App over the given store names with a fixed seed
#[cfg(test)]
pub fn test_app(names: &[&str]) -> App {
    use rand::SeedableRng;

    let stores = names
        .iter()
        .map(|name| Store {
            name: name.to_string(),
            address: Some(format!("{} street", name)),
            image: None,
            favorites: vec!["noodles".to_string(), "dumplings".to_string()],
        })
        .collect();
    App::new(
        stores,
        &Config::default(),
        "test".to_string(),
        StdRng::seed_from_u64(0),
    )
}
