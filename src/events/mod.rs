//! Event handling module for keyboard and mouse input.
//!
//! Handlers never touch state directly; they return an `Action` that
//! `App::dispatch` applies.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
