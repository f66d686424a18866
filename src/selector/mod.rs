//! Randomized store selection.
//!
//! - `state` - the `Selector` session object (pool, result, history)
//! - `timeline` - timing of the shuffle frames and the final reveal

mod state;
pub mod timeline;

pub use state::{Selector, HISTORY_LIMIT};
pub use timeline::SpinEvent;
