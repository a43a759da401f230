//! Per-frame animation state.

mod phase;

pub use phase::{Phase, PHASE_PERIOD, PHASE_STEP};
