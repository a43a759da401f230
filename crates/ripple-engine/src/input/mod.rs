//! Input subsystem.
//!
//! The public types do not expose winit; `platform::winit` converts window
//! events into `InputEvent`s for the runtime.

mod frame;
pub(crate) mod platform;
mod pointer;
mod state;
mod types;

pub use frame::InputFrame;
pub use pointer::pointer_to_offset;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, PointerMoveEvent};
