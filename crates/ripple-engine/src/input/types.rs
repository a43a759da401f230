/// Keys the demos react to. Everything else maps to `Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Q,
    Space,

    /// Platform key code not listed above.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Pointer position in physical pixels, origin at the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Window-system events after translation.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),

    /// Pointer left the window surface.
    PointerLeft,

    Key {
        key: Key,
        state: KeyState,
        /// True for auto-repeat.
        repeat: bool,
    },

    Focused(bool),

    /// Close button or WM_DELETE_WINDOW.
    CloseRequested,
}

impl InputEvent {
    pub fn is_pointer_motion(&self) -> bool {
        matches!(self, InputEvent::PointerMoved(_))
    }

    /// True for a fresh (non-repeat) press of `key`.
    pub fn is_key_press(&self, key: Key) -> bool {
        matches!(
            self,
            InputEvent::Key { key: k, state: KeyState::Pressed, repeat: false } if *k == key
        )
    }
}
