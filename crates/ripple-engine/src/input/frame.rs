use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Input that arrived since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
