use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, PointerMoveEvent};

/// Accumulated input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Last pointer position in physical pixels; `None` while outside.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set once the first pointer-motion event has been seen.
    pub motion_seen: bool,

    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Folds `ev` into the state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                self.motion_seen = true;
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::CloseRequested => {}
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn motion_tracks_position_and_flag() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert!(!state.motion_seen);

        state.apply_event(&mut frame, moved(10.0, 20.0));
        state.apply_event(&mut frame, moved(11.0, 21.0));

        assert!(state.motion_seen);
        assert_eq!(state.pointer_pos, Some((11.0, 21.0)));
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn pointer_left_clears_position_but_not_flag() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, moved(1.0, 1.0));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
        assert!(state.motion_seen);
    }

    #[test]
    fn held_key_reports_press_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        assert!(state.key_down(Key::Escape));
        assert!(frame.keys_pressed.is_empty());

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));
        assert!(!state.key_down(Key::Escape));
        assert!(frame.keys_released.contains(&Key::Escape));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Q, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn key_press_helper_ignores_repeat() {
        let repeat = InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, repeat: true };
        assert!(!repeat.is_key_press(Key::Escape));
        assert!(key(Key::Escape, KeyState::Pressed).is_key_press(Key::Escape));
        assert!(!key(Key::Escape, KeyState::Released).is_key_press(Key::Escape));
    }
}
