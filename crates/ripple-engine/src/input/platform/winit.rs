use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState, PointerMoveEvent};

/// Converts a winit `WindowEvent` into an `InputEvent`.
///
/// Returns `None` for events the input layer does not model (resize,
/// redraw, scale changes); the runtime handles those itself.
pub(crate) fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved(PointerMoveEvent {
            x: position.x as f32,
            y: position.y as f32,
        })),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::KeyQ) => Key::Q,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(other) => Key::Unknown(other as u32),
        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;
    use winit::keyboard::NativeKeyCode;

    fn device() -> DeviceId {
        // SAFETY: only compared, never passed back to the platform.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn cursor_moved_becomes_pointer_motion() {
        let event = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(3.0, 4.0),
        };
        let translated = translate_window_event(&event);
        assert_eq!(
            translated,
            Some(InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }))
        );
        assert!(translated.is_some_and(|ev| ev.is_pointer_motion()));
    }

    #[test]
    fn cursor_left_becomes_pointer_left() {
        let event = WindowEvent::CursorLeft { device_id: device() };
        assert_eq!(translate_window_event(&event), Some(InputEvent::PointerLeft));
    }

    #[test]
    fn window_lifecycle_events() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::CloseRequested)
        );
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
    }

    #[test]
    fn runtime_only_events_are_not_translated() {
        let resized = WindowEvent::Resized(PhysicalSize::new(600, 400));
        assert_eq!(translate_window_event(&resized), None);
        assert_eq!(translate_window_event(&WindowEvent::RedrawRequested), None);
    }

    #[test]
    fn known_keys_map() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Q);
    }

    #[test]
    fn unidentified_is_unknown_zero() {
        assert_eq!(
            map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Unknown(0)
        );
    }
}
