mod controller;

pub use controller::{DragState, InputController, InputEvent, Intent};

use macroquad::prelude::*;

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Remembers where the pointer was last frame so motion can be reported
#[derive(Debug, Default)]
pub struct MouseTracker {
    last: Option<(f32, f32)>,
}

/// Translate this frame's macroquad input state into events.
///
/// Order within a frame is fixed: quit, keys, press, motion, release.
pub fn poll_events(tracker: &mut MouseTracker) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }

    let pressed = get_keys_pressed();
    events.extend(
        order_key_presses(|key| pressed.contains(&key), get_last_key_pressed())
            .into_iter()
            .map(InputEvent::KeyDown),
    );

    let (x, y) = mouse_position();
    if BUTTONS.iter().any(|&button| is_mouse_button_pressed(button)) {
        events.push(InputEvent::MouseDown { x, y });
    }
    if tracker.last != Some((x, y)) {
        events.push(InputEvent::MouseMotion { x, y });
        tracker.last = Some((x, y));
    }
    if BUTTONS.iter().any(|&button| is_mouse_button_released(button)) {
        events.push(InputEvent::MouseUp);
    }

    events
}

/// Bound keys pressed this frame, in a stable order.
///
/// macroquad only reports a set of pressed keys, plus the most recent one.
/// The most recent key goes last so its intent wins; any other bound keys
/// come first in [`Intent::BOUND_KEYS`] order.
pub fn order_key_presses(
    is_pressed: impl Fn(KeyCode) -> bool,
    last: Option<KeyCode>,
) -> Vec<KeyCode> {
    let last = last.filter(|&key| is_pressed(key) && Intent::from_key(key).is_some());

    let mut keys: Vec<KeyCode> = Intent::BOUND_KEYS
        .into_iter()
        .filter(|&key| is_pressed(key) && Some(key) != last)
        .collect();
    keys.extend(last);
    keys
}
