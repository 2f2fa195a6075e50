//! Keyboard input handling

use dvd_core::{InputEvent, Key};

/// Map a `KeyboardEvent.key` value to a core key
pub fn key_from_str(key: &str) -> Key {
    match key {
        "Escape" | "Esc" => Key::Escape,
        " " | "Spacebar" => Key::Space,
        "s" | "S" => Key::S,
        _ => Key::Other,
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> InputEvent {
    InputEvent::KeyUp(key_from_str(key))
}
