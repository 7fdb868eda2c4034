//! Keyboard decoding and intent classification.
//!
//! Hosts deliver keys in whatever form they have: DOM `KeyboardEvent.key`
//! names, legacy numeric key codes, or (with the `winit` feature) winit
//! logical keys. All of them decode to [`Key`], and [`KeyIntent`] turns a key
//! into what a composite widget should do with it.
//!
//! | Key            | Intent     | Default action suppressed |
//! |----------------|------------|---------------------------|
//! | Space, Enter   | `Activate` | yes                       |
//! | ArrowDown      | `Next`     | yes                       |
//! | ArrowUp        | `Previous` | yes                       |
//! | Home           | `First`    | yes                       |
//! | End            | `Last`     | no                        |

use super::events::Key;

impl Key {
    /// Decode a DOM `KeyboardEvent.key` value.
    ///
    /// Matching is exact, as in the DOM. Legacy names (`"Down"`, `"Spacebar"`)
    /// emitted by older engines are accepted as well.
    pub fn from_dom_key(name: &str) -> Key {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Unidentified,
        }
    }

    /// Decode a legacy `KeyboardEvent.keyCode` value.
    pub fn from_key_code(code: u32) -> Key {
        match code {
            8 => Key::Backspace,
            9 => Key::Tab,
            13 => Key::Enter,
            27 => Key::Escape,
            32 => Key::Space,
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::ArrowLeft,
            38 => Key::ArrowUp,
            39 => Key::ArrowRight,
            40 => Key::ArrowDown,
            46 => Key::Delete,
            _ => Key::Unidentified,
        }
    }
}

/// What a key asks a roving-focus composite to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// Activate the focused control (toggle its item).
    Activate,
    /// Move focus to the following control, wrapping.
    Next,
    /// Move focus to the preceding control, wrapping.
    Previous,
    /// Move focus to the first control.
    First,
    /// Move focus to the last control.
    Last,
}

impl KeyIntent {
    /// Classify a key. Returns `None` for keys with no intent.
    pub fn from_key(key: Key) -> Option<KeyIntent> {
        match key {
            Key::Space | Key::Enter => Some(KeyIntent::Activate),
            Key::ArrowDown => Some(KeyIntent::Next),
            Key::ArrowUp => Some(KeyIntent::Previous),
            Key::Home => Some(KeyIntent::First),
            Key::End => Some(KeyIntent::Last),
            _ => None,
        }
    }

    /// Whether handling this intent suppresses the host's default action.
    ///
    /// Every intent except `Last` suppresses it; End keeps the host's
    /// default action.
    pub fn prevents_default(self) -> bool {
        !matches!(self, KeyIntent::Last)
    }

    /// Whether the intent moves focus (as opposed to changing selection).
    pub fn is_navigation(self) -> bool {
        !matches!(self, KeyIntent::Activate)
    }
}

/// Conversion from winit keyboard input.
#[cfg(feature = "winit")]
pub mod platform {
    use winit::event::{ElementState, Modifiers};
    use winit::keyboard::{Key as WinitKey, NamedKey};

    use crate::widget::events::{Key, KeyPressEvent, KeyboardModifiers};

    /// Converts a winit logical key to a widget [`Key`].
    pub fn from_winit_key(key: &WinitKey) -> Key {
        match key {
            WinitKey::Named(named) => from_winit_named_key(named),
            WinitKey::Character(c) if c.as_str() == " " => Key::Space,
            WinitKey::Character(_) | WinitKey::Unidentified(_) | WinitKey::Dead(_) => {
                Key::Unidentified
            }
        }
    }

    fn from_winit_named_key(key: &NamedKey) -> Key {
        match key {
            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,
            NamedKey::Home => Key::Home,
            NamedKey::End => Key::End,
            NamedKey::PageUp => Key::PageUp,
            NamedKey::PageDown => Key::PageDown,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Delete => Key::Delete,
            NamedKey::Enter => Key::Enter,
            NamedKey::Tab => Key::Tab,
            NamedKey::Space => Key::Space,
            NamedKey::Escape => Key::Escape,
            _ => Key::Unidentified,
        }
    }

    /// Converts winit modifiers to [`KeyboardModifiers`].
    pub fn from_winit_modifiers(modifiers: &Modifiers) -> KeyboardModifiers {
        let state = modifiers.state();
        KeyboardModifiers {
            shift: state.shift_key(),
            control: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }

    /// Tracks modifier state across winit events and builds key presses.
    #[derive(Debug, Default)]
    pub struct KeyboardInputHandler {
        modifiers: KeyboardModifiers,
    }

    impl KeyboardInputHandler {
        /// Creates a handler with no modifiers pressed.
        pub fn new() -> Self {
            Self::default()
        }

        /// Current modifier state.
        pub fn modifiers(&self) -> KeyboardModifiers {
            self.modifiers
        }

        /// Updates the modifier state from a winit `ModifiersChanged` event.
        pub fn update_modifiers(&mut self, modifiers: &Modifiers) {
            self.modifiers = from_winit_modifiers(modifiers);
        }

        /// Builds a key press for pressed keys; releases yield `None`.
        pub fn key_press(
            &self,
            logical_key: &WinitKey,
            state: ElementState,
            is_repeat: bool,
        ) -> Option<KeyPressEvent> {
            match state {
                ElementState::Pressed => Some(KeyPressEvent::new(
                    from_winit_key(logical_key),
                    self.modifiers,
                    is_repeat,
                )),
                ElementState::Released => None,
            }
        }
    }

}
