//! Input sink shared by the functions of one device, and the event codes
//! handlers report through it

use parking_lot::Mutex;
use std::sync::Arc;

/// Linux input event codes used by RMI4 function handlers.
pub mod codes {
    pub const EV_KEY: u16 = 0x01;

    pub const KEY_RESERVED: u16 = 0;
    pub const BTN_LEFT: u16 = 0x110;
    pub const BTN_RIGHT: u16 = 0x111;
    pub const KEY_MAX: u16 = 0x2ff;

    pub const INPUT_PROP_BUTTONPAD: u16 = 0x02;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Key,
}

impl EventType {
    pub fn code(self) -> u16 {
        match self {
            EventType::Key => codes::EV_KEY,
        }
    }
}

/// Device properties advertised alongside the capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputProperty {
    /// Touchpad whose whole surface is a physical button.
    ButtonPad,
}

impl InputProperty {
    pub fn code(self) -> u16 {
        match self {
            InputProperty::ButtonPad => codes::INPUT_PROP_BUTTONPAD,
        }
    }
}

/// Event-reporting endpoint of the generic input subsystem.
///
/// Deduplication and frame synchronisation are the sink's business; handlers
/// report levels as they sample them.
pub trait InputSink: Send {
    fn set_capability(&mut self, event_type: EventType, code: u16);

    fn set_property(&mut self, property: InputProperty);

    /// Install the remappable keycode table. Its length is the keycode max.
    fn set_keycode_table(&mut self, keycodes: &[u16]);

    fn report_key(&mut self, code: u16, pressed: bool);
}

/// Non-owning handle to a device's input sink, cloned into every function
/// that reports through it.
pub type SharedInputSink = Arc<Mutex<dyn InputSink>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_codes() {
        assert_eq!(EventType::Key.code(), 0x01);
        assert_eq!(InputProperty::ButtonPad.code(), 0x02);
        assert_eq!(codes::BTN_LEFT, 0x110);
    }
}
