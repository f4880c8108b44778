//! Force-click bit decoding

use super::FORCE_CLICK_MASK;

/// True when the force-click bit is set. Every byte value is valid input.
pub fn decode(force_click: u8) -> bool {
    force_click & FORCE_CLICK_MASK != 0
}

/// Named view of the sampled button level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceClickState {
    #[default]
    Released,
    Pressed,
}

impl ForceClickState {
    pub fn from_register(force_click: u8) -> Self {
        decode(force_click).into()
    }

    pub fn is_pressed(self) -> bool {
        self == ForceClickState::Pressed
    }
}

impl From<bool> for ForceClickState {
    fn from(pressed: bool) -> Self {
        if pressed {
            ForceClickState::Pressed
        } else {
            ForceClickState::Released
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bit_zero_only() {
        assert!(!decode(0x00));
        assert!(decode(0x01));
        assert!(!decode(0xFE));
        assert!(decode(0xFF));
        assert!(!decode(0x80));
    }

    #[test]
    fn test_state_from_register() {
        assert_eq!(ForceClickState::from_register(0x03), ForceClickState::Pressed);
        assert_eq!(ForceClickState::from_register(0x02), ForceClickState::Released);
        assert!(ForceClickState::Pressed.is_pressed());
        assert_eq!(ForceClickState::default(), ForceClickState::Released);
    }
}
