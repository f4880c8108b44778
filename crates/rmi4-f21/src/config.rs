//! Handler configuration

use super::FORCE_CLICK_OFFSET;
use rmi4_core::Rmi4Error;
use rmi4_core::codes::{BTN_LEFT, KEY_MAX, KEY_RESERVED};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum F21ConfigError {
    #[error("key code {0:#x} is reserved")]
    ReservedKeyCode(u16),

    #[error("key code {0:#x} exceeds KEY_MAX")]
    KeyCodeOutOfRange(u16),

    #[error("failed to parse F21 config: {0}")]
    Parse(String),
}

impl From<F21ConfigError> for Rmi4Error {
    fn from(e: F21ConfigError) -> Self {
        Rmi4Error::InvalidConfig(e.to_string())
    }
}

/// Overrides for boards whose firmware deviates from the reference layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct F21Config {
    /// Key reported for the force-click level.
    pub key_code: u16,
    /// Offset of the force-click register from the data base address.
    pub force_click_offset: u16,
}

impl Default for F21Config {
    fn default() -> Self {
        Self {
            key_code: BTN_LEFT,
            force_click_offset: FORCE_CLICK_OFFSET,
        }
    }
}

impl F21Config {
    pub fn from_json(json: &str) -> Result<Self, F21ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| F21ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), F21ConfigError> {
        if self.key_code == KEY_RESERVED {
            return Err(F21ConfigError::ReservedKeyCode(self.key_code));
        }
        if self.key_code > KEY_MAX {
            return Err(F21ConfigError::KeyCodeOutOfRange(self.key_code));
        }
        Ok(())
    }
}
