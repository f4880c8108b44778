//! RMI4 F21 force-click function handler
//!
//! F21 reports the forcepad's "hard press" state. Clickpads without a
//! mechanical switch use it as their only button: bit 0 of the force-click data
//! register goes high while the surface is pressed past the click threshold,
//! and the handler forwards that level as `BTN_LEFT` on the device's shared
//! input sink.
//!
//! ## Layout
//! - [`registers`]: reads the force-click data register
//! - [`decode`]: maps the register byte to a pressed/released level
//! - [`emitter`]: reports the level on the input sink
//! - [`handler`]: the probe / config / attention lifecycle
//! - [`config`]: key code and register offset overrides

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod decode;
pub mod emitter;
pub mod handler;
pub mod registers;

pub use config::*;
pub use decode::*;
pub use emitter::*;
pub use handler::*;
pub use registers::*;

/// Function number claimed by this handler.
pub const F21_FUNCTION_NUMBER: u8 = 0x21;

/// Driver name registered with the host.
pub const F21_HANDLER_NAME: &str = "rmi4_f21";

/// Offset of the force-click register from the function's data base address.
pub const FORCE_CLICK_OFFSET: u16 = 8;

/// Force-click bit within the data register.
pub const FORCE_CLICK_MASK: u8 = 0x01;

pub const DATA_REGS_MAX_SIZE: usize = 1;

pub const FORCEPAD_BUTTON_COUNT: usize = 1;
