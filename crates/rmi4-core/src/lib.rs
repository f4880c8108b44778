//! Host contract for RMI4 function handlers
//!
//! An RMI4 touch controller exposes a set of numbered "functions" (F01 device
//! control, F11/F12 2D sensing, F21 force sensing, ...). The host driver walks
//! the page description table, then hands each function to the handler that
//! claims its number. This crate describes what a handler can see of the host:
//!
//! - [`transport`]: register block reads over the underlying bus
//! - [`input`]: the input sink shared by every function of one device
//! - [`irq`]: interrupt masks and the controller that enables them
//! - [`function`]: function descriptors and per-call device context
//! - [`handler`]: the `probe` / `config` / `attention` lifecycle trait
//! - [`registry`]: dispatch of lifecycle calls by function number
//! - [`state`]: per-instance state table keyed by device and function
//! - [`mock`]: in-memory collaborators for tests

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod function;
pub mod handler;
pub mod input;
pub mod irq;
pub mod mock;
pub mod registry;
pub mod state;
pub mod transport;

pub use error::*;
pub use function::*;
pub use handler::*;
pub use input::*;
pub use irq::*;
pub use registry::*;
pub use state::*;
pub use transport::*;
