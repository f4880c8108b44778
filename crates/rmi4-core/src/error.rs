//! Error types shared by the host contract and function handlers

use crate::function::FunctionKey;
use thiserror::Error;

/// Negative errno values the host driver expects back from a handler.
pub mod errno {
    pub const ENOENT: i32 = -2;
    pub const EIO: i32 = -5;
    pub const ENXIO: i32 = -6;
    pub const ENOMEM: i32 = -12;
    pub const EEXIST: i32 = -17;
    pub const ENODEV: i32 = -19;
    pub const EINVAL: i32 = -22;
}

/// A register read that the bus layer could not complete.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("register read at {address:#06x} failed with code {code}")]
pub struct TransportError {
    pub address: u16,
    pub code: i32,
}

impl TransportError {
    pub fn new(address: u16, code: i32) -> Self {
        Self { address, code }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rmi4Error {
    #[error("no input device found")]
    NoInputSink,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("out of memory while allocating function state")]
    ResourceExhausted,

    #[error("function {0} has not been probed")]
    NotProbed(FunctionKey),

    #[error("no handler registered for function {0:#04x}")]
    UnknownFunction(u8),

    #[error("a handler for function {0:#04x} is already registered")]
    DuplicateHandler(u8),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Rmi4Error {
    /// The negative errno reported to the host for this failure.
    ///
    /// Transport failures pass the bus layer's code through unchanged.
    pub fn errno(&self) -> i32 {
        match self {
            Rmi4Error::NoInputSink => errno::ENXIO,
            Rmi4Error::Transport(e) => e.code,
            Rmi4Error::ResourceExhausted => errno::ENOMEM,
            Rmi4Error::NotProbed(_) => errno::ENODEV,
            Rmi4Error::UnknownFunction(_) => errno::ENOENT,
            Rmi4Error::DuplicateHandler(_) => errno::EEXIST,
            Rmi4Error::InvalidConfig(_) => errno::EINVAL,
        }
    }

    /// True when the host should leave the function inert and carry on
    /// bringing up the rest of the device.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Rmi4Error::NoInputSink)
    }
}

pub type Rmi4Result<T> = Result<T, Rmi4Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::DeviceId;

    #[test]
    fn test_error_display() {
        let err = Rmi4Error::NoInputSink;
        assert_eq!(format!("{}", err), "no input device found");

        let err = Rmi4Error::from(TransportError::new(0x0408, errno::EIO));
        assert_eq!(format!("{}", err), "register read at 0x0408 failed with code -5");

        let err = Rmi4Error::UnknownFunction(0x21);
        assert_eq!(format!("{}", err), "no handler registered for function 0x21");
    }

    #[test]
    fn test_errno_mapping() {
        assert_eq!(Rmi4Error::NoInputSink.errno(), errno::ENXIO);
        assert_eq!(Rmi4Error::ResourceExhausted.errno(), errno::ENOMEM);
        assert_eq!(
            Rmi4Error::Transport(TransportError::new(0, -110)).errno(),
            -110
        );
        let key = FunctionKey::new(DeviceId(1), 0x21);
        assert_eq!(Rmi4Error::NotProbed(key).errno(), errno::ENODEV);
    }

    #[test]
    fn test_only_missing_sink_is_skippable() {
        assert!(Rmi4Error::NoInputSink.is_skippable());
        assert!(!Rmi4Error::ResourceExhausted.is_skippable());
        assert!(!Rmi4Error::Transport(TransportError::new(0, errno::EIO)).is_skippable());
    }
}
