//! Register transport consumed by function handlers

use crate::error::TransportError;

/// Block reads over the register-addressed bus (I2C, SMBus or SPI).
///
/// Reads are synchronous and may sleep on the underlying bus. Retries and
/// timeouts belong to the implementation, not to callers.
pub trait RegisterTransport: Send {
    /// Fill `buf` with `buf.len()` bytes starting at `address`.
    fn read_block(&mut self, address: u16, buf: &mut [u8]) -> Result<(), TransportError>;

    /// Read a single register.
    fn read_u8(&mut self, address: u16) -> Result<u8, TransportError> {
        let mut buf = [0u8; 1];
        self.read_block(address, &mut buf)?;
        let [value] = buf;
        Ok(value)
    }
}
