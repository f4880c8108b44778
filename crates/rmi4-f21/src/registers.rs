//! Force-click data register access

use super::{DATA_REGS_MAX_SIZE, FORCE_CLICK_OFFSET};
use rmi4_core::{RegisterTransport, TransportError, errno};

/// Raw copy of the F21 data registers from the last attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct F21DataRegisters {
    raw: [u8; DATA_REGS_MAX_SIZE],
}

impl F21DataRegisters {
    pub fn new(force_click: u8) -> Self {
        Self { raw: [force_click] }
    }

    pub fn force_click(&self) -> u8 {
        let [value] = self.raw;
        value
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }
}

/// Address of the force-click register, or `None` past the 16-bit register space.
pub fn force_click_address(data_base_addr: u16, offset: u16) -> Option<u16> {
    data_base_addr.checked_add(offset)
}

/// Read the force-click byte at `data_base_addr + FORCE_CLICK_OFFSET`.
pub fn read_force_click_byte(
    transport: &mut dyn RegisterTransport,
    data_base_addr: u16,
) -> Result<u8, TransportError> {
    read_force_click_byte_at(transport, data_base_addr, FORCE_CLICK_OFFSET)
}

/// Read the force-click byte at an explicit offset from the data base.
///
/// Exactly one byte is read; an address past `0xFFFF` fails with `-EINVAL`
/// without touching the bus.
pub fn read_force_click_byte_at(
    transport: &mut dyn RegisterTransport,
    data_base_addr: u16,
    offset: u16,
) -> Result<u8, TransportError> {
    let address = force_click_address(data_base_addr, offset)
        .ok_or(TransportError::new(data_base_addr, errno::EINVAL))?;

    let mut regs = F21DataRegisters::default();
    transport.read_block(address, &mut regs.raw)?;
    Ok(regs.force_click())
}
