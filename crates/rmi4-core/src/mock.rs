//! In-memory host collaborators for exercising function handlers

use crate::error::{TransportError, errno};
use crate::input::{EventType, InputProperty, InputSink, SharedInputSink};
use crate::irq::{IrqController, IrqMask};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Register map backed transport with failure injection.
#[derive(Debug, Default)]
pub struct MockTransport {
    registers: HashMap<u16, u8>,
    failure: Option<i32>,
    reads: Vec<(u16, usize)>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_register(mut self, address: u16, value: u8) -> Self {
        self.set_register(address, value);
        self
    }

    pub fn set_register(&mut self, address: u16, value: u8) {
        self.registers.insert(address, value);
    }

    /// Make every following read fail with `code` until cleared.
    pub fn fail_with(&mut self, code: i32) {
        self.failure = Some(code);
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    /// `(address, length)` of every read attempted, failed ones included.
    pub fn reads(&self) -> &[(u16, usize)] {
        &self.reads
    }
}

impl crate::transport::RegisterTransport for MockTransport {
    fn read_block(&mut self, address: u16, buf: &mut [u8]) -> Result<(), TransportError> {
        self.reads.push((address, buf.len()));
        if let Some(code) = self.failure {
            return Err(TransportError::new(address, code));
        }

        for (offset, byte) in buf.iter_mut().enumerate() {
            let register = u16::try_from(offset)
                .ok()
                .and_then(|offset| address.checked_add(offset))
                .ok_or(TransportError::new(address, errno::EINVAL))?;
            *byte = self.registers.get(&register).copied().unwrap_or(0);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: u16,
    pub pressed: bool,
}

/// Input sink that records everything reported to it.
#[derive(Debug, Default)]
pub struct RecordingInputSink {
    pub capabilities: Vec<(EventType, u16)>,
    pub properties: Vec<InputProperty>,
    pub keycode_table: Vec<u16>,
    pub events: Vec<KeyEvent>,
}

impl RecordingInputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recording sink plus the type-erased handle functions report through.
    pub fn shared() -> (Arc<Mutex<RecordingInputSink>>, SharedInputSink) {
        let sink = Arc::new(Mutex::new(Self::new()));
        let handle: SharedInputSink = sink.clone();
        (sink, handle)
    }

    pub fn keycode_max(&self) -> usize {
        self.keycode_table.len()
    }
}

impl InputSink for RecordingInputSink {
    fn set_capability(&mut self, event_type: EventType, code: u16) {
        self.capabilities.push((event_type, code));
    }

    fn set_property(&mut self, property: InputProperty) {
        self.properties.push(property);
    }

    fn set_keycode_table(&mut self, keycodes: &[u16]) {
        self.keycode_table = keycodes.to_vec();
    }

    fn report_key(&mut self, code: u16, pressed: bool) {
        self.events.push(KeyEvent { code, pressed });
    }
}

/// Interrupt controller that accumulates enabled bits.
#[derive(Debug, Default)]
pub struct MockIrqController {
    pub enabled: IrqMask,
    pub calls: usize,
}

impl MockIrqController {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IrqController for MockIrqController {
    fn set_irq_bits(&mut self, mask: IrqMask) {
        self.enabled = self.enabled.union(mask);
        self.calls = self.calls.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RegisterTransport;

    #[test]
    fn test_mock_transport_reads_map() -> Result<(), TransportError> {
        let mut transport = MockTransport::new()
            .with_register(0x10, 0xAA)
            .with_register(0x11, 0xBB);

        let mut buf = [0u8; 3];
        transport.read_block(0x10, &mut buf)?;
        assert_eq!(buf, [0xAA, 0xBB, 0x00]);
        assert_eq!(transport.reads(), [(0x10u16, 3usize)].as_slice());
        Ok(())
    }

    #[test]
    fn test_mock_transport_failure() {
        let mut transport = MockTransport::new().with_register(0x10, 0xAA);
        transport.fail_with(errno::EIO);

        let result = transport.read_u8(0x10);
        assert_eq!(result, Err(TransportError::new(0x10, errno::EIO)));
        assert_eq!(transport.reads().len(), 1);

        transport.clear_failure();
        assert_eq!(transport.read_u8(0x10), Ok(0xAA));
    }

    #[test]
    fn test_recording_sink_shared_handle() {
        let (sink, handle) = RecordingInputSink::shared();
        handle.lock().report_key(0x110, true);
        assert_eq!(
            sink.lock().events,
            vec![KeyEvent {
                code: 0x110,
                pressed: true
            }]
        );
    }

    #[test]
    fn test_irq_controller_accumulates() {
        let mut irq = MockIrqController::new();
        irq.set_irq_bits(IrqMask::new(0b01));
        irq.set_irq_bits(IrqMask::new(0b10));
        assert_eq!(irq.enabled.bits(), 0b11);
        assert_eq!(irq.calls, 2);
    }
}
