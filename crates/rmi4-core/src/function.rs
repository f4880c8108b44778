//! Function descriptors and the context threaded through handler callbacks

use crate::input::SharedInputSink;
use crate::irq::{IrqController, IrqMask};
use crate::transport::RegisterTransport;
use std::fmt;

/// Opaque identifier of one physical RMI4 device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rmi4-{:02}", self.0)
    }
}

/// Identifies one function instance: a function number on a given device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionKey {
    pub device: DeviceId,
    pub function_number: u8,
}

impl FunctionKey {
    pub fn new(device: DeviceId, function_number: u8) -> Self {
        Self {
            device,
            function_number,
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.fn{:02x}", self.device, self.function_number)
    }
}

/// A page description table entry as decoded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionDescriptor {
    pub query_base_addr: u16,
    pub command_base_addr: u16,
    pub control_base_addr: u16,
    pub data_base_addr: u16,
    pub interrupt_source_count: u8,
    pub function_number: u8,
    pub function_version: u8,
}

impl FunctionDescriptor {
    pub fn new(function_number: u8, data_base_addr: u16) -> Self {
        Self {
            function_number,
            data_base_addr,
            interrupt_source_count: 1,
            ..Self::default()
        }
    }
}

/// A function instance as handed to a handler: where it lives and which
/// interrupt status bits belong to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmiFunction {
    pub device: DeviceId,
    pub descriptor: FunctionDescriptor,
    pub irq_mask: IrqMask,
}

impl RmiFunction {
    pub fn new(device: DeviceId, descriptor: FunctionDescriptor, irq_mask: IrqMask) -> Self {
        Self {
            device,
            descriptor,
            irq_mask,
        }
    }

    pub fn key(&self) -> FunctionKey {
        FunctionKey::new(self.device, self.descriptor.function_number)
    }

    pub fn function_number(&self) -> u8 {
        self.descriptor.function_number
    }
}

/// Device-wide state shared by sibling functions.
///
/// The input sink is created by the host (usually while probing the 2D sensing
/// function) and may be absent on devices that report through another path.
#[derive(Clone, Default)]
pub struct DriverData {
    pub input: Option<SharedInputSink>,
}

impl DriverData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: SharedInputSink) -> Self {
        Self { input: Some(input) }
    }

    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }
}

impl fmt::Debug for DriverData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverData")
            .field("has_input", &self.has_input())
            .finish()
    }
}

/// Host collaborators borrowed for the duration of one callback.
pub struct DeviceContext<'a> {
    pub transport: &'a mut dyn RegisterTransport,
    pub irq: &'a mut dyn IrqController,
    pub driver_data: &'a DriverData,
}

impl<'a> DeviceContext<'a> {
    pub fn new(
        transport: &'a mut dyn RegisterTransport,
        irq: &'a mut dyn IrqController,
        driver_data: &'a DriverData,
    ) -> Self {
        Self {
            transport,
            irq,
            driver_data,
        }
    }
}
