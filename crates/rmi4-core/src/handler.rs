//! Function handler lifecycle trait

use crate::error::Rmi4Result;
use crate::function::{DeviceContext, RmiFunction};

/// What a handler registers with the host: the function number it claims and
/// a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerDescriptor {
    pub function_number: u8,
    pub name: &'static str,
}

/// Outcome of an attention callback that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqReturn {
    /// The interrupt belonged to this function and was serviced.
    Handled,
    /// Nothing to do for this function.
    None,
}

/// Lifecycle hooks the host calls for every instance of a function.
///
/// The host never calls two hooks concurrently for the same instance, but one
/// handler value serves every device, so per-instance state lives behind
/// `&self` (see [`crate::state::StateTable`]).
pub trait FunctionHandler: Send + Sync {
    fn descriptor(&self) -> HandlerDescriptor;

    /// Bind to a newly enumerated function instance.
    fn probe(&self, function: &RmiFunction, ctx: &mut DeviceContext<'_>) -> Rmi4Result<()>;

    /// (Re)apply configuration after probe or a device reset.
    fn config(&self, function: &RmiFunction, ctx: &mut DeviceContext<'_>) -> Rmi4Result<()>;

    /// Service an interrupt the host attributed to this function.
    fn attention(
        &self,
        function: &RmiFunction,
        ctx: &mut DeviceContext<'_>,
    ) -> Rmi4Result<IrqReturn>;

    /// Release whatever probe allocated for this instance.
    fn remove(&self, _function: &RmiFunction) {}
}
