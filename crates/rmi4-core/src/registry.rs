//! Dispatch of lifecycle calls to handlers by function number

use crate::error::{Rmi4Error, Rmi4Result};
use crate::function::{DeviceContext, RmiFunction};
use crate::handler::{FunctionHandler, HandlerDescriptor, IrqReturn};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of offering a function instance to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Bound,
    /// The handler declined this device; the function stays inert.
    Skipped,
    /// No handler claims this function number.
    Unsupported,
}

/// Function handlers keyed by the function number they claim.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<u8, Arc<dyn FunctionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn FunctionHandler>) -> Rmi4Result<()> {
        let HandlerDescriptor {
            function_number,
            name,
        } = handler.descriptor();
        if self.handlers.contains_key(&function_number) {
            return Err(Rmi4Error::DuplicateHandler(function_number));
        }
        debug!(function = function_number, name, "registered function handler");
        self.handlers.insert(function_number, handler);
        Ok(())
    }

    pub fn get(&self, function_number: u8) -> Option<&Arc<dyn FunctionHandler>> {
        self.handlers.get(&function_number)
    }

    pub fn contains(&self, function_number: u8) -> bool {
        self.handlers.contains_key(&function_number)
    }

    pub fn function_numbers(&self) -> Vec<u8> {
        self.handlers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn handler_for(&self, function: &RmiFunction) -> Rmi4Result<&Arc<dyn FunctionHandler>> {
        self.get(function.function_number())
            .ok_or(Rmi4Error::UnknownFunction(function.function_number()))
    }

    /// Offer a function instance to its handler.
    ///
    /// A handler declining the device is not an error for the rest of device
    /// bring-up; any other probe failure is.
    pub fn probe(
        &self,
        function: &RmiFunction,
        ctx: &mut DeviceContext<'_>,
    ) -> Rmi4Result<ProbeOutcome> {
        let Some(handler) = self.get(function.function_number()) else {
            debug!(function = %function.key(), "no handler for function");
            return Ok(ProbeOutcome::Unsupported);
        };

        match handler.probe(function, ctx) {
            Ok(()) => Ok(ProbeOutcome::Bound),
            Err(e) if e.is_skippable() => {
                info!(function = %function.key(), error = %e, "function skipped");
                Ok(ProbeOutcome::Skipped)
            }
            Err(e) => Err(e),
        }
    }

    pub fn config(&self, function: &RmiFunction, ctx: &mut DeviceContext<'_>) -> Rmi4Result<()> {
        self.handler_for(function)?.config(function, ctx)
    }

    pub fn attention(
        &self,
        function: &RmiFunction,
        ctx: &mut DeviceContext<'_>,
    ) -> Rmi4Result<IrqReturn> {
        self.handler_for(function)?.attention(function, ctx)
    }

    pub fn remove(&self, function: &RmiFunction) {
        if let Some(handler) = self.get(function.function_number()) {
            handler.remove(function);
        }
    }
}
