//! F21 lifecycle: probe, config and attention

use super::{
    F21_FUNCTION_NUMBER, F21_HANDLER_NAME, F21Config, F21DataRegisters,
    FORCEPAD_BUTTON_COUNT, decode, emit, read_force_click_byte_at,
};
use rmi4_core::{
    DeviceContext, EventType, FunctionHandler, HandlerDescriptor, InputProperty, IrqReturn,
    Rmi4Error, Rmi4Result, RmiFunction, SharedInputSink, StateTable,
};
use tracing::{debug, error, info, trace};

/// Per-instance state allocated at probe time.
pub struct F21Data {
    pub data_regs: F21DataRegisters,
    pub input: SharedInputSink,
    pub key_code: u16,
}

impl std::fmt::Debug for F21Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("F21Data")
            .field("data_regs", &self.data_regs)
            .field("key_code", &self.key_code)
            .finish_non_exhaustive()
    }
}

/// Force-click handler. One value serves every device the host enumerates.
pub struct F21Handler {
    config: F21Config,
    instances: StateTable<F21Data>,
}

impl F21Handler {
    pub fn new() -> Self {
        Self {
            config: F21Config::default(),
            instances: StateTable::new(),
        }
    }

    pub fn with_config(config: F21Config) -> Rmi4Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            instances: StateTable::new(),
        })
    }

    /// Handler that binds at most `max_instances` function instances; probes
    /// past that fail with [`Rmi4Error::ResourceExhausted`].
    pub fn with_capacity(config: F21Config, max_instances: usize) -> Rmi4Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            instances: StateTable::bounded(max_instances),
        })
    }

    pub fn settings(&self) -> &F21Config {
        &self.config
    }

    pub fn is_probed(&self, function: &RmiFunction) -> bool {
        self.instances.contains(&function.key())
    }

    /// Register data sampled by the last successful attention.
    pub fn last_sample(&self, function: &RmiFunction) -> Option<F21DataRegisters> {
        self.instances.with(&function.key(), |f21| f21.data_regs)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Drop every instance belonging to a device that went away.
    pub fn release_device(&self, device: rmi4_core::DeviceId) -> usize {
        self.instances.release_device(device)
    }

    /// Advertise the single forcepad button on the shared sink.
    fn initialize(&self, input: &SharedInputSink) -> u16 {
        let key_code = self.config.key_code;
        let keycodes = [key_code; FORCEPAD_BUTTON_COUNT];

        let mut sink = input.lock();
        sink.set_capability(EventType::Key, key_code);
        sink.set_keycode_table(&keycodes);
        sink.set_property(InputProperty::ButtonPad);
        key_code
    }
}

impl Default for F21Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionHandler for F21Handler {
    fn descriptor(&self) -> HandlerDescriptor {
        HandlerDescriptor {
            function_number: F21_FUNCTION_NUMBER,
            name: F21_HANDLER_NAME,
        }
    }

    fn probe(&self, function: &RmiFunction, ctx: &mut DeviceContext<'_>) -> Rmi4Result<()> {
        let Some(input) = ctx.driver_data.input.clone() else {
            info!(function = %function.key(), "f21: no input device found, ignoring");
            return Err(Rmi4Error::NoInputSink);
        };

        // Claim the state slot before the shared sink is touched, so a failed
        // probe leaves the sink as it was.
        self.instances.reserve(&function.key())?;

        let key_code = self.initialize(&input);
        let f21 = F21Data {
            data_regs: F21DataRegisters::default(),
            input,
            key_code,
        };

        if self.instances.insert(function.key(), f21)?.is_some() {
            debug!(function = %function.key(), "f21: replaced state from earlier probe");
        }
        debug!(
            function = %function.key(),
            key_code,
            data_base = function.descriptor.data_base_addr,
            "f21: probed"
        );
        Ok(())
    }

    fn config(&self, function: &RmiFunction, ctx: &mut DeviceContext<'_>) -> Rmi4Result<()> {
        if !self.instances.contains(&function.key()) {
            return Ok(());
        }

        ctx.irq.set_irq_bits(function.irq_mask);
        debug!(function = %function.key(), irq_mask = %function.irq_mask, "f21: irq enabled");
        Ok(())
    }

    fn attention(
        &self,
        function: &RmiFunction,
        ctx: &mut DeviceContext<'_>,
    ) -> Rmi4Result<IrqReturn> {
        let key = function.key();
        let Some((input, key_code)) = self
            .instances
            .with(&key, |f21| (f21.input.clone(), f21.key_code))
        else {
            return Err(Rmi4Error::NotProbed(key));
        };

        let force_click = read_force_click_byte_at(
            &mut *ctx.transport,
            function.descriptor.data_base_addr,
            self.config.force_click_offset,
        )
        .map_err(|e| {
            error!(
                function = %key,
                address = e.address,
                code = e.code,
                "f21: failed to read data registers"
            );
            Rmi4Error::Transport(e)
        })?;

        self.instances.with(&key, |f21| {
            f21.data_regs = F21DataRegisters::new(force_click);
        });

        let pressed = decode(force_click);
        trace!(function = %key, force_click, pressed, "f21: sample");
        emit(&input, key_code, pressed);
        Ok(IrqReturn::Handled)
    }

    fn remove(&self, function: &RmiFunction) {
        if self.instances.remove(&function.key()).is_some() {
            debug!(function = %function.key(), "f21: removed");
        }
    }
}
