//! Property-based tests for the host contract types.

use proptest::prelude::*;
use rmi4_core::mock::MockIrqController;
use rmi4_core::{IrqController, IrqMask, RegisterTransport, mock::MockTransport};

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// from_range must set exactly `count` bits when the range fits the register.
    #[test]
    fn prop_from_range_bit_count(first in 0u32..32, count in 0u32..8) {
        let mask = IrqMask::from_range(first, count);
        let expected = count.min(32 - first);
        prop_assert_eq!(mask.bits().count_ones(), expected);
    }

    /// Enabling the same mask again must not change the enabled set.
    #[test]
    fn prop_set_irq_bits_idempotent(bits in any::<u32>(), repeats in 1usize..5) {
        let mut once = MockIrqController::new();
        once.set_irq_bits(IrqMask::new(bits));

        let mut many = MockIrqController::new();
        for _ in 0..repeats {
            many.set_irq_bits(IrqMask::new(bits));
        }
        prop_assert_eq!(once.enabled, many.enabled);
    }

    /// Reads return what the register map holds and default unmapped
    /// registers to zero.
    #[test]
    fn prop_mock_transport_reads_back(address in 0u16..0xFFF0, value in any::<u8>()) {
        let mut transport = MockTransport::new().with_register(address, value);
        let mut buf = [0xAAu8; 2];
        prop_assert!(transport.read_block(address, &mut buf).is_ok());
        prop_assert_eq!(buf, [value, 0]);
    }
}
