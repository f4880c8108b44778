//! Interrupt source masks and the controller that enables them

use std::fmt;

/// Bits of the device's interrupt status register owned by one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IrqMask(u32);

impl IrqMask {
    pub const EMPTY: IrqMask = IrqMask(0);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Mask covering `count` consecutive sources starting at bit `first`.
    ///
    /// Bits past the 32nd source are dropped.
    pub fn from_range(first: u32, count: u32) -> Self {
        let bits = (first..first.saturating_add(count))
            .take_while(|bit| *bit < u32::BITS)
            .fold(0u32, |acc, bit| acc | (1u32 << bit));
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: IrqMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: IrqMask) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: IrqMask) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: IrqMask) -> Self {
        Self(self.0 & !other.0)
    }
}

impl fmt::Display for IrqMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// Host hook that unmasks a function's interrupt sources.
///
/// Enabling is cumulative: setting bits that are already enabled is a no-op.
pub trait IrqController: Send {
    fn set_irq_bits(&mut self, mask: IrqMask);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_range() {
        assert_eq!(IrqMask::from_range(0, 1).bits(), 0b1);
        assert_eq!(IrqMask::from_range(2, 3).bits(), 0b11100);
        assert!(IrqMask::from_range(5, 0).is_empty());
    }

    #[test]
    fn test_from_range_clamps_to_register_width() {
        assert_eq!(IrqMask::from_range(31, 4).bits(), 1 << 31);
        assert!(IrqMask::from_range(40, 2).is_empty());
    }

    #[test]
    fn test_set_operations() {
        let a = IrqMask::new(0b0011);
        let b = IrqMask::new(0b0110);
        assert_eq!(a.union(b).bits(), 0b0111);
        assert_eq!(a.difference(b).bits(), 0b0001);
        assert!(a.intersects(b));
        assert!(a.union(b).contains(a));
        assert!(!a.contains(b));
    }
}
