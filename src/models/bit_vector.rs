//! Bit-level view of a single address unit (octet).

use std::fmt;

/// Number of bit positions in one address unit.
pub const UNIT_BITS: u8 = 8;

/// One octet broken out into its eight bit positions.
///
/// Position 0 is the least significant bit, so the weight of position `n` is `2^n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: [bool; UNIT_BITS as usize],
}

impl BitVector {
    /// Break `value` into its bit positions.
    pub fn new(value: u8) -> BitVector {
        let mut bits = [false; UNIT_BITS as usize];
        for (position, bit) in bits.iter_mut().enumerate() {
            *bit = value & (1 << position) != 0;
        }
        BitVector { bits }
    }

    /// Whether the bit at `position` (0..8) is on. Positions outside the unit are off.
    pub fn is_set(&self, position: u8) -> bool {
        self.bits.get(position as usize).copied().unwrap_or(false)
    }

    /// Weight of a bit position, `2^position`. Positions outside the unit weigh 0.
    pub fn weight(position: u8) -> u16 {
        if position < UNIT_BITS {
            1u16 << position
        } else {
            0
        }
    }

    /// Integer value held by this unit, the sum of the weights of every set bit.
    pub fn value(&self) -> u8 {
        let sum: u16 = (0..UNIT_BITS)
            .filter(|position| self.is_set(*position))
            .map(BitVector::weight)
            .sum();
        sum as u8
    }

    /// How many addresses a mask unit with this value still varies over, `255 - value`.
    pub fn variability(&self) -> u8 {
        u8::MAX - self.value()
    }

    pub fn set_count(&self) -> u32 {
        self.bits.iter().filter(|bit| **bit).count() as u32
    }

    pub fn unset_count(&self) -> u32 {
        UNIT_BITS as u32 - self.set_count()
    }
}

impl From<u8> for BitVector {
    fn from(value: u8) -> Self {
        BitVector::new(value)
    }
}

impl fmt::Display for BitVector {
    /// Most significant bit first, e.g. `11000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in (0..UNIT_BITS).rev() {
            f.write_str(if self.is_set(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip_all_units() {
        for value in 0..=u8::MAX {
            let bits = BitVector::new(value);
            assert_eq!(bits.value(), value, "sum of set weights for {value}");
            assert_eq!(bits.set_count(), value.count_ones());
            assert_eq!(bits.unset_count(), value.count_zeros());
        }
    }

    #[test]
    fn test_positions_and_weights() {
        let bits = BitVector::new(0b1100_0001);
        assert!(bits.is_set(0));
        assert!(!bits.is_set(1));
        assert!(bits.is_set(6));
        assert!(bits.is_set(7));
        assert!(!bits.is_set(8));
        assert_eq!(BitVector::weight(0), 1);
        assert_eq!(BitVector::weight(7), 128);
        assert_eq!(BitVector::weight(8), 0);
        assert_eq!(BitVector::weight(20), 0);
    }

    #[test]
    fn test_variability() {
        assert_eq!(BitVector::new(255).variability(), 0);
        assert_eq!(BitVector::new(192).variability(), 63);
        assert_eq!(BitVector::new(0).variability(), 255);
    }

    #[test]
    fn test_display() {
        assert_eq!(BitVector::new(192).to_string(), "11000000");
        assert_eq!(BitVector::new(1).to_string(), "00000001");
    }
}
