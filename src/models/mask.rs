//! Subnet and wildcard mask models.

use super::BitVector;
use crate::error::{SubnetError, SubnetResult};
use crate::processing::{
    check_prefix, complement, mask_to_prefix, prefix_to_wildcard, total_addresses, UNITS,
};
use itertools::Itertools;
use std::fmt;
use std::net::Ipv4Addr;

fn dotted(units: &[u8; UNITS]) -> String {
    units.iter().join(".")
}

/// Host-bit companion of a [`SubnetMask`]: `wildcard[i] == 255 - mask[i]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WildcardMask {
    units: [u8; UNITS],
}

impl WildcardMask {
    /// Complement subnet mask units into a wildcard.
    pub fn from_mask_units(mask: [u8; UNITS]) -> WildcardMask {
        WildcardMask {
            units: complement(mask),
        }
    }

    /// Wrap units that already hold wildcard values.
    pub fn from_wildcard_units(units: [u8; UNITS]) -> WildcardMask {
        WildcardMask { units }
    }

    pub fn octets(&self) -> [u8; UNITS] {
        self.units
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.units)
    }
}

impl fmt::Display for WildcardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dotted(&self.units))
    }
}

/// The single mask unit where the prefix boundary falls inside the unit.
///
/// Only exists when the prefix is not a multiple of 8.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LastUsedUnit {
    index: usize,
    value: u8,
    network_bits: u8,
}

impl LastUsedUnit {
    /// 0-based unit index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based unit position, as written in dotted notation.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Mask value of the unit, e.g. 192 for /26.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Network bits inside this unit (1..=7).
    pub fn network_bits(&self) -> u8 {
        self.network_bits
    }
}

/// IPv4 subnet mask with its derived prefix, wildcard and address count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    units: [u8; UNITS],
    wildcard: WildcardMask,
    prefix: u8,
    total_addresses: u64,
}

impl SubnetMask {
    /// Build the mask for a prefix length in `0..=32`.
    pub fn from_prefix(prefix: u8) -> SubnetResult<SubnetMask> {
        let prefix = check_prefix(prefix)?;
        let wildcard = WildcardMask::from_wildcard_units(prefix_to_wildcard(prefix)?);
        Ok(SubnetMask {
            units: complement(wildcard.octets()),
            wildcard,
            prefix,
            total_addresses: total_addresses(prefix)?,
        })
    }

    /// Build the mask from dotted units, rejecting non-contiguous masks.
    pub fn from_octets(units: [u8; UNITS]) -> SubnetResult<SubnetMask> {
        let prefix = mask_to_prefix(units)?;
        Ok(SubnetMask {
            units,
            wildcard: WildcardMask::from_mask_units(units),
            prefix,
            total_addresses: total_addresses(prefix)?,
        })
    }

    pub fn octets(&self) -> [u8; UNITS] {
        self.units
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.units)
    }

    pub fn wildcard(&self) -> WildcardMask {
        self.wildcard
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// `2^(32 - prefix)`.
    pub fn total_addresses(&self) -> u64 {
        self.total_addresses
    }

    pub fn bit_vectors(&self) -> [BitVector; UNITS] {
        self.units.map(BitVector::new)
    }

    /// True when the unit at `index` is not all ones, i.e. still has host bits.
    pub fn is_unit_varying(&self, index: usize) -> bool {
        self.units
            .get(index)
            .map(|unit| BitVector::new(*unit).variability() > 0)
            .unwrap_or(false)
    }

    /// Index of the first unit touched by the prefix boundary, `prefix / 8`.
    ///
    /// Units before it are all ones and copied unchanged by the resolver.
    /// Equals 4 for /32, where no unit is touched.
    pub fn boundary_index(&self) -> usize {
        (self.prefix / 8) as usize
    }

    /// Unit where the boundary falls mid-unit; `None` for /0, /8, /16, /24 and /32,
    /// where every unit is either 0 or 255.
    pub fn last_used_unit(&self) -> Option<LastUsedUnit> {
        let network_bits = self.prefix % 8;
        if network_bits == 0 {
            return None;
        }
        let index = self.boundary_index();
        Some(LastUsedUnit {
            index,
            value: self.units[index],
            network_bits,
        })
    }
}

impl TryFrom<Ipv4Addr> for SubnetMask {
    type Error = SubnetError;

    fn try_from(mask: Ipv4Addr) -> Result<Self, Self::Error> {
        SubnetMask::from_octets(mask.octets())
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dotted(&self.units))
    }
}
