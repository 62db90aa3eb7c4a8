//! Network and broadcast address resolution.

use crate::models::{SubnetMask, WildcardMask};
use crate::processing::UNITS;
use std::net::Ipv4Addr;

/// Network address of `addr` under `mask`.
///
/// Units before [`SubnetMask::boundary_index`] are all-ones in the mask and are copied
/// unchanged; the boundary unit and everything after it are ANDed with the mask.
/// For prefixes that are a multiple of 8 there is no partial unit, so the trailing
/// units are simply zeroed.
pub fn network_address(addr: Ipv4Addr, mask: &SubnetMask) -> Ipv4Addr {
    let addr_units = addr.octets();
    let mask_units = mask.octets();
    let boundary = mask.boundary_index();

    let mut network = [0u8; UNITS];
    for (i, unit) in network.iter_mut().enumerate() {
        *unit = if i < boundary {
            addr_units[i]
        } else {
            addr_units[i] & mask_units[i]
        };
    }

    match mask.last_used_unit() {
        Some(unit) => log::trace!(
            "{addr}/{prefix}: boundary in unit {position} (mask {value}) -> {unit_value}",
            prefix = mask.prefix(),
            position = unit.position(),
            value = unit.value(),
            unit_value = network[unit.index()],
        ),
        None => log::trace!(
            "{addr}/{prefix}: unit-aligned boundary, {copied} unit(s) copied",
            prefix = mask.prefix(),
            copied = boundary.min(UNITS),
        ),
    }

    Ipv4Addr::from(network)
}

/// Broadcast address: `network[i] + wildcard[i]` per unit, no carry.
///
/// The network address has every wildcard bit cleared, so the sum is the bitwise OR of the
/// two units. Computing it as an OR keeps the result inside the block even when `network`
/// still carries host bits.
pub fn broadcast_address(network: Ipv4Addr, wildcard: &WildcardMask) -> Ipv4Addr {
    let network_units = network.octets();
    let wildcard_units = wildcard.octets();

    let mut broadcast = [0u8; UNITS];
    for (i, unit) in broadcast.iter_mut().enumerate() {
        *unit = network_units[i] | wildcard_units[i];
    }
    Ipv4Addr::from(broadcast)
}
