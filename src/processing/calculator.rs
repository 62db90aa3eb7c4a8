//! Prefix-keyed shortcuts for callers that only hold an address and a prefix length.

use super::{broadcast_address, network_address, prefix_to_wildcard, total_addresses, UNITS};
use crate::error::SubnetResult;
use crate::models::SubnetMask;
use std::net::Ipv4Addr;

/// Maximum number of addresses for a prefix length.
pub fn max_addresses(prefix: u8) -> SubnetResult<u64> {
    total_addresses(prefix)
}

/// Convert a prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calc::processing::subnet_mask;
/// assert_eq!(subnet_mask(24).unwrap(), Ipv4Addr::new(255, 255, 255, 0));
/// ```
pub fn subnet_mask(prefix: u8) -> SubnetResult<Ipv4Addr> {
    Ok(SubnetMask::from_prefix(prefix)?.to_ipv4())
}

/// Wildcard units for a prefix length.
pub fn wildcard_bytes(prefix: u8) -> SubnetResult<[u8; UNITS]> {
    prefix_to_wildcard(prefix)
}

/// Network address (subnet boundary) containing `addr`.
pub fn subnet_boundary(addr: Ipv4Addr, prefix: u8) -> SubnetResult<Ipv4Addr> {
    let mask = SubnetMask::from_prefix(prefix)?;
    Ok(network_address(addr, &mask))
}

/// Broadcast address of the `/prefix` block containing `addr`.
pub fn broadcast_for_prefix(addr: Ipv4Addr, prefix: u8) -> SubnetResult<Ipv4Addr> {
    let mask = SubnetMask::from_prefix(prefix)?;
    let network = network_address(addr, &mask);
    Ok(broadcast_address(network, &mask.wildcard()))
}
