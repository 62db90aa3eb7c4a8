//! Usable host range arithmetic.
//!
//! Only the last unit moves: `network + 1` and `broadcast - 1`. Results that would leave
//! the unit range are reported as named errors instead of wrapping.

use crate::error::{SubnetError, SubnetResult};
use std::net::Ipv4Addr;

/// Network address with its last unit incremented.
pub fn first_usable(network: Ipv4Addr) -> SubnetResult<Ipv4Addr> {
    let mut units = network.octets();
    units[3] = units[3]
        .checked_add(1)
        .ok_or(SubnetError::HostRangeOverflow(network))?;
    Ok(Ipv4Addr::from(units))
}

/// Broadcast address with its last unit decremented.
pub fn last_usable(broadcast: Ipv4Addr) -> SubnetResult<Ipv4Addr> {
    let mut units = broadcast.octets();
    units[3] = units[3]
        .checked_sub(1)
        .ok_or(SubnetError::HostRangeUnderflow(broadcast))?;
    Ok(Ipv4Addr::from(units))
}

/// First and last usable addresses, failing when the range is empty (/31) or
/// leaves the last unit (/32 on a 0 or 255 unit).
pub fn usable_range(network: Ipv4Addr, broadcast: Ipv4Addr) -> SubnetResult<(Ipv4Addr, Ipv4Addr)> {
    let first = first_usable(network)?;
    let last = last_usable(broadcast)?;
    if first > last {
        return Err(SubnetError::EmptyHostRange { first, last });
    }
    Ok((first, last))
}
