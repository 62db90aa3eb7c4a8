//! Usable host range model.

use crate::error::SubnetResult;
use crate::processing::usable_range;
use std::fmt;
use std::net::Ipv4Addr;

/// Addresses strictly between the network and broadcast address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UsableHostRange {
    first: Ipv4Addr,
    last: Ipv4Addr,
}

impl UsableHostRange {
    /// Derive the range from a network and broadcast address.
    ///
    /// Fails with `HostRangeOverflow`, `HostRangeUnderflow` or `EmptyHostRange`
    /// for /31 and /32 blocks.
    pub fn new(network: Ipv4Addr, broadcast: Ipv4Addr) -> SubnetResult<UsableHostRange> {
        let (first, last) = usable_range(network, broadcast)?;
        Ok(UsableHostRange { first, last })
    }

    pub fn first(&self) -> Ipv4Addr {
        self.first
    }

    pub fn last(&self) -> Ipv4Addr {
        self.last
    }

    /// Number of addresses in the range, inclusive.
    pub fn host_count(&self) -> u64 {
        u64::from(u32::from(self.last)) - u64::from(u32::from(self.first)) + 1
    }
}

impl fmt::Display for UsableHostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}
