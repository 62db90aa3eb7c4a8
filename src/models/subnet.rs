//! IPv4 subnet aggregate.

use super::{SubnetMask, UsableHostRange, WildcardMask};
use crate::error::{SubnetError, SubnetResult};
use crate::input::{parse_network_string, ParsedNetworkString};
use crate::processing::{broadcast_address, network_address};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A fully computed IPv4 subnet.
///
/// Every field is derived once, at construction, from an address and a mask.
/// Equivalent inputs (`10.0.0.5/24`, `10.0.0.5` + `255.255.255.0`) produce equal values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: Ipv4Addr,
    mask: SubnetMask,
    broadcast: Ipv4Addr,
    host_range: Option<UsableHostRange>,
}

impl Subnet {
    /// Create a subnet from an address and a prefix length (0-32).
    ///
    /// # Examples
    /// ```
    /// use std::net::Ipv4Addr;
    /// use subnet_calc::models::Subnet;
    /// let subnet = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 5), 30).unwrap();
    /// assert_eq!(subnet.network_address(), Ipv4Addr::new(10, 0, 0, 4));
    /// assert_eq!(subnet.to_string(), "10.0.0.4/30");
    /// ```
    pub fn from_prefix(addr: Ipv4Addr, prefix: u8) -> SubnetResult<Subnet> {
        Ok(Subnet::with_mask(addr, SubnetMask::from_prefix(prefix)?))
    }

    /// Create a subnet from an address and a dotted subnet mask.
    pub fn from_mask(addr: Ipv4Addr, mask: Ipv4Addr) -> SubnetResult<Subnet> {
        Ok(Subnet::with_mask(addr, SubnetMask::try_from(mask)?))
    }

    /// Create a subnet from `A.B.C.D/N`, `A.B.C.D/M.M.M.M` or `A.B.C.D M.M.M.M`.
    pub fn parse(text: &str) -> SubnetResult<Subnet> {
        match parse_network_string(text)? {
            ParsedNetworkString::Prefix { address, prefix } => Subnet::from_prefix(address, prefix),
            ParsedNetworkString::Mask { address, mask } => Subnet::from_mask(address, mask),
        }
    }

    /// Create a subnet from an address and an already validated mask.
    ///
    /// /31 and /32 have no usable host range; [`Subnet::host_range`] is `None` for them.
    pub fn with_mask(addr: Ipv4Addr, mask: SubnetMask) -> Subnet {
        let network = network_address(addr, &mask);
        let broadcast = broadcast_address(network, &mask.wildcard());
        let host_range = match UsableHostRange::new(network, broadcast) {
            Ok(range) => Some(range),
            Err(e) => {
                log::warn!("{network}/{} has no usable hosts: {e}", mask.prefix());
                None
            }
        };

        log::debug!(
            "Subnet {addr}/{prefix}: network={network} broadcast={broadcast} total={total}",
            prefix = mask.prefix(),
            total = mask.total_addresses()
        );

        Subnet {
            network,
            mask,
            broadcast,
            host_range,
        }
    }

    pub fn network_address(&self) -> Ipv4Addr {
        self.network
    }

    pub fn mask(&self) -> &SubnetMask {
        &self.mask
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.mask.to_ipv4()
    }

    pub fn wildcard(&self) -> WildcardMask {
        self.mask.wildcard()
    }

    pub fn wildcard_mask(&self) -> Ipv4Addr {
        self.mask.wildcard().to_ipv4()
    }

    pub fn prefix(&self) -> u8 {
        self.mask.prefix()
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.broadcast
    }

    pub fn total_addresses(&self) -> u64 {
        self.mask.total_addresses()
    }

    /// `total - 2`, or 0 for /31 and /32.
    pub fn usable_addresses(&self) -> u64 {
        match self.host_range {
            Some(_) => self.total_addresses() - 2,
            None => 0,
        }
    }

    pub fn host_range(&self) -> Option<&UsableHostRange> {
        self.host_range.as_ref()
    }

    /// The host range, or the named reason there is none.
    pub fn try_host_range(&self) -> SubnetResult<UsableHostRange> {
        UsableHostRange::new(self.network, self.broadcast)
    }

    pub fn first_usable(&self) -> Option<Ipv4Addr> {
        self.host_range.map(|range| range.first())
    }

    pub fn last_usable(&self) -> Option<Ipv4Addr> {
        self.host_range.map(|range| range.last())
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subnet::parse(s)
    }
}

impl fmt::Display for Subnet {
    /// Canonical `network/prefix` form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix())
    }
}

impl PartialOrd for Subnet {
    fn partial_cmp(&self, other: &Subnet) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subnet {
    fn cmp(&self, other: &Subnet) -> std::cmp::Ordering {
        (self.network, self.prefix()).cmp(&(other.network, other.prefix()))
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::MAX_LENGTH;

    #[test]
    fn test_slash_24() {
        let subnet = Subnet::from_prefix(Ipv4Addr::new(192, 168, 0, 0), 24).unwrap();
        assert_eq!(subnet.total_addresses(), 256);
        assert_eq!(subnet.usable_addresses(), 254);
        assert_eq!(subnet.subnet_mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(subnet.wildcard_mask(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(subnet.broadcast_address(), Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(subnet.first_usable(), Some(Ipv4Addr::new(192, 168, 0, 1)));
        assert_eq!(subnet.last_usable(), Some(Ipv4Addr::new(192, 168, 0, 254)));
        assert_eq!(subnet.to_string(), "192.168.0.0/24");
    }

    #[test]
    fn test_slash_30() {
        let subnet = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 5), 30).unwrap();
        assert_eq!(subnet.network_address(), Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(subnet.broadcast_address(), Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(
            subnet.host_range().map(|r| r.to_string()),
            Some("10.0.0.5 - 10.0.0.6".to_string())
        );
        assert_eq!(subnet.usable_addresses(), 2);
    }

    #[test]
    fn test_slash_26_snaps_last_unit() {
        let subnet = Subnet::from_prefix(Ipv4Addr::new(172, 16, 5, 130), 26).unwrap();
        assert_eq!(subnet.network_address(), Ipv4Addr::new(172, 16, 5, 128));
        assert_eq!(subnet.subnet_mask(), Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(subnet.broadcast_address(), Ipv4Addr::new(172, 16, 5, 191));
    }

    #[test]
    fn test_construction_paths_converge() {
        let by_prefix = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 5), 24).unwrap();
        let by_mask =
            Subnet::from_mask(Ipv4Addr::new(10, 0, 0, 5), Ipv4Addr::new(255, 255, 255, 0))
                .unwrap();
        let by_text = Subnet::parse("10.0.0.5/24").unwrap();
        let by_text_mask: Subnet = "10.0.0.5 255.255.255.0".parse().unwrap();
        assert_eq!(by_prefix, by_mask);
        assert_eq!(by_prefix, by_text);
        assert_eq!(by_prefix, by_text_mask);
    }

    #[test]
    fn test_usable_addresses_all_prefixes() {
        let addr = Ipv4Addr::new(10, 20, 30, 40);
        for prefix in 0..=30 {
            let subnet = Subnet::from_prefix(addr, prefix).unwrap();
            assert_eq!(subnet.usable_addresses(), subnet.total_addresses() - 2);
            assert_eq!(
                subnet.host_range().unwrap().host_count(),
                subnet.usable_addresses()
            );
        }
        for prefix in [31, MAX_LENGTH] {
            let subnet = Subnet::from_prefix(addr, prefix).unwrap();
            assert_eq!(subnet.usable_addresses(), 0);
            assert!(subnet.host_range().is_none());
            assert!(subnet.try_host_range().is_err());
        }
    }

    #[test]
    fn test_degenerate_host_ranges() {
        let subnet = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 0), 32).unwrap();
        assert_eq!(
            subnet.try_host_range(),
            Err(SubnetError::HostRangeUnderflow(Ipv4Addr::new(10, 0, 0, 0)))
        );
        let subnet = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 255), 32).unwrap();
        assert_eq!(
            subnet.try_host_range(),
            Err(SubnetError::HostRangeOverflow(Ipv4Addr::new(10, 0, 0, 255)))
        );
        let subnet = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 9), 31).unwrap();
        assert!(matches!(
            subnet.try_host_range(),
            Err(SubnetError::EmptyHostRange { .. })
        ));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 0), 33),
            Err(SubnetError::InvalidPrefix(33))
        );
        assert_eq!(
            Subnet::from_mask(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(255, 0, 255, 0)),
            Err(SubnetError::NonContiguousMask(Ipv4Addr::new(255, 0, 255, 0)))
        );
        assert!(matches!(
            Subnet::parse("not a network"),
            Err(SubnetError::Parse { .. })
        ));
    }

    #[test]
    fn test_serde_canonical_string() {
        let subnet = Subnet::parse("10.1.2.3 255.255.0.0").unwrap();
        let json = serde_json::to_string(&subnet).unwrap();
        assert_eq!(json, "\"10.1.0.0/16\"");
        let back: Subnet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subnet);
        assert!(serde_json::from_str::<Subnet>("\"10.1.0.0/40\"").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = Subnet::parse("10.0.0.0/8").unwrap();
        let b = Subnet::parse("10.0.0.0/24").unwrap();
        let c = Subnet::parse("10.0.1.0/24").unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
