//! Flat report row for a computed subnet.

use super::Subnet;
use serde::{Deserialize, Serialize};

/// Every derived value of a [`Subnet`], rendered for output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    /// Text the subnet was computed from.
    pub input: String,
    /// Canonical `network/prefix`.
    pub cidr: String,
    pub network: String,
    pub prefix: u8,
    pub subnet_mask: String,
    pub wildcard_mask: String,
    pub broadcast: String,
    /// None for /31 and /32.
    pub first_usable: Option<String>,
    pub last_usable: Option<String>,
    pub total_addresses: u64,
    pub usable_addresses: u64,
}

impl SubnetSummary {
    pub fn new(input: &str, subnet: &Subnet) -> SubnetSummary {
        SubnetSummary {
            input: input.trim().to_string(),
            cidr: subnet.to_string(),
            network: subnet.network_address().to_string(),
            prefix: subnet.prefix(),
            subnet_mask: subnet.subnet_mask().to_string(),
            wildcard_mask: subnet.wildcard_mask().to_string(),
            broadcast: subnet.broadcast_address().to_string(),
            first_usable: subnet.first_usable().map(|ip| ip.to_string()),
            last_usable: subnet.last_usable().map(|ip| ip.to_string()),
            total_addresses: subnet.total_addresses(),
            usable_addresses: subnet.usable_addresses(),
        }
    }

    /// `first - last`, or `none` when the subnet has no usable hosts.
    pub fn host_range(&self) -> String {
        match (&self.first_usable, &self.last_usable) {
            (Some(first), Some(last)) => format!("{first} - {last}"),
            _ => "none".to_string(),
        }
    }
}
