//! Error type shared by every construction path.

use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid network string '{input}': {reason}")]
    Parse { input: String, reason: String },
    #[error("Prefix /{0} is outside 0..=32")]
    InvalidPrefix(u8),
    #[error("Mask {0} is not a contiguous run of high-order bits")]
    NonContiguousMask(Ipv4Addr),
    #[error("Host range underflow: broadcast {0} has no address below it in the last unit")]
    HostRangeUnderflow(Ipv4Addr),
    #[error("Host range overflow: network {0} has no address above it in the last unit")]
    HostRangeOverflow(Ipv4Addr),
    #[error("Host range is empty: first usable {first} is above last usable {last}")]
    EmptyHostRange { first: Ipv4Addr, last: Ipv4Addr },
}

impl SubnetError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        SubnetError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SubnetResult<T> = std::result::Result<T, SubnetError>;
