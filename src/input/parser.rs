//! Network string parsing.
//!
//! Accepts `A.B.C.D/N`, `A.B.C.D/M.M.M.M` and `A.B.C.D M.M.M.M`.

use crate::error::{SubnetError, SubnetResult};
use crate::processing::{check_prefix, UNITS};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    static ref NETWORK_RE: Regex = Regex::new(
        r"^\s*(?P<address>[0-9]{1,3}(?:\.[0-9]{1,3}){3})(?:/(?P<prefix>[0-9]{1,2})|(?:/|\s+)(?P<mask>[0-9]{1,3}(?:\.[0-9]{1,3}){3}))\s*$"
    )
    .expect("Invalid Regex?");
}

const EXPECTED_FORMS: &str = "expected A.B.C.D/N, A.B.C.D/M.M.M.M or 'A.B.C.D M.M.M.M'";

/// A parsed network string, tagged by which form was present.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParsedNetworkString {
    /// `A.B.C.D/N`
    Prefix { address: Ipv4Addr, prefix: u8 },
    /// `A.B.C.D/M.M.M.M` or `A.B.C.D M.M.M.M`
    Mask { address: Ipv4Addr, mask: Ipv4Addr },
}

impl ParsedNetworkString {
    pub fn address(&self) -> Ipv4Addr {
        match self {
            ParsedNetworkString::Prefix { address, .. } => *address,
            ParsedNetworkString::Mask { address, .. } => *address,
        }
    }
}

impl FromStr for ParsedNetworkString {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_network_string(s)
    }
}

/// Parse `text` into an address plus prefix or mask.
pub fn parse_network_string(text: &str) -> SubnetResult<ParsedNetworkString> {
    let captures = NETWORK_RE
        .captures(text)
        .ok_or_else(|| SubnetError::parse(text, EXPECTED_FORMS))?;

    // `address` is not optional in the pattern, a match always has it
    let address = match captures.name("address") {
        Some(address) => parse_dotted(text, address.as_str())?,
        None => return Err(SubnetError::parse(text, EXPECTED_FORMS)),
    };

    let parsed = if let Some(prefix) = captures.name("prefix") {
        let prefix: u8 = prefix
            .as_str()
            .parse()
            .map_err(|e| SubnetError::parse(text, format!("invalid prefix: {e}")))?;
        ParsedNetworkString::Prefix {
            address,
            prefix: check_prefix(prefix)?,
        }
    } else if let Some(mask) = captures.name("mask") {
        ParsedNetworkString::Mask {
            address,
            mask: parse_dotted(text, mask.as_str())?,
        }
    } else {
        return Err(SubnetError::parse(text, EXPECTED_FORMS));
    };

    log::debug!("parse_network_string({text:?}) -> {parsed:?}");
    Ok(parsed)
}

fn parse_dotted(text: &str, dotted: &str) -> SubnetResult<Ipv4Addr> {
    let mut units = [0u8; UNITS];
    let mut parts = dotted.split('.');
    for unit in units.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| SubnetError::parse(text, format!("'{dotted}' needs 4 units")))?;
        // leading zeros read as octal elsewhere, reject them like std's Ipv4Addr parser
        if part.len() > 1 && part.starts_with('0') {
            return Err(SubnetError::parse(
                text,
                format!("unit '{part}' has a leading zero"),
            ));
        }
        *unit = part
            .parse()
            .map_err(|_| SubnetError::parse(text, format!("unit '{part}' is not in 0..=255")))?;
    }
    if parts.next().is_some() {
        return Err(SubnetError::parse(text, format!("'{dotted}' has more than 4 units")));
    }
    Ok(Ipv4Addr::from(units))
}
