//! Prefix length <-> wildcard/subnet mask conversion.
//!
//! Masks are handled as four units (octets), unit 0 most significant.

use crate::error::{SubnetError, SubnetResult};
use crate::models::BitVector;

/// Maximum prefix length of an IPv4 address (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of units in an IPv4 address.
pub const UNITS: usize = 4;

const UNIT_SPAN: u64 = 256;

/// Reject prefixes outside `0..=32` before any conversion is attempted.
pub fn check_prefix(prefix: u8) -> SubnetResult<u8> {
    if prefix > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(prefix))
    } else {
        Ok(prefix)
    }
}

/// Number of addresses covered by `prefix`, `2^(32 - prefix)`.
///
/// # Examples
/// ```
/// use subnet_calc::processing::total_addresses;
/// assert_eq!(total_addresses(24).unwrap(), 256);
/// assert_eq!(total_addresses(0).unwrap(), 1 << 32);
/// ```
pub fn total_addresses(prefix: u8) -> SubnetResult<u64> {
    let prefix = check_prefix(prefix)?;
    Ok(1u64 << (MAX_LENGTH - prefix))
}

/// Wildcard units for `prefix`.
///
/// The number of units completely filled by host bits is `floor(log256(total))`,
/// capped at 3 so that /0 puts its partial value (255) in unit 0. The unit left of the
/// filled run holds `total / 256^filled - 1`; units right of it are 255, units left are 0.
///
/// # Examples
/// ```
/// use subnet_calc::processing::prefix_to_wildcard;
/// assert_eq!(prefix_to_wildcard(24).unwrap(), [0, 0, 0, 255]);
/// assert_eq!(prefix_to_wildcard(20).unwrap(), [0, 0, 15, 255]);
/// ```
pub fn prefix_to_wildcard(prefix: u8) -> SubnetResult<[u8; UNITS]> {
    let total = total_addresses(prefix)?;

    let mut units_filled = 0usize;
    while units_filled < UNITS - 1 && total >= UNIT_SPAN.pow(units_filled as u32 + 1) {
        units_filled += 1;
    }
    let position = UNITS - 1 - units_filled;
    let partial = total / UNIT_SPAN.pow(units_filled as u32) - 1;

    let mut wildcard = [0u8; UNITS];
    wildcard[position] = partial as u8;
    for unit in wildcard.iter_mut().skip(position + 1) {
        *unit = u8::MAX;
    }

    log::trace!("prefix /{prefix} -> wildcard {wildcard:?} (units_filled={units_filled})");
    Ok(wildcard)
}

/// Recover the prefix from wildcard units.
///
/// Every unset bit of the matching subnet mask is a host bit. Only meaningful for wildcards
/// of contiguous masks, see [`is_contiguous`].
pub fn wildcard_to_prefix(wildcard: [u8; UNITS]) -> u8 {
    let host_bits: u32 = complement(wildcard)
        .into_iter()
        .map(|unit| BitVector::new(unit).unset_count())
        .sum();
    MAX_LENGTH - host_bits as u8
}

/// Subnet mask units for `prefix`.
pub fn prefix_to_mask(prefix: u8) -> SubnetResult<[u8; UNITS]> {
    Ok(complement(prefix_to_wildcard(prefix)?))
}

/// Prefix of subnet mask units, rejecting masks that are not a contiguous high-order run.
pub fn mask_to_prefix(mask: [u8; UNITS]) -> SubnetResult<u8> {
    if !is_contiguous(mask) {
        return Err(SubnetError::NonContiguousMask(mask.into()));
    }
    Ok(wildcard_to_prefix(complement(mask)))
}

/// True when the set bits of `mask` form one run starting at the most significant bit.
pub fn is_contiguous(mask: [u8; UNITS]) -> bool {
    let bits = u32::from_be_bytes(mask);
    bits.leading_ones() + bits.trailing_zeros() >= MAX_LENGTH as u32
}

/// Unit-wise `255 - unit`, turning a subnet mask into its wildcard and back.
pub fn complement(units: [u8; UNITS]) -> [u8; UNITS] {
    units.map(|unit| u8::MAX - unit)
}
