//! Subnet arithmetic.
//!
//! - [`converter`] - prefix length <-> wildcard/subnet mask
//! - [`boundary`] - network and broadcast address resolution
//! - [`host_range`] - first/last usable host
//! - [`calculator`] - prefix-keyed shortcuts over the above

mod boundary;
mod calculator;
mod converter;
mod host_range;

// Re-export public functions
pub use boundary::{broadcast_address, network_address};
pub use calculator::{
    broadcast_for_prefix, max_addresses, subnet_boundary, subnet_mask, wildcard_bytes,
};
pub use converter::{
    check_prefix, complement, is_contiguous, mask_to_prefix, prefix_to_mask, prefix_to_wildcard,
    total_addresses, wildcard_to_prefix, MAX_LENGTH, UNITS,
};
pub use host_range::{first_usable, last_usable, usable_range};
