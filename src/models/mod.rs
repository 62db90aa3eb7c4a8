//! Domain models for IPv4 subnet calculation.
//!
//! - [`BitVector`] - one address unit as eight bit positions
//! - [`SubnetMask`], [`WildcardMask`] and [`LastUsedUnit`] - mask shapes
//! - [`UsableHostRange`] - first/last usable host
//! - [`Subnet`] - the computed subnet
//! - [`SubnetSummary`] - flat report row for output

mod bit_vector;
mod host_range;
mod mask;
mod subnet;
mod summary;

// Re-export public types
pub use bit_vector::{BitVector, UNIT_BITS};
pub use host_range::UsableHostRange;
pub use mask::{LastUsedUnit, SubnetMask, WildcardMask};
pub use subnet::Subnet;
pub use summary::SubnetSummary;
