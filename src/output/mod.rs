//! Output formatting for computed subnets.
//!
//! - [`terminal`] - aligned, coloured blocks for humans
//! - [`csv`] - one quoted row per subnet
//! - [`json`] - pretty printed array of [`SubnetSummary`](crate::models::SubnetSummary)

mod csv;
mod json;
mod terminal;

pub use csv::{format_field, render_csv};
pub use json::render_json;
pub use terminal::render_table;
