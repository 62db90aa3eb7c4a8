//! Text input handling.
//!
//! - [`parser`] - network string grammar (`A.B.C.D/N`, `A.B.C.D/M.M.M.M`, `A.B.C.D M.M.M.M`)

mod parser;

pub use parser::{parse_network_string, ParsedNetworkString};
