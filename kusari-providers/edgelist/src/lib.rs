//! Line-based edge list provider producing in-memory kusari clusters.

mod errors;
mod parse;

pub use errors::EdgeListError;
pub use parse::{NODE_ID_SPREAD, parse_breakpoints, parse_edge_list};
