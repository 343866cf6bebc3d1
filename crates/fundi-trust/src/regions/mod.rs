//! County → constituency → ward hierarchy with cascading, validated selection.

mod catalog;
pub mod search;
mod selection;
mod tree;

pub use search::{GigRecord, GigSearchQuery};
pub use selection::{RegionSelector, SelectionChange, SelectionStage, SelectionState};
pub use tree::{Constituency, County, RegionTree, RegionTreeError};
