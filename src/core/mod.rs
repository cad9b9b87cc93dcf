pub mod errors;
pub mod sort;

use serde::{Deserialize, Serialize};

pub use errors::{Result, SortError};
pub use sort::{
    build_cumulative, build_frequency, find_maximum, place_elements, placement_steps, sort,
};

/// Every intermediate artifact of one counting-sort run.
///
/// The reporting and rendering collaborators consume all four tables, not
/// just the sorted output, so the pipeline returns them together as one
/// immutable snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortArtifacts {
    pub input: Vec<u64>,
    pub max_value: u64,
    pub frequency: Vec<usize>,
    pub cumulative: Vec<usize>,
    pub sorted: Vec<u64>,
}

impl SortArtifacts {
    /// Placement records in the order the algorithm made them.
    pub fn placement_steps(&self) -> Result<Vec<PlacementStep>> {
        placement_steps(&self.input, &self.cumulative)
    }
}

/// One placement made while building the sorted output.
///
/// `position` doubles as the working-table count after the decrement: the
/// slot an element lands in is exactly the number of slots still unfilled
/// for its value group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementStep {
    pub value: u64,
    pub position: usize,
}
