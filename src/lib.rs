// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod formatting;
pub mod io;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    build_cumulative, build_frequency, find_maximum, place_elements, placement_steps, sort,
    PlacementStep, Result, SortArtifacts, SortError,
};

pub use crate::io::input::{parse_sequence, read_interactive, InputError};

pub use crate::io::output::{create_writer, format_array, OutputFormat, OutputWriter};

pub use crate::render::{render_diagram, save_diagram};
