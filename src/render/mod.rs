pub mod diagram;

pub use diagram::{render_diagram, save_diagram};
