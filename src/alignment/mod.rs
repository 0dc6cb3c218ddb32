pub mod backtrace;
pub mod distance;
pub mod render;

pub use backtrace::{backtrace, edit_operations};
pub use distance::{edit_distance, DistanceMatrix};
pub use render::{render_alignment, render_operations, Alignment};
