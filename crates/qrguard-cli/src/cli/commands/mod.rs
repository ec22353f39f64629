//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod distance;
mod man;
mod scan;
mod trusted;

pub use batch::run_batch;
pub use completions::run_completions;
pub use distance::run_distance;
pub use man::run_man;
pub use scan::run_scan;
pub use trusted::run_trusted;
