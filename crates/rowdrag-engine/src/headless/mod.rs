//! In-memory host table, surface and editor.
//!
//! Used by the scenario runner and by tests. Rows are stacked vertically
//! with fixed heights and never wrap.

mod submitter;
mod surface;
mod table;

pub use submitter::{RecordingSubmitter, SubmitCall, SubmitLog};
pub use surface::HeadlessSurface;
pub use table::{MemoryRow, MemoryTable};
