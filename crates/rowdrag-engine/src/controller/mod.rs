//! The RowReorder controller: one per table, driven by pointer and key
//! input.
//!
//! ```text
//! Idle --press on handle--> Dragging --release--> Idle
//!                               |        \--release (delegated)--> AwaitingSubmission
//!                               \--ESC / veto / drop outside--> Idle (restored)
//! AwaitingSubmission --finish_submission--> Idle
//! ```

mod dispatch;
mod motion;
mod release;
mod start;
mod teardown;
mod types;

pub use types::*;
