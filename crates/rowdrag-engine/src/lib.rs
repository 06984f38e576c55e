//! Drag-and-drop row reordering for a table body.
//!
//! The [`RowReorder`] controller is a state machine fed with pointer and
//! key input. It talks to the outside world through two traits: a
//! [`HostTable`] that owns rows, data and listeners, and a [`Surface`] that
//! measures and renders. An in-memory implementation of both lives in
//! [`headless`].

pub mod autoscroll;
pub mod clone;
pub mod commit;
pub mod controller;
pub mod geometry;
pub mod handle;
pub mod headless;
pub mod host;
pub mod notify;
pub mod order;
pub mod registry;
pub mod session;
pub mod surface;

pub use controller::{DragInput, Key, Outcome, RowReorder};
pub use host::{CommitPath, HostTable, SubmitOutcome, Submitter};
pub use notify::{Listeners, Verdict};
pub use registry::Registry;
pub use surface::Surface;
