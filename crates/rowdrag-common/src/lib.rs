pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, ReorderError};
pub use events::{EventBus, Notification, ReorderContext, ReorderPayload};
pub use id::{new_correlation_id, new_id, TableId};
pub use types::{
    Area, DataSrc, DiffRecord, ElementInfo, Placement, Point, PointerSample, PointerSource,
    PressTarget, RowId,
};

pub type Result<T> = std::result::Result<T, ReorderError>;
