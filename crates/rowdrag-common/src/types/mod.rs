mod core;
mod data_src;
mod diff;
mod element;
mod input;

pub use self::core::*;
pub use data_src::*;
pub use diff::*;
pub use element::*;
pub use input::*;
