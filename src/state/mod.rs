//! Application state module

mod app_state;
mod field;
mod reference;
mod store;

pub use app_state::*;
pub use field::*;
pub use reference::*;
pub use store::*;
