//! Application state module

mod app_state;
mod blog;
mod forms;
mod nav;

pub use app_state::*;
pub use blog::*;
pub use forms::*;
pub use nav::*;
