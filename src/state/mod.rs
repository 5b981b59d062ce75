//! Application state module

mod app_state;
mod forms;
mod splash_state;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use splash_state::*;
pub use ui_area::*;
