pub mod accel;
pub mod command;
pub mod constants;
pub mod overlay;
pub mod state;

pub use accel::*;
pub use command::*;
pub use constants::*;
pub use overlay::*;
pub use state::*;
