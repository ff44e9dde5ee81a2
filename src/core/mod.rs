pub mod constants;
pub mod messages;
pub mod notify;
pub mod spatial;
pub mod state;

pub use constants::*;
pub use messages::*;
pub use notify::*;
pub use spatial::*;
pub use state::*;
