pub mod controls;
pub mod messages;

pub use controls::wire_controls;
pub use messages::wire_host_messages;
