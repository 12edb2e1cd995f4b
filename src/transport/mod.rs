pub mod driver;
pub mod handler;
pub mod wire;

pub use handler::{HookHandler, TransportError};
pub use wire::CodeHookEvent;
