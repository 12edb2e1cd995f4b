pub mod intent;
pub mod kernel;
pub mod transport;

// Re-export specific items if needed for convenient access
pub use kernel::directive::Directive;
pub use kernel::error::HookError;
pub use kernel::reactor::Reactor;
pub use transport::HookHandler;
