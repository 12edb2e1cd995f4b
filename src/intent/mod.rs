pub mod catalog;
pub mod rules;
pub mod types;

pub use rules::ValidationOutcome;
pub use types::IntentKind;
