//! Turn telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (Reactor or Catalog).
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain user content (slot values, transcripts, user ids).
//! Only intent kinds, directive kinds and rejection reasons are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
