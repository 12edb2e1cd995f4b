use serde::{Deserialize, Serialize};

use crate::intent::types::IntentKind;
use crate::kernel::directive::DirectiveKind;

// Allowed: enums, counts
// Forbidden: slot values, messages, session attributes, caller ids

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    DirectiveIssued {
        intent: IntentKind,
        kind: DirectiveKind,
    },

    TurnRejected {
        reason: RejectionKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectionKind {
    InvalidBotName,
    MalformedEvent,
    UnsupportedIntent,
    InvalidPattern,
    EncodeFailure,
}
