use serde::{Deserialize, Serialize};

use crate::kernel::event::{DialogRequest, InvocationPhase, SessionAttributes, SlotSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

impl From<InvocationSource> for InvocationPhase {
    fn from(source: InvocationSource) -> Self {
        match source {
            InvocationSource::DialogCodeHook => InvocationPhase::Collecting,
            InvocationSource::FulfillmentCodeHook => InvocationPhase::Fulfilling,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: SlotSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

/// Event as delivered by the conversational platform. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeHookEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
    pub invocation_source: InvocationSource,
    pub user_id: String,
    // Platform sends null on the first turn.
    #[serde(default)]
    pub session_attributes: SessionAttributes,
    pub bot: BotInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
    pub current_intent: CurrentIntent,
}

impl CodeHookEvent {
    pub fn into_request(self) -> DialogRequest {
        DialogRequest {
            session_attributes: self.session_attributes,
            phase: self.invocation_source.into(),
            intent_name: self.current_intent.name,
            slots: self.current_intent.slots,
            caller_id: self.user_id,
        }
    }
}

/// Body written back when a turn fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error_type: String,
    pub error_message: String,
}
