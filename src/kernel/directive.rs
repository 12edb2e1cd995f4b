use serde::{Deserialize, Serialize};

use super::event::{SessionAttributes, SlotSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

pub const GENERIC_CARD_CONTENT_TYPE: &str = "application/vnd.amazonaws.card.generic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// Rich card rendered next to a prompt by clients that support it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub version: u32,
    pub content_type: String,
    pub generic_attachments: Vec<Attachment>,
}

impl ResponseCard {
    pub fn generic(attachments: Vec<Attachment>) -> Self {
        Self {
            version: 1,
            content_type: GENERIC_CARD_CONTENT_TYPE.to_string(),
            generic_attachments: attachments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// The instruction handed back to the platform. Tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    ElicitSlot {
        intent_name: String,
        slots: SlotSet,
        slot_to_elicit: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    ConfirmIntent {
        intent_name: String,
        slots: SlotSet,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    Delegate {
        slots: SlotSet,
    },
}

/// Sole output of a dialog turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// Content-free label for a directive, used by logs and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DirectiveKind {
    ElicitSlot,
    ConfirmIntent,
    Close,
    Delegate,
}

impl Directive {
    pub fn kind(&self) -> DirectiveKind {
        DirectiveKind::from(&self.dialog_action)
    }
}

impl From<&DialogAction> for DirectiveKind {
    fn from(action: &DialogAction) -> Self {
        match action {
            DialogAction::ElicitSlot { .. } => DirectiveKind::ElicitSlot,
            DialogAction::ConfirmIntent { .. } => DirectiveKind::ConfirmIntent,
            DialogAction::Close { .. } => DirectiveKind::Close,
            DialogAction::Delegate { .. } => DirectiveKind::Delegate,
        }
    }
}

pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: SlotSet,
    slot_to_elicit: impl Into<String>,
    message: Option<Message>,
    response_card: Option<ResponseCard>,
) -> Directive {
    Directive {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
            response_card,
        },
    }
}

pub fn confirm_intent(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: SlotSet,
    message: Option<Message>,
    response_card: Option<ResponseCard>,
) -> Directive {
    Directive {
        session_attributes,
        dialog_action: DialogAction::ConfirmIntent {
            intent_name: intent_name.into(),
            slots,
            message,
            response_card,
        },
    }
}

pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
    response_card: Option<ResponseCard>,
) -> Directive {
    Directive {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
            response_card,
        },
    }
}

pub fn delegate(session_attributes: SessionAttributes, slots: SlotSet) -> Directive {
    Directive {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}
