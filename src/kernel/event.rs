use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type AttributeMap = BTreeMap<String, String>;

/// Opaque platform state carried across turns. Never modified here.
/// `None` stands for a null or absent value on the wire and is echoed back as null.
pub type SessionAttributes = Option<AttributeMap>;

/// Slot name -> collected value. `None` means not yet collected.
pub type SlotSet = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationPhase {
    /// Platform is still gathering slots and asks for guidance.
    Collecting,
    /// All slots are in; platform asks for the final action.
    Fulfilling,
}

/// Input to one dialog turn, after the transport has accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub session_attributes: SessionAttributes,
    pub phase: InvocationPhase,
    pub intent_name: String,
    pub slots: SlotSet,
    pub caller_id: String,
}

impl DialogRequest {
    pub fn new(phase: InvocationPhase, intent_name: &str, caller_id: &str) -> Self {
        Self {
            session_attributes: None,
            phase,
            intent_name: intent_name.to_string(),
            slots: SlotSet::new(),
            caller_id: caller_id.to_string(),
        }
    }

    pub fn with_slot(mut self, name: &str, value: Option<&str>) -> Self {
        self.slots.insert(name.to_string(), value.map(str::to_string));
        self
    }

    pub fn with_session_attribute(mut self, key: &str, value: &str) -> Self {
        self.session_attributes
            .get_or_insert_with(AttributeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Collected value of a slot. Empty strings count as not collected.
    pub fn slot(&self, name: &str) -> Option<&str> {
        slot_value(&self.slots, name)
    }
}

pub fn slot_value<'a>(slots: &'a SlotSet, name: &str) -> Option<&'a str> {
    slots
        .get(name)
        .and_then(|v| v.as_deref())
        .filter(|v| !v.is_empty())
}
