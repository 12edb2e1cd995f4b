use regex::Regex;

use crate::kernel::directive::Message;
use crate::kernel::error::HookError;
use crate::kernel::event::{slot_value, SlotSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Re-elicit this slot, optionally with a clarifying prompt.
    NeedsSlot {
        slot_name: String,
        prompt: Option<Message>,
    },
    Acceptable,
}

/// How a single slot fares against its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotVerdict {
    Accepted,
    /// Not collected yet: absent, null or empty.
    Missing,
    /// Collected, but the value fails the check.
    Invalid,
}

#[derive(Debug, Clone)]
pub enum SlotCheck {
    /// Finite number strictly greater than zero.
    PositiveNumber,
    /// Case-sensitive literal.
    Exactly(&'static str),
    /// Unanchored regex match.
    Matches(Regex),
}

impl SlotCheck {
    pub fn matches(pattern: &str, slot: &'static str) -> Result<Self, HookError> {
        Regex::new(pattern)
            .map(SlotCheck::Matches)
            .map_err(|source| HookError::InvalidPattern { slot, source })
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            SlotCheck::PositiveNumber => value
                .trim()
                .parse::<f64>()
                .map(|n| n.is_finite() && n > 0.0)
                .unwrap_or(false),
            SlotCheck::Exactly(expected) => value == *expected,
            SlotCheck::Matches(re) => re.is_match(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotRule {
    pub slot: &'static str,
    pub check: SlotCheck,
    /// Shown only when a value was given and rejected.
    pub invalid_message: Option<&'static str>,
}

impl SlotRule {
    pub fn new(slot: &'static str, check: SlotCheck) -> Self {
        Self {
            slot,
            check,
            invalid_message: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.invalid_message = Some(message);
        self
    }

    pub fn verdict(&self, slots: &SlotSet) -> SlotVerdict {
        match slot_value(slots, self.slot) {
            Some(value) if self.check.accepts(value) => SlotVerdict::Accepted,
            Some(_) => SlotVerdict::Invalid,
            None => SlotVerdict::Missing,
        }
    }
}

/// Runs rules in order and stops at the first slot that is missing or invalid.
pub fn evaluate(rules: &[SlotRule], slots: &SlotSet) -> ValidationOutcome {
    for rule in rules {
        let prompt = match rule.verdict(slots) {
            SlotVerdict::Accepted => continue,
            // Platform asks with its own slot prompt.
            SlotVerdict::Missing => None,
            SlotVerdict::Invalid => rule.invalid_message.map(Message::plain_text),
        };
        return ValidationOutcome::NeedsSlot {
            slot_name: rule.slot.to_string(),
            prompt,
        };
    }
    ValidationOutcome::Acceptable
}
