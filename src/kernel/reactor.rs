use tracing::debug;

use super::directive::{close, delegate, elicit_slot, Directive, FulfillmentState, Message};
use super::error::HookResult;
use super::event::{DialogRequest, InvocationPhase};
use crate::intent::catalog::Catalog;
use crate::intent::rules::ValidationOutcome;
use crate::intent::types::IntentKind;

/// Turn state machine. Holds only the immutable rule catalog, so one
/// instance can serve any number of concurrent turns.
#[derive(Debug, Clone)]
pub struct Reactor {
    catalog: Catalog,
}

impl Reactor {
    pub fn new() -> HookResult<Self> {
        Ok(Self {
            catalog: Catalog::new()?,
        })
    }

    /// Pure step: one request in, exactly one directive out.
    ///
    /// Dispatch runs before the phase is inspected, so an unknown intent
    /// fails in either phase.
    pub fn respond(&self, request: &DialogRequest) -> HookResult<Directive> {
        self.turn(request).map(|(_, directive)| directive)
    }

    /// Same as `respond`, also reporting which intent the request resolved to.
    pub fn turn(&self, request: &DialogRequest) -> HookResult<(IntentKind, Directive)> {
        let intent = IntentKind::resolve(&request.intent_name)?;
        let session_attributes = request.session_attributes.clone();

        let directive = match request.phase {
            InvocationPhase::Collecting => match self.catalog.validate(intent, &request.slots) {
                ValidationOutcome::NeedsSlot { slot_name, prompt } => {
                    debug!(%intent, slot = %slot_name, "eliciting slot");
                    elicit_slot(
                        session_attributes,
                        &request.intent_name,
                        request.slots.clone(),
                        slot_name,
                        prompt,
                        None,
                    )
                }
                ValidationOutcome::Acceptable => {
                    debug!(%intent, "slots acceptable, delegating");
                    delegate(session_attributes, request.slots.clone())
                }
            },
            InvocationPhase::Fulfilling => close(
                session_attributes,
                FulfillmentState::Fulfilled,
                Message::plain_text(self.catalog.completion_for(intent)),
                None,
            ),
        };

        Ok((intent, directive))
    }
}
