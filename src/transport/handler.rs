use thiserror::Error;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use super::wire::{CodeHookEvent, ErrorEnvelope};
use crate::intent::types::IntentKind;
use crate::kernel::config::HookConfig;
use crate::kernel::directive::Directive;
use crate::kernel::error::{HookError, HookResult};
use crate::kernel::reactor::Reactor;
use crate::kernel::telemetry::event::{RejectionKind, TelemetryEvent};
use crate::kernel::telemetry::recorder::TelemetryRecorder;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid Bot Name: expected {expected}, got {actual}")]
    InvalidBotName { expected: String, actual: String },

    #[error("malformed code hook event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    #[error(transparent)]
    Hook(#[from] HookError),

    #[error("failed to encode directive: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TransportError {
    /// Stable name reported to the host in the error envelope.
    pub fn error_type(&self) -> &'static str {
        match self {
            TransportError::InvalidBotName { .. } => "InvalidBotName",
            TransportError::MalformedEvent(_) => "MalformedEvent",
            TransportError::Hook(HookError::UnsupportedIntent { .. }) => "UnsupportedIntent",
            TransportError::Hook(HookError::InvalidPattern { .. }) => "InvalidPattern",
            TransportError::Encode(_) => "EncodeFailure",
        }
    }

    pub fn rejection_kind(&self) -> RejectionKind {
        match self {
            TransportError::InvalidBotName { .. } => RejectionKind::InvalidBotName,
            TransportError::MalformedEvent(_) => RejectionKind::MalformedEvent,
            TransportError::Hook(HookError::UnsupportedIntent { .. }) => {
                RejectionKind::UnsupportedIntent
            }
            TransportError::Hook(HookError::InvalidPattern { .. }) => RejectionKind::InvalidPattern,
            TransportError::Encode(_) => RejectionKind::EncodeFailure,
        }
    }
}

impl From<&TransportError> for ErrorEnvelope {
    fn from(err: &TransportError) -> Self {
        Self {
            error_type: err.error_type().to_string(),
            error_message: err.to_string(),
        }
    }
}

// Written when the envelope itself cannot be encoded, so the host still gets one line.
const ENVELOPE_FALLBACK: &str =
    r#"{"errorType":"EncodeFailure","errorMessage":"failed to encode error envelope"}"#;

pub(crate) fn encode_envelope(envelope: &ErrorEnvelope) -> String {
    serde_json::to_string(envelope).unwrap_or_else(|e| {
        warn!(error_type = %envelope.error_type, "failed to encode error envelope: {}", e);
        ENVELOPE_FALLBACK.to_string()
    })
}

/// Wraps the reactor for one host: bot gate, per-turn logging, error reporting.
/// The telemetry buffer is the only state kept between turns.
pub struct HookHandler {
    config: HookConfig,
    reactor: Reactor,
    telemetry: TelemetryRecorder,
}

impl HookHandler {
    pub fn new(config: HookConfig) -> HookResult<Self> {
        Ok(Self {
            config,
            reactor: Reactor::new()?,
            telemetry: TelemetryRecorder::new(),
        })
    }

    pub fn telemetry(&self) -> &TelemetryRecorder {
        &self.telemetry
    }

    pub fn handle_event(&mut self, event: CodeHookEvent) -> Result<Directive, TransportError> {
        let result = self.process(event);
        self.observe(&result);
        result.map(|(_, directive)| directive)
    }

    /// Decodes one raw event and returns the encoded directive.
    pub fn handle_json(&mut self, raw: &str) -> Result<String, TransportError> {
        let result = serde_json::from_str::<CodeHookEvent>(raw)
            .map_err(TransportError::MalformedEvent)
            .and_then(|event| self.process(event));
        self.observe(&result);
        let (_, directive) = result?;
        serde_json::to_string(&directive).map_err(|e| {
            let err = TransportError::Encode(e);
            self.reject(&err);
            err
        })
    }

    /// Like `handle_json`, but failures are folded into the error envelope.
    pub fn respond_line(&mut self, raw: &str) -> String {
        match self.handle_json(raw) {
            Ok(body) => body,
            Err(err) => encode_envelope(&ErrorEnvelope::from(&err)),
        }
    }

    fn process(&self, event: CodeHookEvent) -> Result<(IntentKind, Directive), TransportError> {
        let span = info_span!("turn", turn_id = %Uuid::new_v4());
        let _guard = span.enter();

        debug!(event = ?event, "received code hook event");

        if event.bot.name != self.config.bot_name {
            return Err(TransportError::InvalidBotName {
                expected: self.config.bot_name.clone(),
                actual: event.bot.name,
            });
        }

        let request = event.into_request();
        info!(user_id = %request.caller_id, intent = %request.intent_name, "dispatch");

        let (intent, directive) = self.reactor.turn(&request)?;
        info!(kind = ?directive.kind(), "directive issued");
        Ok((intent, directive))
    }

    fn observe(&mut self, result: &Result<(IntentKind, Directive), TransportError>) {
        match result {
            Ok((intent, directive)) => self.telemetry.record(TelemetryEvent::DirectiveIssued {
                intent: *intent,
                kind: directive.kind(),
            }),
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: &TransportError) {
        warn!(error_type = err.error_type(), "turn rejected: {}", err);
        self.telemetry.record(TelemetryEvent::TurnRejected {
            reason: err.rejection_kind(),
        });
    }
}
