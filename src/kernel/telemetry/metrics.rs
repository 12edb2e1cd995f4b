use std::collections::{BTreeMap, VecDeque};

use super::event::{RejectionKind, TelemetryEvent};
use crate::intent::types::IntentKind;
use crate::kernel::directive::DirectiveKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetrySnapshot {
    pub directive_stats: DirectiveStats,
    pub turns_by_intent: BTreeMap<IntentKind, u64>,
    pub rejections: BTreeMap<RejectionKind, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveStats {
    pub elicitations: u64,
    pub confirmations: u64,
    pub closes: u64,
    pub delegations: u64,
}

impl DirectiveStats {
    pub fn total(&self) -> u64 {
        self.elicitations + self.confirmations + self.closes + self.delegations
    }
}

impl TelemetrySnapshot {
    pub fn total_rejected(&self) -> u64 {
        self.rejections.values().sum()
    }
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::DirectiveIssued { intent, kind } => {
                *snap.turns_by_intent.entry(*intent).or_default() += 1;
                match kind {
                    DirectiveKind::ElicitSlot => snap.directive_stats.elicitations += 1,
                    DirectiveKind::ConfirmIntent => snap.directive_stats.confirmations += 1,
                    DirectiveKind::Close => snap.directive_stats.closes += 1,
                    DirectiveKind::Delegate => snap.directive_stats.delegations += 1,
                }
            }
            TelemetryEvent::TurnRejected { reason } => {
                *snap.rejections.entry(*reason).or_default() += 1;
            }
        }
    }

    snap
}
