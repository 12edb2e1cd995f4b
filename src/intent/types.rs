use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::kernel::error::HookError;

/// Closed set of intents this hook serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntentKind {
    OrderBeverage,
    ApplyLoan,
    Help,
}

impl IntentKind {
    pub const fn all() -> [IntentKind; 3] {
        [IntentKind::OrderBeverage, IntentKind::ApplyLoan, IntentKind::Help]
    }

    /// Intent name as configured on the bot.
    pub const fn name(self) -> &'static str {
        match self {
            IntentKind::OrderBeverage => "cafeOrderBeverageIntent",
            IntentKind::ApplyLoan => "fiuApplyLoanIntent",
            IntentKind::Help => "fiuHelpIntent",
        }
    }

    /// Exact, case-sensitive lookup. Unknown names fail closed.
    pub fn resolve(name: &str) -> Result<Self, HookError> {
        Self::all()
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| HookError::UnsupportedIntent {
                name: name.to_string(),
            })
    }
}

impl FromStr for IntentKind {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
