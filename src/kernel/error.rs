use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// Intent name outside the closed set this hook serves. Fatal for the turn.
    #[error("Intent with name {name} not supported")]
    UnsupportedIntent { name: String },

    #[error("invalid slot pattern for {slot}: {source}")]
    InvalidPattern {
        slot: &'static str,
        #[source]
        source: regex::Error,
    },
}

pub type HookResult<T> = Result<T, HookError>;
