pub const DEFAULT_BOT_NAME: &str = "JackSparrow";
pub const BOT_NAME_ENV: &str = "CODEHOOK_BOT_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Events addressed to any other bot are rejected before dispatch.
    pub bot_name: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
        }
    }
}

impl HookConfig {
    pub fn new(bot_name: &str) -> Self {
        Self {
            bot_name: bot_name.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BOT_NAME_ENV) {
            Some(name) if !name.trim().is_empty() => Self::new(name.trim()),
            _ => Self::default(),
        }
    }
}
