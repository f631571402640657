use std::env;

use mono_report_core::errors::CoreError;

/// Runtime configuration, read entirely from environment variables
/// before any network activity. All four secrets are required; an empty
/// value counts as missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub mono_token: String,
    pub mono_account_id: String,
    pub tg_bot_token: String,
    pub tg_chat_id: String,
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self {
            mono_token: require("MONO_TOKEN")?,
            mono_account_id: require("MONO_ACCOUNT_ID")?,
            tg_bot_token: require("TG_BOT_TOKEN")?,
            tg_chat_id: require("TG_CHAT_ID")?,
            dry_run: env::var("DRY_RUN").map(|v| v == "true").unwrap_or(false),
        })
    }
}

fn require(name: &str) -> Result<String, CoreError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CoreError::Config(name.to_string()))
}
