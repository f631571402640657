use thiserror::Error;

/// Unified error type for the entire mono-report-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
///
/// User-facing messages keep the wording the bot has always shipped,
/// including the Ukrainian hint fragments the CLI keys off for its
/// credential diagnostics.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ───────────────────────────────────────────────
    #[error("{0} не встановлено")]
    Config(String),

    // ── Monobank API ────────────────────────────────────────────────
    #[error("Monobank API: Unauthorized ({status}). Перевірте правильність MONO_TOKEN.")]
    Auth { status: u16 },

    #[error("Monobank API: Rate limit exceeded. Спробуйте пізніше.")]
    RateLimit { attempts: usize },

    #[error("Monobank API: Server error ({status})")]
    Server { status: u16, attempts: usize },

    #[error("Monobank API: {status} - {body}")]
    Api { status: u16, body: String },

    // ── Telegram API ────────────────────────────────────────────────
    #[error("Telegram API: {status} - {body}")]
    Delivery { status: u16, body: String },

    // ── Transport / Decoding ────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip the URL from the error text before it can reach logs or
        // the terminal: the Telegram bot token lives in the URL path and
        // the Monobank token could appear in redirects.
        CoreError::Network(e.without_url().to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
