use async_trait::async_trait;

use crate::errors::CoreError;

/// A raw HTTP reply: status plus body text, before any classification.
/// Retry decisions belong to the services, not the transport.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait abstraction over the banking API transport.
///
/// The production implementation speaks to Monobank over HTTPS; tests
/// script replies instead. One method, one request — the bounded retry
/// loop lives above this seam in `StatementService`.
#[async_trait]
pub trait BankApi: Send + Sync {
    /// Request the statement rows for `[from, to)` on one account.
    async fn request_statement(
        &self,
        account_id: &str,
        from: i64,
        to: i64,
    ) -> Result<ApiResponse, CoreError>;
}

/// Trait abstraction over the chat delivery transport.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send a single already-sized message to a chat.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<ApiResponse, CoreError>;
}
