use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::traits::{ApiResponse, BankApi};
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.monobank.ua";

/// Monobank personal API transport.
///
/// - **Auth**: personal token in the `X-Token` header.
/// - **Endpoint**: `GET /personal/statement/{account}/{from}/{to}`.
/// - **Rate limits**: one statement request per minute per token; the
///   retry policy for 429s lives in `StatementService`.
pub struct MonobankApi {
    client: Client,
    token: String,
}

impl MonobankApi {
    pub fn new(token: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            token: token.into(),
        }
    }
}

#[async_trait]
impl BankApi for MonobankApi {
    async fn request_statement(
        &self,
        account_id: &str,
        from: i64,
        to: i64,
    ) -> Result<ApiResponse, CoreError> {
        let url = format!("{BASE_URL}/personal/statement/{account_id}/{from}/{to}");

        let resp = self
            .client
            .get(&url)
            .header("X-Token", &self.token)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(ApiResponse { status, body })
    }
}
