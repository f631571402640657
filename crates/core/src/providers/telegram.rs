use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::traits::{ApiResponse, ChatApi};
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.telegram.org";

/// Telegram Bot API transport. Only `sendMessage` is needed; the bot
/// token is part of the URL path, so reqwest errors must never surface
/// with their URL attached (see `CoreError::from<reqwest::Error>`).
pub struct TelegramApi {
    client: Client,
    token: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

impl TelegramApi {
    pub fn new(token: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            token: token.into(),
        }
    }
}

#[async_trait]
impl ChatApi for TelegramApi {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<ApiResponse, CoreError> {
        let url = format!("{BASE_URL}/bot{}/sendMessage", self.token);

        let resp = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id,
                text,
                parse_mode: "HTML",
            })
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(ApiResponse { status, body })
    }
}
