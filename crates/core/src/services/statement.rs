use std::time::Duration;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::transaction::Transaction;
use crate::providers::traits::BankApi;
use crate::time::TimeRange;

/// Escalating backoff schedule for retriable statement failures.
pub const RETRY_DELAYS: [Duration; 3] = [
    Duration::from_secs(5),
    Duration::from_secs(15),
    Duration::from_secs(30),
];

/// Total request budget per fetch, delayed retries included.
const MAX_ATTEMPTS: usize = 3;

/// Fetches statement rows through a [`BankApi`] with a bounded retry loop.
///
/// Classification of a reply:
/// - 401/403 — credentials are wrong; retrying cannot help, fail at once.
/// - 429 — rate limited; sleep the next backoff delay and retry.
/// - 5xx — upstream fault; same schedule, retried like 429.
/// - any other non-2xx — not transient, fail at once with the body text.
/// - transport errors — retried within the same budget, without a delay;
///   the last one is surfaced when the budget runs out.
pub struct StatementService {
    api: Box<dyn BankApi>,
    retry_delays: [Duration; 3],
}

impl StatementService {
    pub fn new(api: Box<dyn BankApi>) -> Self {
        Self::with_retry_delays(api, RETRY_DELAYS)
    }

    /// Same loop with a custom backoff schedule. Tests pass zero delays.
    pub fn with_retry_delays(api: Box<dyn BankApi>, retry_delays: [Duration; 3]) -> Self {
        Self { api, retry_delays }
    }

    /// Fetch all transactions for one account inside `range`.
    pub async fn fetch_statement(
        &self,
        account_id: &str,
        range: TimeRange,
    ) -> Result<Vec<Transaction>, CoreError> {
        let mut last_error = None;

        for attempt in 0..MAX_ATTEMPTS {
            let final_attempt = attempt + 1 == MAX_ATTEMPTS;

            let reply = match self
                .api
                .request_statement(account_id, range.start, range.end)
                .await
            {
                Ok(reply) => reply,
                Err(e) => {
                    if final_attempt {
                        return Err(e);
                    }
                    warn!(error = %e, attempt = attempt + 1, "statement request failed, retrying");
                    last_error = Some(e);
                    continue;
                }
            };

            match reply.status {
                401 | 403 => return Err(CoreError::Auth { status: reply.status }),
                429 => {
                    if final_attempt {
                        return Err(CoreError::RateLimit {
                            attempts: MAX_ATTEMPTS,
                        });
                    }
                    let delay = self.retry_delays[attempt];
                    warn!(
                        delay_secs = delay.as_secs(),
                        "Monobank rate limit (429), retrying after delay"
                    );
                    tokio::time::sleep(delay).await;
                }
                status if status >= 500 => {
                    if final_attempt {
                        return Err(CoreError::Server {
                            status,
                            attempts: attempt + 1,
                        });
                    }
                    let delay = self.retry_delays[attempt];
                    warn!(
                        status,
                        delay_secs = delay.as_secs(),
                        "Monobank server error, retrying after delay"
                    );
                    tokio::time::sleep(delay).await;
                }
                status if !(200..300).contains(&status) => {
                    return Err(CoreError::Api {
                        status,
                        body: reply.body,
                    });
                }
                _ => return Ok(serde_json::from_str(&reply.body)?),
            }
        }

        Err(last_error.unwrap_or_else(|| CoreError::Network("retry budget exhausted".to_string())))
    }
}
