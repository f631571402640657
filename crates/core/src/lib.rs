pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod time;

use errors::CoreError;
use models::transaction::Transaction;
use providers::monobank::MonobankApi;
use providers::telegram::TelegramApi;
use services::delivery::DeliveryService;
use services::statement::StatementService;
use time::TimeRange;

/// Main entry point for the mono-report core library.
/// Wires the statement fetcher and the delivery channel for one
/// account/chat pair; the report pipeline itself is pure.
#[must_use]
pub struct ExpenseReporter {
    statements: StatementService,
    delivery: DeliveryService,
    account_id: String,
    chat_id: String,
}

impl ExpenseReporter {
    pub fn new(
        bank_token: impl Into<String>,
        account_id: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            statements: StatementService::new(Box::new(MonobankApi::new(bank_token))),
            delivery: DeliveryService::new(Box::new(TelegramApi::new(bot_token))),
            account_id: account_id.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Fetch the account's transactions inside `range`, with the bounded
    /// retry policy around the Monobank call.
    pub async fn fetch_statement(&self, range: TimeRange) -> Result<Vec<Transaction>, CoreError> {
        self.statements
            .fetch_statement(&self.account_id, range)
            .await
    }

    /// Render the daily expense report for `range`.
    pub fn generate_report(&self, transactions: &[Transaction], range: TimeRange) -> String {
        services::report::generate_report(transactions, range)
    }

    /// Send the rendered report to the configured chat, splitting it
    /// when it exceeds the message size limit.
    pub async fn deliver_report(&self, text: &str) -> Result<(), CoreError> {
        self.delivery.deliver(&self.chat_id, text).await
    }
}
