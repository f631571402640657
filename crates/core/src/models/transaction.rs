use serde::{Deserialize, Serialize};

/// ISO 4217 numeric code for the account's home currency (UAH).
pub const UAH_CURRENCY_CODE: u16 = 980;

/// One statement row exactly as the Monobank personal API returns it.
/// Amounts are signed integers in minor units (kopiykas); a negative
/// `amount` is a debit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    /// Seconds since the Unix epoch.
    pub time: i64,

    pub description: String,

    /// Merchant category code assigned by Monobank.
    pub mcc: i32,

    /// Merchant category code as sent by the payment network, when it
    /// differs from `mcc`. Takes precedence over `mcc` for reporting.
    #[serde(default)]
    pub original_mcc: Option<i32>,

    /// Signed amount in the account currency, minor units.
    pub amount: i64,

    /// Signed amount in the transaction's original currency, minor units.
    pub operation_amount: i64,

    /// ISO 4217 numeric currency code of the transaction.
    pub currency_code: u16,

    pub commission_rate: i64,

    #[serde(default)]
    pub cashback_amount: Option<i64>,

    /// Account balance after this transaction, minor units.
    pub balance: i64,

    #[serde(default)]
    pub hold: Option<bool>,
}

impl Transaction {
    /// The category code used for reporting: `original_mcc` when present
    /// and non-zero, otherwise `mcc`. A zero `original_mcc` is treated as
    /// absent, never as an explicit code.
    pub fn effective_mcc(&self) -> i32 {
        self.original_mcc.filter(|&mcc| mcc != 0).unwrap_or(self.mcc)
    }

    /// True expenses only: debits in the home currency. Credits and
    /// foreign-currency rows are excluded from every report figure.
    pub fn is_expense(&self) -> bool {
        self.amount < 0 && self.currency_code == UAH_CURRENCY_CODE
    }
}
