use super::category::CategoryInfo;
use super::transaction::Transaction;

/// Running totals for one display category while a report is built.
/// Keyed externally by [`CategoryInfo::label`] so that different MCCs
/// mapping to the same category merge into a single line.
#[derive(Debug, Clone)]
pub struct CategoryAggregate {
    pub category: CategoryInfo,

    /// Sum of absolute expense amounts, minor units.
    pub total: i64,

    pub count: usize,

    /// The statement rows behind `total`, in statement order.
    pub transactions: Vec<Transaction>,
}

impl CategoryAggregate {
    pub fn new(category: CategoryInfo) -> Self {
        Self {
            category,
            total: 0,
            count: 0,
            transactions: Vec::new(),
        }
    }
}

/// Statement-level counters, for logging only. The rendered report
/// derives its own figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementStats {
    /// All rows in the statement, expenses or not.
    pub total: usize,

    /// Rows that passed the expense filter.
    pub expenses: usize,

    /// Sum of absolute expense amounts, minor units.
    pub expense_amount: i64,
}
