//! Turns a day's statement into the Telegram-ready text report.
//!
//! The whole pipeline is pure: filter to true expenses, resolve display
//! categories, aggregate in first-seen order, sort by descending total,
//! render. Amounts stay in integer minor units until the final
//! formatting step.

use std::collections::HashMap;

use crate::models::category::category_for_mcc;
use crate::models::report::{CategoryAggregate, StatementStats};
use crate::models::transaction::Transaction;
use crate::time::{format_date, TimeRange};

/// Render the daily expense report for `range`. The date label always
/// comes from the range start, so a yesterday report carries
/// yesterday's date.
pub fn generate_report(transactions: &[Transaction], range: TimeRange) -> String {
    let expenses = filter_expenses(transactions);
    let date = format_date(range.start);

    if expenses.is_empty() {
        return format!("📅 Витрати за {date}\n\nСьогодні витрат не було.");
    }

    let categories = aggregate_by_category(&expenses);

    let total_amount: i64 = expenses.iter().map(|tx| tx.amount.abs()).sum();
    let total_count = expenses.len();

    let mut report = format!("📅 Витрати за {date}\n\n");
    report.push_str(&format!(
        "Разом: {} грн ({total_count} транзакцій)\n\n",
        format_amount(total_amount)
    ));

    for aggregate in &categories {
        report.push_str(&format!(
            "{} {}: {} грн ({})\n",
            aggregate.category.emoji,
            aggregate.category.name,
            format_amount(aggregate.total),
            aggregate.count
        ));
    }

    report
}

/// Statement-level counters for progress logging.
pub fn statement_stats(transactions: &[Transaction]) -> StatementStats {
    let expenses = filter_expenses(transactions);
    StatementStats {
        total: transactions.len(),
        expenses: expenses.len(),
        expense_amount: expenses.iter().map(|tx| tx.amount.abs()).sum(),
    }
}

/// Format minor units as a major-unit amount with two decimals and a
/// space every three digits of the integer part: `250000` → `"2 500.00"`.
pub fn format_amount(minor: i64) -> String {
    let minor = minor.abs();
    let whole = minor / 100;
    let cents = minor % 100;
    format!("{}.{cents:02}", group_thousands(whole))
}

fn filter_expenses(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().filter(|tx| tx.is_expense()).collect()
}

/// Group expenses by display-category label, accumulating totals and
/// membership. Insertion order is first-seen order, which later keeps
/// the descending sort stable for equal totals.
fn aggregate_by_category(expenses: &[&Transaction]) -> Vec<CategoryAggregate> {
    let mut aggregates: Vec<CategoryAggregate> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for tx in expenses {
        let category = category_for_mcc(tx.effective_mcc());
        let label = category.label();

        let idx = *index_by_label.entry(label).or_insert_with(|| {
            aggregates.push(CategoryAggregate::new(category.clone()));
            aggregates.len() - 1
        });

        let aggregate = &mut aggregates[idx];
        aggregate.total += tx.amount.abs();
        aggregate.count += 1;
        aggregate.transactions.push((*tx).clone());
    }

    // Vec::sort_by is stable: equal totals keep first-seen order.
    aggregates.sort_by(|a, b| b.total.cmp(&a.total));
    aggregates
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
