// ═══════════════════════════════════════════════════════════════════
// Report Tests — expense filtering, aggregation, ordering, rendering
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use mono_report_core::models::transaction::Transaction;
use mono_report_core::services::report::{format_amount, generate_report, statement_stats};
use mono_report_core::time::{day_range, TimeRange};

fn tx(id: &str, amount: i64, currency_code: u16, mcc: i32) -> Transaction {
    Transaction {
        id: id.to_string(),
        time: 1_741_989_600,
        description: String::new(),
        mcc,
        original_mcc: None,
        amount,
        operation_amount: amount,
        currency_code,
        commission_rate: 0,
        cashback_amount: None,
        balance: 0,
        hold: Some(false),
    }
}

/// 15.03.2025, a plain 24-hour day in Kyiv.
fn fixed_range() -> TimeRange {
    day_range(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
}

/// Parse `"2 600.00"` back into minor units.
fn minor_units(amount: &str) -> i64 {
    let compact: String = amount.chars().filter(|c| *c != ' ').collect();
    let (whole, cents) = compact.split_once('.').unwrap();
    whole.parse::<i64>().unwrap() * 100 + cents.parse::<i64>().unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Amount formatting
// ═══════════════════════════════════════════════════════════════════

mod amounts {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_amount(250_000), "2 500.00");
    }

    #[test]
    fn two_decimals_always() {
        assert_eq!(format_amount(5_000), "50.00");
    }

    #[test]
    fn sub_hryvnia_amount() {
        assert_eq!(format_amount(99), "0.99");
    }

    #[test]
    fn millions_get_two_separators() {
        assert_eq!(format_amount(123_456_789), "1 234 567.89");
    }

    #[test]
    fn negative_input_formats_as_absolute() {
        assert_eq!(format_amount(-250_000), "2 500.00");
    }

    #[test]
    fn zero() {
        assert_eq!(format_amount(0), "0.00");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Filtering
// ═══════════════════════════════════════════════════════════════════

mod filtering {
    use super::*;

    #[test]
    fn credits_and_foreign_currency_are_invisible() {
        let transactions = vec![
            tx("salary", 1_000_000, 980, 4829),
            tx("usd", -5_000, 840, 5411),
            tx("coffee", -4_200, 980, 5814),
        ];
        let report = generate_report(&transactions, fixed_range());

        assert!(report.contains("Разом: 42.00 грн (1 транзакцій)"));
        assert!(!report.contains("Перекази"));
    }

    #[test]
    fn only_excluded_rows_means_no_expenses() {
        let transactions = vec![
            tx("salary", 1_000_000, 980, 4829),
            tx("usd", -5_000, 840, 5411),
        ];
        let report = generate_report(&transactions, fixed_range());
        assert!(report.ends_with("Сьогодні витрат не було."));
    }

    #[test]
    fn stats_count_everything_but_sum_only_expenses() {
        let transactions = vec![
            tx("salary", 1_000_000, 980, 4829),
            tx("usd", -5_000, 840, 5411),
            tx("coffee", -4_200, 980, 5814),
            tx("food", -10_000, 980, 5411),
        ];
        let stats = statement_stats(&transactions);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.expenses, 2);
        assert_eq!(stats.expense_amount, 14_200);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Rendering
// ═══════════════════════════════════════════════════════════════════

mod rendering {
    use super::*;

    #[test]
    fn empty_day_is_a_fixed_two_line_report() {
        let report = generate_report(&[], fixed_range());
        assert_eq!(report, "📅 Витрати за 15.03.2025\n\nСьогодні витрат не було.");
    }

    #[test]
    fn full_report_layout() {
        let transactions = vec![
            tx("a", -250_000, 980, 5411),
            tx("b", -10_000, 980, 5499),
            tx("c", -35_000, 980, 4121),
        ];
        let report = generate_report(&transactions, fixed_range());
        assert_eq!(
            report,
            "📅 Витрати за 15.03.2025\n\n\
             Разом: 2 950.00 грн (3 транзакцій)\n\n\
             🛒 Продукти: 2 600.00 грн (2)\n\
             🚕 Таксі: 350.00 грн (1)\n"
        );
    }

    #[test]
    fn single_home_debit_among_foreign_rows() {
        let transactions = vec![
            tx("usd", -7_700, 840, 5411),
            tx("lunch", -10_000, 980, 5812),
        ];
        let report = generate_report(&transactions, fixed_range());
        assert!(report.contains("Разом: 100.00 грн (1 транзакцій)"));
        assert!(report.contains("🍔 Кафе та ресторани: 100.00 грн (1)"));
    }

    #[test]
    fn date_label_follows_the_reported_range() {
        let yesterday = day_range(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        let report = generate_report(&[], yesterday);
        assert!(report.starts_with("📅 Витрати за 14.03.2025\n"));
    }

    #[test]
    fn unknown_mcc_lands_in_fallback_bucket() {
        let transactions = vec![tx("mystery", -500, 980, 1234)];
        let report = generate_report(&transactions, fixed_range());
        assert!(report.contains("❓ Інше: 5.00 грн (1)"));
    }

    #[test]
    fn original_mcc_overrides_category() {
        let mut t = tx("ride", -500, 980, 5411);
        t.original_mcc = Some(4121);
        let report = generate_report(&[t], fixed_range());
        assert!(report.contains("🚕 Таксі"));
        assert!(!report.contains("🛒 Продукти"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ordering and conservation
// ═══════════════════════════════════════════════════════════════════

mod ordering {
    use super::*;

    #[test]
    fn categories_sort_by_descending_total() {
        let transactions = vec![
            tx("small", -1_000, 980, 5814),
            tx("large", -90_000, 980, 4121),
        ];
        let report = generate_report(&transactions, fixed_range());
        let taxi = report.find("🚕 Таксі").unwrap();
        let cafe = report.find("🍔 Кафе та ресторани").unwrap();
        assert!(taxi < cafe);
    }

    #[test]
    fn equal_totals_keep_first_seen_order() {
        let transactions = vec![
            tx("cafe", -5_000, 980, 5814),
            tx("taxi", -5_000, 980, 4121),
        ];
        let report = generate_report(&transactions, fixed_range());
        let cafe = report.find("🍔 Кафе та ресторани").unwrap();
        let taxi = report.find("🚕 Таксі").unwrap();
        assert!(cafe < taxi);

        // Swapping arrival order swaps the report order too.
        let swapped: Vec<_> = transactions.into_iter().rev().collect();
        let report = generate_report(&swapped, fixed_range());
        let cafe = report.find("🍔 Кафе та ресторани").unwrap();
        let taxi = report.find("🚕 Таксі").unwrap();
        assert!(taxi < cafe);
    }

    #[test]
    fn category_totals_sum_to_the_reported_total() {
        let transactions = vec![
            tx("a", -123_456, 980, 5411),
            tx("b", -7_800, 980, 4121),
            tx("c", -990, 980, 5814),
            tx("d", -55_500, 980, 1234),
            tx("e", -1_200, 980, 5499),
        ];
        let report = generate_report(&transactions, fixed_range());

        let mut lines = report.lines();
        let summary = lines.find(|l| l.starts_with("Разом: ")).unwrap();
        let total = minor_units(
            summary
                .strip_prefix("Разом: ")
                .and_then(|s| s.split(" грн").next())
                .unwrap(),
        );

        let category_sum: i64 = lines
            .filter(|l| l.contains(" грн ("))
            .map(|l| {
                let amount = l.split(": ").nth(1).unwrap().split(" грн").next().unwrap();
                minor_units(amount)
            })
            .sum();

        assert_eq!(total, 188_946); // 123456 + 7800 + 990 + 55500 + 1200
        assert_eq!(category_sum, total);
    }
}
