use chrono::NaiveDate;
use tally_core::ledger::{Ledger, RecordKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn ids_are_assigned_sequentially_from_zero() {
    let mut ledger = Ledger::new();
    for expected in 0..5 {
        let id = ledger.add(1.0, "Misc", RecordKind::Expense);
        assert_eq!(id, expected);
    }

    let ids: Vec<u64> = ledger.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn totals_split_by_kind() {
    let mut ledger = Ledger::new();
    ledger.add(50.0, "Salary", RecordKind::Income);
    ledger.add(12.5, "Food", RecordKind::Expense);
    ledger.add(7.5, "Transport", RecordKind::Expense);

    assert_eq!(ledger.total(&RecordKind::Income), 50.0);
    assert_eq!(ledger.total(&RecordKind::Expense), 20.0);
}

#[test]
fn totals_on_empty_ledger_are_zero() {
    let ledger = Ledger::new();
    assert_eq!(ledger.total(&RecordKind::Income), 0.0);
    assert_eq!(ledger.total(&RecordKind::Expense), 0.0);
    assert_eq!(ledger.total(&RecordKind::parse("anything")), 0.0);
}

#[test]
fn unrecognized_kinds_count_toward_neither_total() {
    let mut ledger = Ledger::new();
    ledger.add(50.0, "Salary", RecordKind::Income);
    ledger.add(10.0, "Savings", RecordKind::parse("transfer"));
    ledger.add(5.0, "Salary", RecordKind::parse("Income"));

    assert_eq!(ledger.total(&RecordKind::Income), 50.0);
    assert_eq!(ledger.total(&RecordKind::Expense), 0.0);
    assert_eq!(ledger.total(&RecordKind::parse("transfer")), 10.0);
    assert_eq!(ledger.total(&RecordKind::parse("Income")), 5.0);
}

#[test]
fn iteration_is_restartable_and_in_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.add_on(date(2026, 8, 1), 1.0, "A", RecordKind::Income);
    ledger.add_on(date(2026, 8, 2), 2.0, "B", RecordKind::Expense);

    let first: Vec<String> = ledger.iter().map(|record| record.category.clone()).collect();
    let second: Vec<String> = ledger.iter().map(|record| record.category.clone()).collect();
    assert_eq!(first, vec!["A", "B"]);
    assert_eq!(first, second);
}

#[test]
fn category_totals_accumulate_alphabetically() {
    let mut ledger = Ledger::new();
    ledger.add(3.0, "Food", RecordKind::Expense);
    ledger.add(2.0, "Coffee", RecordKind::Expense);
    ledger.add(4.0, "Food", RecordKind::Expense);

    let entries: Vec<(String, f64)> = ledger.category_totals().into_iter().collect();
    assert_eq!(
        entries,
        vec![("Coffee".to_string(), 2.0), ("Food".to_string(), 7.0)]
    );
}

#[test]
fn summary_reports_net_of_income_and_expense() {
    let mut ledger = Ledger::new();
    ledger.add(50.0, "Salary", RecordKind::Income);
    ledger.add(12.5, "Food", RecordKind::Expense);
    ledger.add(99.0, "Savings", RecordKind::parse("transfer"));

    let summary = ledger.summary();
    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.income, 50.0);
    assert_eq!(summary.expense, 12.5);
    assert_eq!(summary.net, 37.5);
}

#[test]
fn serialization_roundtrip_preserves_records_and_counter() {
    let mut ledger = Ledger::new();
    ledger.add_on(date(2026, 8, 6), 50.0, "Salary", RecordKind::Income);
    ledger.add_on(date(2026, 8, 6), 12.5, "Food", RecordKind::parse("misc"));

    let json = serde_json::to_string(&ledger).unwrap();
    let mut restored: Ledger = serde_json::from_str(&json).unwrap();

    let kinds: Vec<String> = restored.iter().map(|record| record.kind.to_string()).collect();
    assert_eq!(kinds, vec!["income", "misc"]);
    assert_eq!(restored.add(1.0, "Next", RecordKind::Expense), 2);
}
