//! Aggregation over record sequences
//!
//! Pure functions: totals, per-category sums, per-period grouping and the
//! most frequent category. Nothing here reads or writes storage; callers
//! pass the records in.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Money, MonthYear, Record};

/// Income and expense totals for one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    pub income: Money,
    pub expenses: Money,
}

impl PeriodTotals {
    /// Income minus expenses
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Sum of all amounts; zero for an empty sequence
pub fn total<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().map(|r| r.amount).sum()
}

/// Summed amount per category
///
/// Only categories present in the input appear in the result.
pub fn totals_by_category<'a, I>(records: I) -> BTreeMap<String, Money>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category.clone()).or_default() += record.amount;
    }
    totals
}

/// Summed amount per caller-defined key
pub fn totals_by_period<'a, I, K, F>(records: I, key_fn: F) -> BTreeMap<K, Money>
where
    I: IntoIterator<Item = &'a Record>,
    K: Ord,
    F: Fn(&Record) -> K,
{
    let mut totals: BTreeMap<K, Money> = BTreeMap::new();
    for record in records {
        *totals.entry(key_fn(record)).or_default() += record.amount;
    }
    totals
}

/// Summed amount per calendar month
pub fn totals_by_month<'a, I>(records: I) -> BTreeMap<MonthYear, Money>
where
    I: IntoIterator<Item = &'a Record>,
{
    totals_by_period(records, |r| MonthYear::of(r.date))
}

/// Merge income and expense groupings over the union of their keys
///
/// A period present on only one side gets zero for the other.
pub fn combine_periods<K: Ord + Clone>(
    income: &BTreeMap<K, Money>,
    expenses: &BTreeMap<K, Money>,
) -> BTreeMap<K, PeriodTotals> {
    let mut combined: BTreeMap<K, PeriodTotals> = BTreeMap::new();
    for (key, amount) in income {
        combined.entry(key.clone()).or_default().income = *amount;
    }
    for (key, amount) in expenses {
        combined.entry(key.clone()).or_default().expenses = *amount;
    }
    combined
}

/// Record count per category, in the order categories were first seen
pub fn category_counts<'a, I>(records: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        let category = record.category.as_str();
        match index.get(category) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(category, counts.len());
                counts.push((category, 1));
            }
        }
    }
    counts
}

/// The category that occurs most often
///
/// On a tie the category encountered first wins. `None` for empty input.
pub fn most_frequent_category<'a, I>(records: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut best: Option<(&'a str, usize)> = None;
    for (category, count) in category_counts(records) {
        // strict > keeps the earliest of equal counts
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

/// Records dated within a given month
pub fn records_in_period(records: &[Record], period: MonthYear) -> Vec<&Record> {
    records.iter().filter(|r| period.contains(r.date)).collect()
}
