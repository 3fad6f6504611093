//! Month-by-month history of income and expenses

use crate::display::report::separator;
use crate::models::{Ledger, MonthYear};
use crate::services::aggregate::{self, PeriodTotals};

/// Income, expenses and net for every month with any records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryReport {
    /// Chronological
    pub months: Vec<(MonthYear, PeriodTotals)>,
}

impl HistoryReport {
    pub fn generate(ledger: &Ledger) -> Self {
        let income = aggregate::totals_by_month(&ledger.income);
        let expenses = aggregate::totals_by_month(&ledger.expenses);

        Self {
            months: aggregate::combine_periods(&income, &expenses)
                .into_iter()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Totals across every month
    pub fn overall(&self) -> PeriodTotals {
        self.months
            .iter()
            .fold(PeriodTotals::default(), |acc, (_, t)| PeriodTotals {
                income: acc.income + t.income,
                expenses: acc.expenses + t.expenses,
            })
    }

    /// Format the history for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("Financial History\n");
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Net"
        ));

        for (period, totals) in &self.months {
            output.push_str(&format!(
                "{:<16} {:>14} {:>14} {:>14}\n",
                period.friendly(),
                totals.income,
                totals.expenses,
                totals.net()
            ));
        }

        let overall = self.overall();
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>14}\n",
            "Total",
            overall.income,
            overall.expenses,
            overall.net()
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Record};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_union_of_months() {
        let ledger = Ledger {
            income: vec![
                Record::income(Money::from_cents(100000), "Salary", date("2024-01-15")).unwrap(),
                Record::income(Money::from_cents(100000), "Salary", date("2024-03-15")).unwrap(),
            ],
            expenses: vec![
                Record::expense(Money::from_cents(40000), "Housing", "", date("2024-02-01"))
                    .unwrap(),
                Record::expense(Money::from_cents(25000), "Food", "", date("2024-03-02"))
                    .unwrap(),
            ],
            budget_categories: Vec::new(),
        };

        let history = HistoryReport::generate(&ledger);
        let months: Vec<_> = history.months.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);

        let (_, february) = history.months[1];
        assert_eq!(february.income, Money::zero());
        assert_eq!(february.net(), Money::from_cents(-40000));

        let (_, march) = history.months[2];
        assert_eq!(march.net(), Money::from_cents(75000));

        assert_eq!(history.overall().net(), Money::from_cents(135000));
    }

    #[test]
    fn test_empty_ledger() {
        let history = HistoryReport::generate(&Ledger::default());
        assert!(history.is_empty());
        assert!(history.format_terminal().contains("Total"));
    }
}
