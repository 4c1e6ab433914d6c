//! Divergent change: one service edited for four unrelated reasons.
//!
//! The before variant's `FinancialService` is touched whenever tax
//! brackets move, whenever the transaction schema changes, whenever a
//! report format changes and whenever statement wording changes. Extract
//! Class splits it along its change axes: a calculator, a transaction
//! ledger, a report generator and a statement mailer, with the service
//! reduced to delegation.
//!
//! Tax brackets in both variants: 10% up to 50k taxable, then
//! 5000 + 20% of the excess up to 100k, then 15000 + 30% of the excess.

use serde::{Deserialize, Serialize};

/// A recorded transaction (simulated persistence).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub user_id: u64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub month: u32,
    pub year: i32,
}

/// One line of a monthly report: kind, total, count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    #[serde(rename = "type")]
    pub kind: String,
    pub total: f64,
    pub count: usize,
}

/// Every concern inline on one struct.
pub mod before {
    use tracing::info;

    use super::{ReportLine, Transaction};

    #[derive(Debug, Default)]
    pub struct FinancialService {
        transactions: Vec<Transaction>,
    }

    impl FinancialService {
        // Financial calculations - change when business rules change
        #[must_use]
        pub fn calculate_interest(&self, principal: f64, rate: f64, years: u32) -> f64 {
            principal * rate * f64::from(years)
        }

        #[must_use]
        pub fn calculate_tax(&self, income: f64, deductions: f64) -> f64 {
            let taxable = income - deductions;
            if taxable <= 50_000.0 {
                taxable * 0.1
            } else if taxable <= 100_000.0 {
                5_000.0 + (taxable - 50_000.0) * 0.2
            } else {
                15_000.0 + (taxable - 100_000.0) * 0.3
            }
        }

        // Storage - changes when the schema changes
        pub fn save_transaction(&mut self, txn: Transaction) {
            self.transactions.push(txn);
        }

        #[must_use]
        pub fn user_balance(&self, user_id: u64) -> f64 {
            self.transactions
                .iter()
                .filter(|t| t.user_id == user_id)
                .map(|t| t.amount)
                .sum()
        }

        // Reporting - changes when report requirements change
        #[must_use]
        pub fn monthly_report(&self, user_id: u64, month: u32, year: i32) -> Vec<ReportLine> {
            let mut lines: Vec<ReportLine> = Vec::new();
            for txn in self
                .transactions
                .iter()
                .filter(|t| t.user_id == user_id && t.month == month && t.year == year)
            {
                match lines.iter_mut().find(|l| l.kind == txn.kind) {
                    Some(line) => {
                        line.total += txn.amount;
                        line.count += 1;
                    }
                    None => lines.push(ReportLine {
                        kind: txn.kind.clone(),
                        total: txn.amount,
                        count: 1,
                    }),
                }
            }
            lines
        }

        // Notifications - change when wording changes
        pub fn monthly_statement(&self, user_id: u64, email: &str, month: u32, year: i32) -> String {
            let balance = self.user_balance(user_id);
            let report = self.monthly_report(user_id, month, year);

            let mut message = format!("Your current balance: ${balance:.2}\n\n");
            message.push_str("Transactions this month:\n");
            for line in &report {
                message.push_str(&format!(
                    "- {}: {} transactions, total: ${:.2}\n",
                    line.kind, line.count, line.total
                ));
            }

            info!(to = %email, "sending monthly statement");
            message
        }
    }
}

/// One class per axis of change.
pub mod after {
    use tracing::info;

    use super::{ReportLine, Transaction};

    /// Business-rule arithmetic only.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FinancialCalculator;

    impl FinancialCalculator {
        #[must_use]
        pub fn interest(&self, principal: f64, rate: f64, years: u32) -> f64 {
            principal * rate * f64::from(years)
        }

        #[must_use]
        pub fn tax(&self, income: f64, deductions: f64) -> f64 {
            let taxable = income - deductions;
            if taxable <= 50_000.0 {
                taxable * 0.1
            } else if taxable <= 100_000.0 {
                5_000.0 + (taxable - 50_000.0) * 0.2
            } else {
                15_000.0 + (taxable - 100_000.0) * 0.3
            }
        }
    }

    /// Owns the transaction rows and the queries over them.
    #[derive(Debug, Default)]
    pub struct TransactionLedger {
        transactions: Vec<Transaction>,
    }

    impl TransactionLedger {
        pub fn save(&mut self, txn: Transaction) {
            self.transactions.push(txn);
        }

        #[must_use]
        pub fn balance(&self, user_id: u64) -> f64 {
            self.transactions
                .iter()
                .filter(|t| t.user_id == user_id)
                .map(|t| t.amount)
                .sum()
        }

        #[must_use]
        pub fn monthly(&self, user_id: u64, month: u32, year: i32) -> Vec<&Transaction> {
            self.transactions
                .iter()
                .filter(|t| t.user_id == user_id && t.month == month && t.year == year)
                .collect()
        }
    }

    /// Turns ledger rows into report lines.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ReportGenerator;

    impl ReportGenerator {
        #[must_use]
        pub fn monthly_report(
            &self,
            ledger: &TransactionLedger,
            user_id: u64,
            month: u32,
            year: i32,
        ) -> Vec<ReportLine> {
            let mut lines: Vec<ReportLine> = Vec::new();
            for txn in ledger.monthly(user_id, month, year) {
                match lines.iter_mut().find(|l| l.kind == txn.kind) {
                    Some(line) => {
                        line.total += txn.amount;
                        line.count += 1;
                    }
                    None => lines.push(ReportLine {
                        kind: txn.kind.clone(),
                        total: txn.amount,
                        count: 1,
                    }),
                }
            }
            lines
        }
    }

    /// Owns statement wording.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StatementMailer;

    impl StatementMailer {
        pub fn monthly_statement(&self, email: &str, balance: f64, report: &[ReportLine]) -> String {
            let mut message = format!("Your current balance: ${balance:.2}\n\n");
            message.push_str("Transactions this month:\n");
            for line in report {
                message.push_str(&format!(
                    "- {}: {} transactions, total: ${:.2}\n",
                    line.kind, line.count, line.total
                ));
            }

            info!(to = %email, "sending monthly statement");
            message
        }
    }

    /// Same surface as before, one collaborator per concern.
    #[derive(Debug, Default)]
    pub struct FinancialService {
        calculator: FinancialCalculator,
        ledger: TransactionLedger,
        reports: ReportGenerator,
        mailer: StatementMailer,
    }

    impl FinancialService {
        #[must_use]
        pub fn calculate_interest(&self, principal: f64, rate: f64, years: u32) -> f64 {
            self.calculator.interest(principal, rate, years)
        }

        #[must_use]
        pub fn calculate_tax(&self, income: f64, deductions: f64) -> f64 {
            self.calculator.tax(income, deductions)
        }

        pub fn save_transaction(&mut self, txn: Transaction) {
            self.ledger.save(txn);
        }

        #[must_use]
        pub fn user_balance(&self, user_id: u64) -> f64 {
            self.ledger.balance(user_id)
        }

        #[must_use]
        pub fn monthly_report(&self, user_id: u64, month: u32, year: i32) -> Vec<ReportLine> {
            self.reports.monthly_report(&self.ledger, user_id, month, year)
        }

        pub fn monthly_statement(&self, user_id: u64, email: &str, month: u32, year: i32) -> String {
            let balance = self.ledger.balance(user_id);
            let report = self.reports.monthly_report(&self.ledger, user_id, month, year);
            self.mailer.monthly_statement(email, balance, &report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(mut save: impl FnMut(Transaction)) {
        for (amount, kind) in [
            (2_500.0, "income"),
            (-40.0, "groceries"),
            (-60.0, "groceries"),
            (1_000.0, "income"),
        ] {
            save(Transaction {
                user_id: 7,
                amount,
                kind: kind.to_string(),
                month: 6,
                year: 2024,
            });
        }
    }

    #[test]
    fn test_calculations_match() {
        let monolith = before::FinancialService::default();
        let split = after::FinancialService::default();

        assert_eq!(
            monolith.calculate_interest(1000.0, 0.05, 2),
            split.calculate_interest(1000.0, 0.05, 2)
        );
        assert_eq!(monolith.calculate_interest(1000.0, 0.05, 2), 100.0);

        for (income, deductions) in [(40_000.0, 5_000.0), (75_000.0, 10_000.0), (200_000.0, 0.0)] {
            assert_eq!(
                monolith.calculate_tax(income, deductions),
                split.calculate_tax(income, deductions),
                "tax diverges for {income}/{deductions}"
            );
        }
        // 75k - 10k = 65k taxable: 5000 + 15000 * 0.2
        assert_eq!(monolith.calculate_tax(75_000.0, 10_000.0), 8_000.0);
    }

    #[test]
    fn test_balance_and_report_match() {
        let mut monolith = before::FinancialService::default();
        let mut split = after::FinancialService::default();
        seed(|t| monolith.save_transaction(t));
        seed(|t| split.save_transaction(t));

        assert_eq!(monolith.user_balance(7), split.user_balance(7));
        assert_eq!(monolith.user_balance(7), 3_400.0);
        assert_eq!(monolith.user_balance(99), 0.0);

        let report_before = monolith.monthly_report(7, 6, 2024);
        let report_after = split.monthly_report(7, 6, 2024);
        assert_eq!(report_before, report_after);
        assert_eq!(report_before.len(), 2);
        let groceries = report_before
            .iter()
            .find(|l| l.kind == "groceries")
            .unwrap();
        assert_eq!(groceries.count, 2);
        assert_eq!(groceries.total, -100.0);
    }

    #[test]
    fn test_statement_wording_matches() {
        let mut monolith = before::FinancialService::default();
        let mut split = after::FinancialService::default();
        seed(|t| monolith.save_transaction(t));
        seed(|t| split.save_transaction(t));

        assert_eq!(
            monolith.monthly_statement(7, "jo@example.com", 6, 2024),
            split.monthly_statement(7, "jo@example.com", 6, 2024)
        );
    }
}
