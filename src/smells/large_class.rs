//! Large class: accounts, email, payments and reporting in one service.
//!
//! The before variant's `UserService` owns SMTP settings, payment
//! credentials, user rows and report queries at once; its field list reads
//! like four different classes. Extract Class splits it along its
//! responsibility lines into [`after::AccountService`], [`after::Mailer`],
//! [`after::PaymentGateway`] and [`after::ReportService`], and the facade
//! that remains simply owns one of each.
//!
//! Payments are simulated: any non-empty token with a positive amount
//! succeeds, and refunds only recognize `stripe_`/`paypal_` transaction
//! prefixes.

use serde::{Deserialize, Serialize};

/// Outcome of a simulated payment or refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
    /// Transaction or refund id when successful.
    pub reference: Option<String>,
    pub error: Option<String>,
}

impl PaymentOutcome {
    fn ok(reference: String) -> Self {
        Self {
            success: true,
            reference: Some(reference),
            error: None,
        }
    }

    fn failed(error: &str) -> Self {
        Self {
            success: false,
            reference: None,
            error: Some(error.to_string()),
        }
    }
}

/// One class, four jobs.
pub mod before {
    use tracing::info;

    use super::PaymentOutcome;

    /// User row kept by the service (simulated persistence).
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UserRow {
        pub id: u64,
        pub email: String,
        pub name: String,
    }

    /// Does everything: accounts, email, payments, reports.
    #[derive(Debug)]
    pub struct UserService {
        users: Vec<UserRow>,
        // Email properties
        smtp_sender: String,
        // Payment properties
        next_txn: u64,
    }

    impl UserService {
        #[must_use]
        pub fn new(smtp_sender: &str) -> Self {
            Self {
                users: Vec::new(),
                smtp_sender: smtp_sender.to_string(),
                next_txn: 1,
            }
        }

        // User management
        pub fn create_user(&mut self, email: &str, name: &str) -> u64 {
            let id = self.users.len() as u64 + 1;
            self.users.push(UserRow {
                id,
                email: email.to_string(),
                name: name.to_string(),
            });
            id
        }

        #[must_use]
        pub fn user_count(&self) -> usize {
            self.users.len()
        }

        // Email
        pub fn send_welcome_email(&self, email: &str, name: &str) -> String {
            let message = format!("Hello {name},\n\nWelcome to our platform!");
            info!(from = %self.smtp_sender, to = %email, "sending welcome email");
            message
        }

        // Payments
        pub fn process_stripe_payment(&mut self, amount: f64, token: &str) -> PaymentOutcome {
            if !token.is_empty() && amount > 0.0 {
                let id = format!("stripe_{}", self.next_txn);
                self.next_txn += 1;
                PaymentOutcome::ok(id)
            } else {
                PaymentOutcome::failed("Invalid payment data")
            }
        }

        pub fn refund_payment(&mut self, transaction_id: &str) -> PaymentOutcome {
            if transaction_id.starts_with("stripe_") || transaction_id.starts_with("paypal_")
            {
                let id = format!("refund_{}", self.next_txn);
                self.next_txn += 1;
                PaymentOutcome::ok(id)
            } else {
                PaymentOutcome::failed("Unknown transaction type")
            }
        }

        // Reporting
        #[must_use]
        pub fn generate_user_report(&self, user_id: u64) -> Option<String> {
            self.users
                .iter()
                .find(|u| u.id == user_id)
                .map(|u| format!("{} <{}>", u.name, u.email))
        }
    }
}

/// One class per responsibility, plus a thin facade.
pub mod after {
    use tracing::info;

    use super::PaymentOutcome;

    pub use super::before::UserRow;

    /// Owns user rows and nothing else.
    #[derive(Debug, Default)]
    pub struct AccountService {
        users: Vec<UserRow>,
    }

    impl AccountService {
        pub fn create_user(&mut self, email: &str, name: &str) -> u64 {
            let id = self.users.len() as u64 + 1;
            self.users.push(UserRow {
                id,
                email: email.to_string(),
                name: name.to_string(),
            });
            id
        }

        #[must_use]
        pub fn count(&self) -> usize {
            self.users.len()
        }

        #[must_use]
        pub fn find(&self, user_id: u64) -> Option<&UserRow> {
            self.users.iter().find(|u| u.id == user_id)
        }
    }

    /// Owns the sender identity and message templates.
    #[derive(Debug)]
    pub struct Mailer {
        sender: String,
    }

    impl Mailer {
        #[must_use]
        pub fn new(sender: &str) -> Self {
            Self {
                sender: sender.to_string(),
            }
        }

        pub fn send_welcome(&self, email: &str, name: &str) -> String {
            let message = format!("Hello {name},\n\nWelcome to our platform!");
            info!(from = %self.sender, to = %email, "sending welcome email");
            message
        }
    }

    /// Owns transaction numbering and the provider rules.
    #[derive(Debug)]
    pub struct PaymentGateway {
        next_txn: u64,
    }

    impl Default for PaymentGateway {
        fn default() -> Self {
            Self { next_txn: 1 }
        }
    }

    impl PaymentGateway {
        pub fn charge_stripe(&mut self, amount: f64, token: &str) -> PaymentOutcome {
            if !token.is_empty() && amount > 0.0 {
                let id = format!("stripe_{}", self.next_txn);
                self.next_txn += 1;
                PaymentOutcome::ok(id)
            } else {
                PaymentOutcome::failed("Invalid payment data")
            }
        }

        pub fn refund(&mut self, transaction_id: &str) -> PaymentOutcome {
            if transaction_id.starts_with("stripe_") || transaction_id.starts_with("paypal_")
            {
                let id = format!("refund_{}", self.next_txn);
                self.next_txn += 1;
                PaymentOutcome::ok(id)
            } else {
                PaymentOutcome::failed("Unknown transaction type")
            }
        }
    }

    /// Reads accounts, renders reports.
    #[derive(Debug, Default)]
    pub struct ReportService;

    impl ReportService {
        #[must_use]
        pub fn user_report(&self, accounts: &AccountService, user_id: u64) -> Option<String> {
            accounts.find(user_id).map(|u| format!("{} <{}>", u.name, u.email))
        }
    }

    /// The facade: same surface as the god class, one field per concern.
    #[derive(Debug)]
    pub struct UserService {
        pub accounts: AccountService,
        pub mailer: Mailer,
        pub payments: PaymentGateway,
        pub reports: ReportService,
    }

    impl UserService {
        #[must_use]
        pub fn new(smtp_sender: &str) -> Self {
            Self {
                accounts: AccountService::default(),
                mailer: Mailer::new(smtp_sender),
                payments: PaymentGateway::default(),
                reports: ReportService,
            }
        }

        pub fn create_user(&mut self, email: &str, name: &str) -> u64 {
            self.accounts.create_user(email, name)
        }

        #[must_use]
        pub fn user_count(&self) -> usize {
            self.accounts.count()
        }

        pub fn send_welcome_email(&self, email: &str, name: &str) -> String {
            self.mailer.send_welcome(email, name)
        }

        pub fn process_stripe_payment(&mut self, amount: f64, token: &str) -> PaymentOutcome {
            self.payments.charge_stripe(amount, token)
        }

        pub fn refund_payment(&mut self, transaction_id: &str) -> PaymentOutcome {
            self.payments.refund(transaction_id)
        }

        #[must_use]
        pub fn generate_user_report(&self, user_id: u64) -> Option<String> {
            self.reports.user_report(&self.accounts, user_id)
        }
    }
}
