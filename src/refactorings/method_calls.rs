//! Making method calls simpler: Rename Method, Add Parameter, Remove
//! Parameter, Separate Query from Modifier, Parameterize Method, Replace
//! Parameter with Explicit Methods, Preserve Whole Object, Replace
//! Parameter with Method, Introduce Parameter Object, Remove Setting
//! Method, Hide Method and Replace Constructor with Factory Method.

/// Rename Method: `calc` says nothing; `add` says everything.
pub mod rename_method {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct Calculator;

        impl Calculator {
            #[must_use]
            pub fn calc(&self, a: i64, b: i64) -> i64 {
                a + b
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct Calculator;

        impl Calculator {
            #[must_use]
            pub fn add(&self, a: i64, b: i64) -> i64 {
                a + b
            }
        }
    }
}

/// Add Parameter: priority was hardcoded; now the caller chooses.
pub mod add_parameter {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct EmailSender;

        impl EmailSender {
            #[must_use]
            pub fn send_email(&self, to: &str, _subject: &str, _body: &str) -> String {
                let priority = "normal";
                format!("Sending email to {to} with priority {priority}")
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct EmailSender;

        impl EmailSender {
            /// `None` keeps the old default.
            #[must_use]
            pub fn send_email(
                &self,
                to: &str,
                _subject: &str,
                _body: &str,
                priority: Option<&str>,
            ) -> String {
                let priority = priority.unwrap_or("normal");
                format!("Sending email to {to} with priority {priority}")
            }
        }
    }
}

/// Remove Parameter: `include_header` was derivable from the format.
pub mod remove_parameter {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct ReportGenerator;

        impl ReportGenerator {
            #[must_use]
            pub fn generate(&self, _data: &str, format: &str, mut include_header: bool) -> String {
                if format == "html" {
                    // Caller's choice silently overridden
                    include_header = true;
                }
                format!("Generating {format} report with header: {include_header}")
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct ReportGenerator;

        impl ReportGenerator {
            #[must_use]
            pub fn generate(&self, _data: &str, format: &str) -> String {
                let include_header = format == "html";
                format!("Generating {format} report with header: {include_header}")
            }
        }
    }
}

/// Separate Query from Modifier: `can_withdraw` asks, `withdraw` acts.
pub mod separate_query_from_modifier {
    pub mod before {
        #[derive(Debug)]
        pub struct BankAccount {
            balance: f64,
        }

        impl BankAccount {
            #[must_use]
            pub fn new(balance: f64) -> Self {
                Self { balance }
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            /// Checks and mutates in one call; there is no way to ask
            /// without acting.
            pub fn withdraw(&mut self, amount: f64) -> bool {
                if self.balance >= amount {
                    self.balance -= amount;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct BankAccount {
            balance: f64,
        }

        impl BankAccount {
            #[must_use]
            pub fn new(balance: f64) -> Self {
                Self { balance }
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            #[must_use]
            pub fn can_withdraw(&self, amount: f64) -> bool {
                self.balance >= amount
            }

            pub fn withdraw(&mut self, amount: f64) -> bool {
                if self.can_withdraw(amount) {
                    self.balance -= amount;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Parameterize Method: weekly/monthly/quarterly collapse into one method
/// taking the day count.
pub mod parameterize_method {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct ReportGenerator;

        impl ReportGenerator {
            #[must_use]
            pub fn weekly_report(&self) -> String {
                Self::report(7)
            }

            #[must_use]
            pub fn monthly_report(&self) -> String {
                Self::report(30)
            }

            #[must_use]
            pub fn quarterly_report(&self) -> String {
                Self::report(90)
            }

            fn report(days: u32) -> String {
                format!("Generating report for {days} days")
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct ReportGenerator;

        impl ReportGenerator {
            #[must_use]
            pub fn report(&self, days: u32) -> String {
                format!("Generating report for {days} days")
            }
        }
    }
}

/// Replace Parameter with Explicit Methods: the bonus-type string becomes
/// three named methods.
pub mod replace_parameter_with_explicit_methods {
    pub mod before {
        #[derive(Debug)]
        pub struct Employee {
            pub name: String,
            pub salary: f64,
        }

        impl Employee {
            #[must_use]
            pub fn bonus(&self, bonus_type: &str) -> f64 {
                match bonus_type {
                    "performance" => self.salary * 0.1,
                    "yearly" => self.salary * 0.05,
                    "special" => self.salary * 0.15,
                    _ => 0.0,
                }
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct Employee {
            pub name: String,
            pub salary: f64,
        }

        impl Employee {
            #[must_use]
            pub fn performance_bonus(&self) -> f64 {
                self.salary * 0.1
            }

            #[must_use]
            pub fn yearly_bonus(&self) -> f64 {
                self.salary * 0.05
            }

            #[must_use]
            pub fn special_bonus(&self) -> f64 {
                self.salary * 0.15
            }
        }
    }
}

/// Preserve Whole Object: pass the item, not its fields.
pub mod preserve_whole_object {
    /// A line item in an order.
    #[derive(Debug, Clone)]
    pub struct OrderItem {
        pub name: String,
        pub price: f64,
        pub quantity: u32,
    }

    pub mod before {
        #[derive(Debug, Default)]
        pub struct OrderProcessor;

        impl OrderProcessor {
            #[must_use]
            pub fn item_total(&self, _name: &str, price: f64, quantity: u32) -> f64 {
                price * f64::from(quantity)
            }
        }
    }

    pub mod after {
        use super::OrderItem;

        #[derive(Debug, Default)]
        pub struct OrderProcessor;

        impl OrderProcessor {
            #[must_use]
            pub fn item_total(&self, item: &OrderItem) -> f64 {
                item.price * f64::from(item.quantity)
            }
        }
    }
}

/// Replace Parameter with Method: the discount rate is the customer's to
/// answer.
pub mod replace_parameter_with_method {
    pub mod before {
        #[derive(Debug)]
        pub struct Customer {
            pub name: String,
            pub level: String,
        }

        #[derive(Debug, Default)]
        pub struct DiscountCalculator;

        impl DiscountCalculator {
            #[must_use]
            pub fn discount(&self, customer: &Customer, purchase_amount: f64) -> f64 {
                let rate = match customer.level.as_str() {
                    "gold" => 0.1,
                    "silver" => 0.05,
                    "bronze" => 0.02,
                    _ => 0.0,
                };
                purchase_amount * rate
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct Customer {
            pub name: String,
            pub level: String,
        }

        impl Customer {
            #[must_use]
            pub fn discount_rate(&self) -> f64 {
                match self.level.as_str() {
                    "gold" => 0.1,
                    "silver" => 0.05,
                    "bronze" => 0.02,
                    _ => 0.0,
                }
            }
        }

        #[derive(Debug, Default)]
        pub struct DiscountCalculator;

        impl DiscountCalculator {
            #[must_use]
            pub fn discount(&self, customer: &Customer, purchase_amount: f64) -> f64 {
                purchase_amount * customer.discount_rate()
            }
        }
    }
}

/// Introduce Parameter Object: six reservation arguments become one value.
pub mod introduce_parameter_object {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct ReservationService;

        impl ReservationService {
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            pub fn make_reservation(
                &self,
                date: &str,
                start_time: &str,
                end_time: &str,
                customer_name: &str,
                customer_email: &str,
                party_size: u32,
            ) -> String {
                format!(
                    "Reservation for {customer_name} ({customer_email}) on {date} \
                     from {start_time} to {end_time} for {party_size} people"
                )
            }
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct ReservationDetails {
            pub date: String,
            pub start_time: String,
            pub end_time: String,
            pub customer_name: String,
            pub customer_email: String,
            pub party_size: u32,
        }

        #[derive(Debug, Default)]
        pub struct ReservationService;

        impl ReservationService {
            #[must_use]
            pub fn make_reservation(&self, details: &ReservationDetails) -> String {
                format!(
                    "Reservation for {} ({}) on {} from {} to {} for {} people",
                    details.customer_name,
                    details.customer_email,
                    details.date,
                    details.start_time,
                    details.end_time,
                    details.party_size
                )
            }
        }
    }
}

/// Remove Setting Method: a value meant to be immutable loses its setter.
pub mod remove_setting_method {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct ApiKey {
            value: String,
        }

        impl ApiKey {
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }

            // Anyone can swap the key after construction.
            pub fn set_value(&mut self, value: &str) {
                self.value = value.to_string();
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct ApiKey {
            value: String,
        }

        impl ApiKey {
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self {
                    value: value.to_string(),
                }
            }

            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }
        }
    }
}

/// Hide Method: validation is an implementation detail of processing.
pub mod hide_method {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct DataProcessor;

        impl DataProcessor {
            // Public even though only process_input needs it.
            #[must_use]
            pub fn validate_input(&self, input: &str) -> bool {
                !input.trim().is_empty()
            }

            #[must_use]
            pub fn process_input(&self, input: &str) -> String {
                if self.validate_input(input) {
                    input.to_uppercase()
                } else {
                    String::new()
                }
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct DataProcessor;

        impl DataProcessor {
            #[must_use]
            pub fn process_input(&self, input: &str) -> String {
                if Self::validate_input(input) {
                    input.to_uppercase()
                } else {
                    String::new()
                }
            }

            fn validate_input(input: &str) -> bool {
                !input.trim().is_empty()
            }
        }
    }
}

/// Replace Constructor with Factory Method: connection-string parsing gets
/// a named, fallible entry point.
pub mod replace_constructor_with_factory_method {
    /// Parsed connection settings shared by both variants.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ConnectionSettings {
        pub host: String,
        pub port: u16,
        pub database: String,
    }

    const DEFAULT_PORT: u16 = 5432;

    pub mod before {
        use super::{ConnectionSettings, DEFAULT_PORT};

        #[derive(Debug)]
        pub struct DatabaseConnection {
            settings: ConnectionSettings,
        }

        impl DatabaseConnection {
            /// Parsing buried in the constructor; bad ports silently fall
            /// back to the default.
            #[must_use]
            pub fn new(connection_string: &str) -> Self {
                let mut parts = connection_string.split(':');
                let host = parts.next().unwrap_or("").to_string();
                let port = parts
                    .next()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT);
                let database = parts.next().unwrap_or("default").to_string();
                Self {
                    settings: ConnectionSettings {
                        host,
                        port,
                        database,
                    },
                }
            }

            #[must_use]
            pub fn settings(&self) -> &ConnectionSettings {
                &self.settings
            }
        }
    }

    pub mod after {
        use super::{ConnectionSettings, DEFAULT_PORT};
        use crate::error::{Result, SmellbookError};

        #[derive(Debug)]
        pub struct DatabaseConnection {
            settings: ConnectionSettings,
        }

        impl DatabaseConnection {
            /// Factory method: the parse is named and its failure mode is
            /// explicit.
            pub fn from_connection_string(connection_string: &str) -> Result<Self> {
                let mut parts = connection_string.split(':');
                let host = match parts.next() {
                    Some(host) if !host.is_empty() => host.to_string(),
                    _ => return Err(SmellbookError::invalid_argument("missing host")),
                };
                let port = match parts.next() {
                    Some(port) => port.parse().map_err(|_| {
                        SmellbookError::invalid_argument("port is not a number")
                    })?,
                    None => DEFAULT_PORT,
                };
                let database = parts.next().unwrap_or("default").to_string();
                Ok(Self {
                    settings: ConnectionSettings {
                        host,
                        port,
                        database,
                    },
                })
            }

            #[must_use]
            pub fn settings(&self) -> &ConnectionSettings {
                &self.settings
            }
        }
    }
}
