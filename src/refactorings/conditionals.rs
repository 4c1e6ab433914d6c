//! Simplifying conditional expressions: Decompose Conditional, Consolidate
//! Conditional Expression, Consolidate Duplicate Conditional Fragments,
//! Remove Control Flag, Replace Nested Conditional with Guard Clauses,
//! Replace Conditional with Polymorphism, Introduce Null Object and
//! Introduce Assertion.

/// Decompose Conditional: the fee ladder becomes named predicates.
pub mod decompose_conditional {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct PaymentProcessor;

        impl PaymentProcessor {
            #[must_use]
            pub fn fee(&self, amount: f64, is_international: bool, is_premium: bool) -> f64 {
                if amount > 100.0 && is_international && is_premium {
                    amount * 0.05 + 10.0
                } else if amount > 100.0 && is_international && !is_premium {
                    amount * 0.05 + 15.0
                } else if amount <= 100.0 && is_international {
                    amount * 0.03 + 5.0
                } else {
                    amount * 0.02
                }
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct PaymentProcessor;

        impl PaymentProcessor {
            #[must_use]
            pub fn fee(&self, amount: f64, is_international: bool, is_premium: bool) -> f64 {
                if Self::is_high_value_international(amount, is_international) {
                    if is_premium {
                        Self::high_value_premium_fee(amount)
                    } else {
                        Self::high_value_standard_fee(amount)
                    }
                } else if is_international {
                    Self::low_value_international_fee(amount)
                } else {
                    Self::domestic_fee(amount)
                }
            }

            fn is_high_value_international(amount: f64, is_international: bool) -> bool {
                amount > 100.0 && is_international
            }

            fn high_value_premium_fee(amount: f64) -> f64 {
                amount * 0.05 + 10.0
            }

            fn high_value_standard_fee(amount: f64) -> f64 {
                amount * 0.05 + 15.0
            }

            fn low_value_international_fee(amount: f64) -> f64 {
                amount * 0.03 + 5.0
            }

            fn domestic_fee(amount: f64) -> f64 {
                amount * 0.02
            }
        }
    }
}

/// Consolidate Conditional Expression: three returns collapse into one
/// boolean expression.
pub mod consolidate_conditional_expression {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct InsuranceCalculator;

        impl InsuranceCalculator {
            #[must_use]
            pub fn is_eligible_for_discount(
                &self,
                age: u32,
                is_student: bool,
                has_good_record: bool,
            ) -> bool {
                if age < 25 {
                    return false;
                }
                if is_student {
                    return true;
                }
                if has_good_record {
                    return true;
                }
                false
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct InsuranceCalculator;

        impl InsuranceCalculator {
            #[must_use]
            pub fn is_eligible_for_discount(
                &self,
                age: u32,
                is_student: bool,
                has_good_record: bool,
            ) -> bool {
                age >= 25 && (is_student || has_good_record)
            }
        }
    }
}

/// Consolidate Duplicate Conditional Fragments: shared work moves out of
/// the branches.
pub mod consolidate_duplicate_fragments {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct FileProcessor;

        impl FileProcessor {
            /// Returns the log lines the processing run would emit.
            #[must_use]
            pub fn process(&self, file_path: &str) -> Vec<String> {
                if file_path.ends_with(".txt") {
                    let content = Self::read(file_path);
                    let mut lines = vec![format!("Processing file: {file_path}")];
                    lines.push(format!("Content processed: {content}"));
                    lines
                } else {
                    let content = Self::read(file_path);
                    let mut lines = vec![format!("Processing invalid file: {file_path}")];
                    lines.push(format!("Content processed: {content}"));
                    lines
                }
            }

            fn read(_file_path: &str) -> String {
                "file content".to_string()
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct FileProcessor;

        impl FileProcessor {
            #[must_use]
            pub fn process(&self, file_path: &str) -> Vec<String> {
                let content = Self::read(file_path);

                let header = if file_path.ends_with(".txt") {
                    format!("Processing file: {file_path}")
                } else {
                    format!("Processing invalid file: {file_path}")
                };

                vec![header, format!("Content processed: {content}")]
            }

            fn read(_file_path: &str) -> String {
                "file content".to_string()
            }
        }
    }
}

/// Remove Control Flag: the `found` boolean gives way to early return.
pub mod remove_control_flag {
    use crate::error::{Result, SmellbookError};

    /// Minimal user record for the search examples.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct User {
        pub name: String,
        pub age: u32,
    }

    pub mod before {
        use super::{Result, SmellbookError, User};

        #[derive(Debug, Default)]
        pub struct SearchProcessor;

        impl SearchProcessor {
            pub fn find_user<'u>(&self, users: &'u [User], target: &str) -> Result<&'u User> {
                let mut found = false;
                let mut result = None;

                for user in users {
                    if user.name == target {
                        result = Some(user);
                        found = true;
                        break;
                    }
                }

                if !found {
                    return Err(SmellbookError::not_found("user"));
                }
                // found guarantees result is set
                result.ok_or_else(|| SmellbookError::not_found("user"))
            }
        }
    }

    pub mod after {
        use super::{Result, SmellbookError, User};

        #[derive(Debug, Default)]
        pub struct SearchProcessor;

        impl SearchProcessor {
            pub fn find_user<'u>(&self, users: &'u [User], target: &str) -> Result<&'u User> {
                users
                    .iter()
                    .find(|user| user.name == target)
                    .ok_or_else(|| SmellbookError::not_found("user"))
            }
        }
    }
}

/// Replace Nested Conditional with Guard Clauses.
pub mod replace_nested_with_guards {
    use crate::error::{Result, SmellbookError};

    /// Account snapshot the validator inspects.
    #[derive(Debug, Clone)]
    pub struct Account {
        pub balance: f64,
        pub status: String,
    }

    pub mod before {
        use super::{Account, Result, SmellbookError};

        #[derive(Debug, Default)]
        pub struct AccountValidator;

        impl AccountValidator {
            pub fn validate_transaction(&self, account: &Account, amount: f64) -> Result<()> {
                if account.balance >= amount {
                    if amount > 0.0 {
                        if account.status == "active" {
                            Ok(())
                        } else {
                            Err(SmellbookError::validation("account is not active"))
                        }
                    } else {
                        Err(SmellbookError::validation("amount must be positive"))
                    }
                } else {
                    Err(SmellbookError::validation("insufficient funds"))
                }
            }
        }
    }

    pub mod after {
        use super::{Account, Result, SmellbookError};

        #[derive(Debug, Default)]
        pub struct AccountValidator;

        impl AccountValidator {
            pub fn validate_transaction(&self, account: &Account, amount: f64) -> Result<()> {
                if account.balance < amount {
                    return Err(SmellbookError::validation("insufficient funds"));
                }
                if amount <= 0.0 {
                    return Err(SmellbookError::validation("amount must be positive"));
                }
                if account.status != "active" {
                    return Err(SmellbookError::validation("account is not active"));
                }
                Ok(())
            }
        }
    }
}

/// Replace Conditional with Polymorphism: the type-code ladder becomes an
/// enum of shapes with one `area` each.
pub mod replace_conditional_with_polymorphism {
    pub mod before {
        /// `shape_type` is a stringly type code; `width` doubles as the
        /// radius for circles.
        #[derive(Debug, Clone)]
        pub struct Shape {
            pub shape_type: String,
            pub width: f64,
            pub height: f64,
        }

        impl Shape {
            #[must_use]
            pub fn area(&self) -> f64 {
                if self.shape_type == "rectangle" {
                    self.width * self.height
                } else if self.shape_type == "triangle" {
                    self.width * self.height * 0.5
                } else if self.shape_type == "circle" {
                    3.14159 * self.width * self.width
                } else {
                    0.0
                }
            }
        }
    }

    pub mod after {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Shape {
            Rectangle { width: f64, height: f64 },
            Triangle { width: f64, height: f64 },
            Circle { radius: f64 },
        }

        impl Shape {
            #[must_use]
            pub fn area(&self) -> f64 {
                match self {
                    Self::Rectangle { width, height } => width * height,
                    Self::Triangle { width, height } => width * height * 0.5,
                    Self::Circle { radius } => 3.14159 * radius * radius,
                }
            }
        }
    }
}

/// Introduce Null Object: a do-nothing logger replaces the Option check.
pub mod introduce_null_object {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct DataProcessor;

        impl DataProcessor {
            /// Returns what was logged, if anything, plus the processed
            /// output.
            #[must_use]
            pub fn process(
                &self,
                data: &str,
                log_sink: Option<&mut Vec<String>>,
            ) -> String {
                if let Some(sink) = log_sink {
                    sink.push(format!("Processing: {data}"));
                }
                format!("processed {data}")
            }
        }
    }

    pub mod after {
        pub trait EventLog {
            fn log(&mut self, message: String);
        }

        /// Records messages for callers that want them.
        #[derive(Debug, Default)]
        pub struct BufferLog {
            pub messages: Vec<String>,
        }

        impl EventLog for BufferLog {
            fn log(&mut self, message: String) {
                self.messages.push(message);
            }
        }

        /// Swallows everything; callers no longer branch.
        #[derive(Debug, Default)]
        pub struct NullLog;

        impl EventLog for NullLog {
            fn log(&mut self, _message: String) {}
        }

        #[derive(Debug, Default)]
        pub struct DataProcessor;

        impl DataProcessor {
            #[must_use]
            pub fn process(&self, data: &str, log: &mut dyn EventLog) -> String {
                log.log(format!("Processing: {data}"));
                format!("processed {data}")
            }
        }
    }
}

/// Introduce Assertion: the precondition becomes explicit.
pub mod introduce_assertion {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct Calculator;

        impl Calculator {
            /// Divides without stating its precondition; zero denominators
            /// silently produce infinity.
            #[must_use]
            pub fn divide(&self, a: f64, b: f64) -> f64 {
                a / b
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct Calculator;

        impl Calculator {
            #[must_use]
            pub fn divide(&self, a: f64, b: f64) -> f64 {
                debug_assert!(b != 0.0, "denominator cannot be zero");
                a / b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_ladder_matches_named_predicates() {
        let ladder = decompose_conditional::before::PaymentProcessor;
        let named = decompose_conditional::after::PaymentProcessor;
        let cases = [
            (150.0, true, true),
            (150.0, true, false),
            (80.0, true, false),
            (80.0, false, false),
            (150.0, false, true),
        ];
        for (amount, international, premium) in cases {
            assert_eq!(
                ladder.fee(amount, international, premium),
                named.fee(amount, international, premium),
                "fee diverges for {amount}/{international}/{premium}"
            );
        }
        assert_eq!(named.fee(150.0, true, true), 150.0 * 0.05 + 10.0);
    }

    #[test]
    fn test_consolidated_eligibility_matches() {
        let sequential = consolidate_conditional_expression::before::InsuranceCalculator;
        let consolidated = consolidate_conditional_expression::after::InsuranceCalculator;
        for age in [20, 24, 25, 30] {
            for is_student in [false, true] {
                for has_good_record in [false, true] {
                    assert_eq!(
                        sequential.is_eligible_for_discount(age, is_student, has_good_record),
                        consolidated.is_eligible_for_discount(age, is_student, has_good_record),
                        "eligibility diverges for {age}/{is_student}/{has_good_record}"
                    );
                }
            }
        }
        assert!(consolidated.is_eligible_for_discount(30, false, true));
        assert!(!consolidated.is_eligible_for_discount(24, true, true));
    }

    #[test]
    fn test_consolidated_fragments_emit_same_lines() {
        let duplicated = consolidate_duplicate_fragments::before::FileProcessor;
        let hoisted = consolidate_duplicate_fragments::after::FileProcessor;
        for path in ["notes.txt", "image.png"] {
            assert_eq!(duplicated.process(path), hoisted.process(path));
        }
    }

    #[test]
    fn test_flagless_search_matches() {
        let users = vec![
            remove_control_flag::User {
                name: "Alice".into(),
                age: 25,
            },
            remove_control_flag::User {
                name: "Bob".into(),
                age: 30,
            },
        ];
        let flagged = remove_control_flag::before::SearchProcessor;
        let direct = remove_control_flag::after::SearchProcessor;

        assert_eq!(
            flagged.find_user(&users, "Bob").unwrap(),
            direct.find_user(&users, "Bob").unwrap()
        );
        assert_eq!(
            flagged.find_user(&users, "Zed").unwrap_err(),
            direct.find_user(&users, "Zed").unwrap_err()
        );
    }

    #[test]
    fn test_guard_clauses_reject_the_same_transactions() {
        let nested = replace_nested_with_guards::before::AccountValidator;
        let guarded = replace_nested_with_guards::after::AccountValidator;

        let active = replace_nested_with_guards::Account {
            balance: 1000.0,
            status: "active".into(),
        };
        let frozen = replace_nested_with_guards::Account {
            balance: 1000.0,
            status: "frozen".into(),
        };

        let cases = [
            (&active, 100.0),
            (&active, 2000.0),
            (&active, 0.0),
            (&frozen, 100.0),
        ];
        for (account, amount) in cases {
            assert_eq!(
                nested.validate_transaction(account, amount),
                guarded.validate_transaction(account, amount),
                "validation diverges for {amount} on {}",
                account.status
            );
        }
        assert!(guarded.validate_transaction(&active, 100.0).is_ok());
    }

    #[test]
    fn test_polymorphic_areas_match_the_type_code() {
        let coded = |shape_type: &str, width: f64, height: f64| {
            replace_conditional_with_polymorphism::before::Shape {
                shape_type: shape_type.into(),
                width,
                height,
            }
            .area()
        };
        use replace_conditional_with_polymorphism::after::Shape;

        assert_eq!(
            coded("rectangle", 10.0, 5.0),
            Shape::Rectangle {
                width: 10.0,
                height: 5.0
            }
            .area()
        );
        assert_eq!(
            coded("triangle", 10.0, 5.0),
            Shape::Triangle {
                width: 10.0,
                height: 5.0
            }
            .area()
        );
        assert_eq!(
            coded("circle", 3.0, 0.0),
            Shape::Circle { radius: 3.0 }.area()
        );
        // The stringly version silently returns 0 for typos; the enum
        // cannot express them.
        assert_eq!(coded("hexagon", 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_null_object_removes_the_branch() {
        use introduce_null_object::after::{BufferLog, NullLog};

        let optioned = introduce_null_object::before::DataProcessor;
        let mut sink = Vec::new();
        let out_with_log = optioned.process("test data", Some(&mut sink));
        let out_without_log = optioned.process("test data", None);
        assert_eq!(out_with_log, out_without_log);
        assert_eq!(sink, vec!["Processing: test data".to_string()]);

        let polymorphic = introduce_null_object::after::DataProcessor;
        let mut buffer = BufferLog::default();
        assert_eq!(
            polymorphic.process("test data", &mut buffer),
            out_with_log
        );
        assert_eq!(buffer.messages, sink);
        assert_eq!(polymorphic.process("test data", &mut NullLog), out_with_log);
    }

    #[test]
    fn test_division_unchanged_for_valid_input() {
        let unchecked = introduce_assertion::before::Calculator;
        let asserted = introduce_assertion::after::Calculator;
        assert_eq!(unchecked.divide(10.0, 2.0), asserted.divide(10.0, 2.0));
        assert_eq!(asserted.divide(10.0, 2.0), 5.0);
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    #[cfg(debug_assertions)]
    fn test_assertion_fires_on_zero_denominator() {
        let _ = introduce_assertion::after::Calculator.divide(1.0, 0.0);
    }
}
