//! Moving features between objects: Substitute Algorithm, Move Method,
//! Move Field, Extract Class, Inline Class, Hide Delegate, Introduce
//! Foreign Method and Introduce Local Extension.

/// Substitute Algorithm: an if-ladder of price multipliers becomes a table.
pub mod substitute_algorithm {
    /// A priced line item with a merchandising category.
    #[derive(Debug, Clone)]
    pub struct Item {
        pub category: String,
        pub price: f64,
    }

    pub mod before {
        use super::Item;

        #[derive(Debug, Default)]
        pub struct PricingService;

        impl PricingService {
            #[must_use]
            pub fn total(&self, items: &[Item]) -> f64 {
                let mut total = 0.0;
                for item in items {
                    if item.category == "book" {
                        total += item.price * 0.9;
                    } else if item.category == "electronics" {
                        total += item.price * 1.1;
                    } else {
                        total += item.price;
                    }
                }
                total
            }
        }
    }

    pub mod after {
        use once_cell::sync::Lazy;
        use rustc_hash::FxHashMap;

        use super::Item;

        static MULTIPLIERS: Lazy<FxHashMap<&'static str, f64>> = Lazy::new(|| {
            let mut m = FxHashMap::default();
            m.insert("book", 0.9);
            m.insert("electronics", 1.1);
            m
        });

        #[derive(Debug, Default)]
        pub struct PricingService;

        impl PricingService {
            #[must_use]
            pub fn total(&self, items: &[Item]) -> f64 {
                items
                    .iter()
                    .map(|item| {
                        item.price
                            * MULTIPLIERS
                                .get(item.category.as_str())
                                .copied()
                                .unwrap_or(1.0)
                    })
                    .sum()
            }
        }
    }
}

/// Move Method: transfers belong to the bank, not to one account.
pub mod move_method {
    pub mod before {
        #[derive(Debug)]
        pub struct Account {
            balance: f64,
        }

        impl Account {
            #[must_use]
            pub fn new(balance: f64) -> Self {
                Self { balance }
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            // Knows about the other account; belongs on Bank.
            pub fn transfer_to(&mut self, target: &mut Account, amount: f64) -> bool {
                if self.balance >= amount {
                    self.balance -= amount;
                    target.balance += amount;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct Account {
            balance: f64,
        }

        impl Account {
            #[must_use]
            pub fn new(balance: f64) -> Self {
                Self { balance }
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            pub fn deposit(&mut self, amount: f64) {
                self.balance += amount;
            }

            pub fn withdraw(&mut self, amount: f64) {
                self.balance -= amount;
            }
        }

        #[derive(Debug, Default)]
        pub struct Bank;

        impl Bank {
            pub fn transfer(&self, from: &mut Account, to: &mut Account, amount: f64) -> bool {
                if from.balance() >= amount {
                    from.withdraw(amount);
                    to.deposit(amount);
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Move Field: address parts leave the customer's string map.
pub mod move_field {
    pub mod before {
        use rustc_hash::FxHashMap;

        #[derive(Debug)]
        pub struct Customer {
            pub name: String,
            address: FxHashMap<&'static str, String>,
        }

        impl Customer {
            #[must_use]
            pub fn new(name: &str, street: &str, city: &str, zip_code: &str) -> Self {
                let mut address = FxHashMap::default();
                address.insert("street", street.to_string());
                address.insert("city", city.to_string());
                address.insert("zip_code", zip_code.to_string());
                Self {
                    name: name.to_string(),
                    address,
                }
            }

            #[must_use]
            pub fn address(&self) -> String {
                format!(
                    "{}, {} {}",
                    self.address.get("street").map_or("", String::as_str),
                    self.address.get("city").map_or("", String::as_str),
                    self.address.get("zip_code").map_or("", String::as_str),
                )
            }
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct Address {
            street: String,
            city: String,
            zip_code: String,
        }

        impl Address {
            #[must_use]
            pub fn new(street: &str, city: &str, zip_code: &str) -> Self {
                Self {
                    street: street.to_string(),
                    city: city.to_string(),
                    zip_code: zip_code.to_string(),
                }
            }

            #[must_use]
            pub fn full(&self) -> String {
                format!("{}, {} {}", self.street, self.city, self.zip_code)
            }
        }

        #[derive(Debug)]
        pub struct Customer {
            pub name: String,
            address: Address,
        }

        impl Customer {
            #[must_use]
            pub fn new(name: &str, address: Address) -> Self {
                Self {
                    name: name.to_string(),
                    address,
                }
            }

            #[must_use]
            pub fn address(&self) -> String {
                self.address.full()
            }
        }
    }
}

/// Extract Class: the office phone number becomes its own type.
pub mod extract_class {
    pub mod before {
        #[derive(Debug)]
        pub struct Person {
            pub name: String,
            pub office_area_code: String,
            pub office_number: String,
        }

        impl Person {
            #[must_use]
            pub fn telephone_number(&self) -> String {
                format!("({}) {}", self.office_area_code, self.office_number)
            }
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct TelephoneNumber {
            area_code: String,
            number: String,
        }

        impl TelephoneNumber {
            #[must_use]
            pub fn new(area_code: &str, number: &str) -> Self {
                Self {
                    area_code: area_code.to_string(),
                    number: number.to_string(),
                }
            }

            #[must_use]
            pub fn formatted(&self) -> String {
                format!("({}) {}", self.area_code, self.number)
            }
        }

        #[derive(Debug)]
        pub struct Person {
            pub name: String,
            office_telephone: Option<TelephoneNumber>,
        }

        impl Person {
            #[must_use]
            pub fn new(name: &str) -> Self {
                Self {
                    name: name.to_string(),
                    office_telephone: None,
                }
            }

            pub fn set_office_telephone(&mut self, telephone: TelephoneNumber) {
                self.office_telephone = Some(telephone);
            }

            #[must_use]
            pub fn office_telephone(&self) -> String {
                self.office_telephone
                    .as_ref()
                    .map_or_else(String::new, TelephoneNumber::formatted)
            }
        }
    }
}

/// Inline Class: a one-method validator folds back into its only caller.
pub mod inline_class {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct OrderValidator;

        impl OrderValidator {
            #[must_use]
            pub fn is_valid(&self, total: f64) -> bool {
                total > 0.0
            }
        }

        #[derive(Debug, Default)]
        pub struct OrderProcessor {
            validator: OrderValidator,
        }

        impl OrderProcessor {
            #[must_use]
            pub fn process(&self, total: f64) -> bool {
                self.validator.is_valid(total)
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct OrderProcessor;

        impl OrderProcessor {
            #[must_use]
            pub fn process(&self, total: f64) -> bool {
                self.is_valid_order(total)
            }

            fn is_valid_order(&self, total: f64) -> bool {
                total > 0.0
            }
        }
    }
}

/// Hide Delegate: callers ask the person, not the person's department.
pub mod hide_delegate {
    pub mod before {
        #[derive(Debug, Clone)]
        pub struct Department {
            manager: String,
        }

        impl Department {
            #[must_use]
            pub fn new(manager: &str) -> Self {
                Self {
                    manager: manager.to_string(),
                }
            }

            #[must_use]
            pub fn manager(&self) -> &str {
                &self.manager
            }
        }

        #[derive(Debug)]
        pub struct Person {
            department: Department,
        }

        impl Person {
            #[must_use]
            pub fn new(department: Department) -> Self {
                Self { department }
            }

            // Callers must traverse: person.department().manager()
            #[must_use]
            pub fn department(&self) -> &Department {
                &self.department
            }
        }
    }

    pub mod after {
        pub use super::before::Department;

        #[derive(Debug)]
        pub struct Person {
            department: Department,
        }

        impl Person {
            #[must_use]
            pub fn new(department: Department) -> Self {
                Self { department }
            }

            /// The delegation stays private.
            #[must_use]
            pub fn manager(&self) -> &str {
                self.department.manager()
            }
        }
    }
}

/// A year-month pair standing in for a calendar library the codebase does
/// not own. Used by the foreign-method and local-extension pairs below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

/// Introduce Foreign Method: month arithmetic done inline at a call site
/// gets a named home next to the caller.
pub mod introduce_foreign_method {
    use super::Period;

    pub mod before {
        use super::Period;

        #[derive(Debug, Default)]
        pub struct ReportGenerator;

        impl ReportGenerator {
            #[must_use]
            pub fn report_title(&self, current: Period) -> String {
                // Library arithmetic spelled out where it is needed
                let next = if current.month == 12 {
                    Period {
                        year: current.year + 1,
                        month: 1,
                    }
                } else {
                    Period {
                        year: current.year,
                        month: current.month + 1,
                    }
                };
                format!("Report for {}-{:02}", next.year, next.month)
            }
        }
    }

    pub mod after {
        use super::Period;

        #[derive(Debug, Default)]
        pub struct ReportGenerator;

        impl ReportGenerator {
            #[must_use]
            pub fn report_title(&self, current: Period) -> String {
                let next = Self::next_month(current);
                format!("Report for {}-{:02}", next.year, next.month)
            }

            // Foreign method: belongs on Period, hosted here until it can
            // move upstream.
            fn next_month(period: Period) -> Period {
                if period.month == 12 {
                    Period {
                        year: period.year + 1,
                        month: 1,
                    }
                } else {
                    Period {
                        year: period.year,
                        month: period.month + 1,
                    }
                }
            }
        }
    }
}

/// Introduce Local Extension: when one foreign method is not enough, wrap
/// the library type and give the extension a real surface.
pub mod introduce_local_extension {
    use super::Period;

    /// Wrapper around [`Period`] carrying the month arithmetic the library
    /// lacks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PeriodExt(pub Period);

    impl PeriodExt {
        #[must_use]
        pub fn next_month(self) -> Period {
            let Period { year, month } = self.0;
            if month == 12 {
                Period {
                    year: year + 1,
                    month: 1,
                }
            } else {
                Period { year, month: month + 1 }
            }
        }

        #[must_use]
        pub fn previous_month(self) -> Period {
            let Period { year, month } = self.0;
            if month == 1 {
                Period {
                    year: year - 1,
                    month: 12,
                }
            } else {
                Period { year, month: month - 1 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_algorithm_totals_match() {
        let items = vec![
            substitute_algorithm::Item {
                category: "book".into(),
                price: 20.0,
            },
            substitute_algorithm::Item {
                category: "electronics".into(),
                price: 100.0,
            },
            substitute_algorithm::Item {
                category: "clothing".into(),
                price: 50.0,
            },
        ];
        let ladder = substitute_algorithm::before::PricingService.total(&items);
        let table = substitute_algorithm::after::PricingService.total(&items);
        assert_eq!(ladder, table);
        assert_eq!(table, 18.0 + 110.0 + 50.0);
    }

    #[test]
    fn test_move_method_transfer_matches() {
        let mut from_before = move_method::before::Account::new(1000.0);
        let mut to_before = move_method::before::Account::new(500.0);
        assert!(from_before.transfer_to(&mut to_before, 200.0));

        let mut from_after = move_method::after::Account::new(1000.0);
        let mut to_after = move_method::after::Account::new(500.0);
        assert!(move_method::after::Bank.transfer(&mut from_after, &mut to_after, 200.0));

        assert_eq!(from_before.balance(), from_after.balance());
        assert_eq!(to_before.balance(), to_after.balance());

        // Insufficient funds refused either way
        assert!(!from_before.transfer_to(&mut to_before, 10_000.0));
        assert!(!move_method::after::Bank.transfer(&mut from_after, &mut to_after, 10_000.0));
    }

    #[test]
    fn test_move_field_address_matches() {
        let map_backed =
            move_field::before::Customer::new("John Doe", "123 Main St", "Anytown", "12345");
        let typed = move_field::after::Customer::new(
            "John Doe",
            move_field::after::Address::new("123 Main St", "Anytown", "12345"),
        );
        assert_eq!(map_backed.address(), typed.address());
        assert_eq!(typed.address(), "123 Main St, Anytown 12345");
    }

    #[test]
    fn test_extract_class_phone_matches() {
        let flat = extract_class::before::Person {
            name: "Jane Smith".into(),
            office_area_code: "555".into(),
            office_number: "123-4567".into(),
        };
        let mut extracted = extract_class::after::Person::new("Jane Smith");
        extracted.set_office_telephone(extract_class::after::TelephoneNumber::new(
            "555", "123-4567",
        ));
        assert_eq!(flat.telephone_number(), extracted.office_telephone());

        let phoneless = extract_class::after::Person::new("Sam");
        assert_eq!(phoneless.office_telephone(), "");
    }

    #[test]
    fn test_inline_class_validation_matches() {
        let delegating = inline_class::before::OrderProcessor::default();
        let inlined = inline_class::after::OrderProcessor;
        for total in [150.0, 0.0, -5.0] {
            assert_eq!(delegating.process(total), inlined.process(total));
        }
    }

    #[test]
    fn test_hide_delegate_manager_matches() {
        let department = hide_delegate::before::Department::new("Alice");
        let exposed = hide_delegate::before::Person::new(department.clone());
        let hidden = hide_delegate::after::Person::new(department);
        assert_eq!(exposed.department().manager(), hidden.manager());
    }

    #[test]
    fn test_foreign_method_report_titles_match() {
        for period in [
            Period { year: 2024, month: 6 },
            Period { year: 2024, month: 12 },
        ] {
            assert_eq!(
                introduce_foreign_method::before::ReportGenerator.report_title(period),
                introduce_foreign_method::after::ReportGenerator.report_title(period)
            );
        }
    }

    #[test]
    fn test_local_extension_month_arithmetic() {
        let june = introduce_local_extension::PeriodExt(Period { year: 2024, month: 6 });
        assert_eq!(june.next_month(), Period { year: 2024, month: 7 });
        assert_eq!(june.previous_month(), Period { year: 2024, month: 5 });

        let december = introduce_local_extension::PeriodExt(Period { year: 2024, month: 12 });
        assert_eq!(december.next_month(), Period { year: 2025, month: 1 });

        let january = introduce_local_extension::PeriodExt(Period { year: 2024, month: 1 });
        assert_eq!(january.previous_month(), Period { year: 2023, month: 12 });
    }
}
