//! Dealing with generalization: Pull Up Field, Pull Up Method, Pull Up
//! Constructor Body, Push Down Method, Push Down Field, Extract Subclass,
//! Extract Superclass, Extract Interface and Collapse Hierarchy.
//!
//! There is no inheritance here; the hierarchy refactorings translate to
//! composition, shared structs and traits, which is where the same
//! duplication pressures show up.

use std::f64::consts::PI;

/// Pull Up Field: the duplicated name field moves into one shared struct.
pub mod pull_up_field {
    pub mod before {
        #[derive(Debug)]
        pub struct Manager {
            pub name: String,
            pub budget: f64,
        }

        #[derive(Debug)]
        pub struct Engineer {
            pub name: String,
            pub skills: Vec<String>,
        }
    }

    pub mod after {
        /// The common identity both roles were duplicating.
        #[derive(Debug, Clone)]
        pub struct Employee {
            pub name: String,
        }

        #[derive(Debug)]
        pub struct Manager {
            pub employee: Employee,
            pub budget: f64,
        }

        #[derive(Debug)]
        pub struct Engineer {
            pub employee: Employee,
            pub skills: Vec<String>,
        }
    }
}

/// Pull Up Method: circumference joins area in the shared contract.
pub mod pull_up_method {
    use super::PI;

    pub mod before {
        use super::PI;

        /// Only `area` is in the contract; callers who want perimeter must
        /// downcast or know the concrete type.
        pub trait Shape {
            fn area(&self) -> f64;
        }

        pub struct Circle {
            pub radius: f64,
        }

        impl Shape for Circle {
            fn area(&self) -> f64 {
                PI * self.radius * self.radius
            }
        }

        impl Circle {
            #[must_use]
            pub fn circumference(&self) -> f64 {
                2.0 * PI * self.radius
            }
        }

        pub struct Square {
            pub side: f64,
        }

        impl Shape for Square {
            fn area(&self) -> f64 {
                self.side * self.side
            }
        }

        impl Square {
            #[must_use]
            pub fn circumference(&self) -> f64 {
                4.0 * self.side
            }
        }
    }

    pub mod after {
        use super::PI;

        pub trait Shape {
            fn area(&self) -> f64;
            fn circumference(&self) -> f64;
        }

        pub struct Circle {
            pub radius: f64,
        }

        impl Shape for Circle {
            fn area(&self) -> f64 {
                PI * self.radius * self.radius
            }

            fn circumference(&self) -> f64 {
                2.0 * PI * self.radius
            }
        }

        pub struct Square {
            pub side: f64,
        }

        impl Shape for Square {
            fn area(&self) -> f64 {
                self.side * self.side
            }

            fn circumference(&self) -> f64 {
                4.0 * self.side
            }
        }
    }
}

/// Pull Up Constructor Body: shared initialization goes through the shared
/// type's constructor.
pub mod pull_up_constructor_body {
    /// Identity shared by all vehicles.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Vehicle {
        pub make: String,
        pub model: String,
        pub year: u16,
    }

    impl Vehicle {
        #[must_use]
        pub fn new(make: &str, model: &str, year: u16) -> Self {
            Self {
                make: make.to_string(),
                model: model.to_string(),
                year,
            }
        }
    }

    pub mod before {
        use super::Vehicle;

        #[derive(Debug)]
        pub struct Car {
            pub vehicle: Vehicle,
            pub doors: u8,
        }

        impl Car {
            /// Re-spells the vehicle initialization field by field.
            #[must_use]
            pub fn new(make: &str, model: &str, year: u16, doors: u8) -> Self {
                Self {
                    vehicle: Vehicle {
                        make: make.to_string(),
                        model: model.to_string(),
                        year,
                    },
                    doors,
                }
            }
        }

        #[derive(Debug)]
        pub struct Truck {
            pub vehicle: Vehicle,
            pub payload: f64,
        }

        impl Truck {
            #[must_use]
            pub fn new(make: &str, model: &str, year: u16, payload: f64) -> Self {
                Self {
                    vehicle: Vehicle {
                        make: make.to_string(),
                        model: model.to_string(),
                        year,
                    },
                    payload,
                }
            }
        }
    }

    pub mod after {
        use super::Vehicle;

        #[derive(Debug)]
        pub struct Car {
            pub vehicle: Vehicle,
            pub doors: u8,
        }

        impl Car {
            #[must_use]
            pub fn new(make: &str, model: &str, year: u16, doors: u8) -> Self {
                Self {
                    vehicle: Vehicle::new(make, model, year),
                    doors,
                }
            }
        }

        #[derive(Debug)]
        pub struct Truck {
            pub vehicle: Vehicle,
            pub payload: f64,
        }

        impl Truck {
            #[must_use]
            pub fn new(make: &str, model: &str, year: u16, payload: f64) -> Self {
                Self {
                    vehicle: Vehicle::new(make, model, year),
                    payload,
                }
            }
        }
    }
}

/// Push Down Method: a generic bonus nobody agreed on moves to the roles
/// that define it.
pub mod push_down_method {
    pub mod before {
        #[derive(Debug, Clone)]
        pub struct Employee {
            pub name: String,
        }

        impl Employee {
            /// One bonus for everyone, appropriate for no one.
            #[must_use]
            pub fn bonus(&self) -> f64 {
                1000.0
            }
        }

        #[derive(Debug)]
        pub struct Manager {
            pub employee: Employee,
            pub department: String,
        }

        #[derive(Debug)]
        pub struct Engineer {
            pub employee: Employee,
            pub skills: Vec<String>,
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct Employee {
            pub name: String,
        }

        #[derive(Debug)]
        pub struct Manager {
            pub employee: Employee,
            pub department: String,
        }

        impl Manager {
            #[must_use]
            pub fn bonus(&self) -> f64 {
                2000.0
            }
        }

        #[derive(Debug)]
        pub struct Engineer {
            pub employee: Employee,
            pub skills: Vec<String>,
        }

        impl Engineer {
            #[must_use]
            pub fn bonus(&self) -> f64 {
                1500.0
            }
        }
    }
}

/// Push Down Field: category only matters for books.
pub mod push_down_field {
    pub mod before {
        #[derive(Debug, Clone)]
        pub struct Product {
            pub name: String,
            pub price: f64,
            /// Unused by electronics, carried anyway.
            pub category: String,
        }

        #[derive(Debug)]
        pub struct Book {
            pub product: Product,
            pub author: String,
        }

        #[derive(Debug)]
        pub struct Electronics {
            pub product: Product,
            pub warranty_months: u32,
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct Product {
            pub name: String,
            pub price: f64,
        }

        #[derive(Debug)]
        pub struct Book {
            pub product: Product,
            pub author: String,
            pub category: String,
        }

        #[derive(Debug)]
        pub struct Electronics {
            pub product: Product,
            pub warranty_months: u32,
        }
    }
}

/// Extract Subclass: the manager flag becomes a manager type.
pub mod extract_subclass {
    pub mod before {
        #[derive(Debug)]
        pub struct Employee {
            pub name: String,
            pub is_manager: bool,
            pub bonus: f64,
        }

        impl Employee {
            #[must_use]
            pub fn salary(&self, base_salary: f64) -> f64 {
                let mut salary = base_salary;
                if self.is_manager {
                    salary += self.bonus;
                }
                salary
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct Employee {
            pub name: String,
        }

        impl Employee {
            #[must_use]
            pub fn salary(&self, base_salary: f64) -> f64 {
                base_salary
            }
        }

        #[derive(Debug)]
        pub struct Manager {
            pub employee: Employee,
            pub bonus: f64,
        }

        impl Manager {
            #[must_use]
            pub fn salary(&self, base_salary: f64) -> f64 {
                self.employee.salary(base_salary) + self.bonus
            }
        }
    }
}

/// Extract Superclass: two accounts share one balance core.
pub mod extract_superclass {
    pub mod before {
        #[derive(Debug)]
        pub struct SavingsAccount {
            balance: f64,
            pub interest_rate: f64,
        }

        impl SavingsAccount {
            #[must_use]
            pub fn new(balance: f64, interest_rate: f64) -> Self {
                Self {
                    balance,
                    interest_rate,
                }
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            pub fn deposit(&mut self, amount: f64) {
                self.balance += amount;
            }
        }

        #[derive(Debug)]
        pub struct CheckingAccount {
            balance: f64,
            pub overdraft_limit: f64,
        }

        impl CheckingAccount {
            #[must_use]
            pub fn new(balance: f64, overdraft_limit: f64) -> Self {
                Self {
                    balance,
                    overdraft_limit,
                }
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            pub fn deposit(&mut self, amount: f64) {
                self.balance += amount;
            }
        }
    }

    pub mod after {
        /// The balance behavior both accounts were duplicating.
        #[derive(Debug, Default)]
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
        }

        #[derive(Debug)]
        pub struct SavingsAccount {
            pub account: Account,
            pub interest_rate: f64,
        }

        #[derive(Debug)]
        pub struct CheckingAccount {
            pub account: Account,
            pub overdraft_limit: f64,
        }
    }
}

/// Extract Interface: one do-everything processor, four narrow contracts.
pub mod extract_interface {
    pub mod before {
        /// Callers depend on all four capabilities even when they need one.
        #[derive(Debug, Default)]
        pub struct DataPipeline;

        impl DataPipeline {
            #[must_use]
            pub fn read_data(&self) -> String {
                "data from source".to_string()
            }

            #[must_use]
            pub fn process_data(&self, data: &str) -> String {
                format!("processed: {data}")
            }

            #[must_use]
            pub fn validate_data(&self, data: &str) -> bool {
                !data.is_empty()
            }

            #[must_use]
            pub fn save_data(&self, data: &str) -> String {
                format!("Saving: {data}")
            }
        }
    }

    pub mod after {
        pub trait DataReader {
            fn read_data(&self) -> String;
        }

        pub trait DataTransformer {
            fn process_data(&self, data: &str) -> String;
        }

        pub trait DataValidator {
            fn validate_data(&self, data: &str) -> bool;
        }

        pub trait DataSaver {
            fn save_data(&self, data: &str) -> String;
        }

        #[derive(Debug, Default)]
        pub struct DataPipeline;

        impl DataReader for DataPipeline {
            fn read_data(&self) -> String {
                "data from source".to_string()
            }
        }

        impl DataTransformer for DataPipeline {
            fn process_data(&self, data: &str) -> String {
                format!("processed: {data}")
            }
        }

        impl DataValidator for DataPipeline {
            fn validate_data(&self, data: &str) -> bool {
                !data.is_empty()
            }
        }

        impl DataSaver for DataPipeline {
            fn save_data(&self, data: &str) -> String {
                format!("Saving: {data}")
            }
        }

        /// Names exactly the capabilities it uses; a read-only caller
        /// would bound on `DataReader` alone.
        pub fn run_pipeline(
            pipeline: &(impl DataReader + DataTransformer + DataValidator + DataSaver),
        ) -> Option<String> {
            let data = pipeline.read_data();
            let processed = pipeline.process_data(&data);
            if pipeline.validate_data(&processed) {
                Some(pipeline.save_data(&processed))
            } else {
                None
            }
        }
    }
}

/// Collapse Hierarchy: three nested structs that earned none of the
/// nesting become one.
pub mod collapse_hierarchy {
    pub mod before {
        #[derive(Debug, Clone)]
        pub struct Vehicle {
            pub make: String,
            pub model: String,
        }

        #[derive(Debug, Clone)]
        pub struct Car {
            pub vehicle: Vehicle,
            pub doors: u8,
        }

        #[derive(Debug, Clone)]
        pub struct Sedan {
            pub car: Car,
            pub trunk_size: f64,
        }

        impl Sedan {
            #[must_use]
            pub fn description(&self) -> String {
                format!(
                    "{} {} with {} doors and {} trunk",
                    self.car.vehicle.make, self.car.vehicle.model, self.car.doors, self.trunk_size
                )
            }
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct Sedan {
            pub make: String,
            pub model: String,
            pub doors: u8,
            pub trunk_size: f64,
        }

        impl Sedan {
            #[must_use]
            pub fn description(&self) -> String {
                format!(
                    "{} {} with {} doors and {} trunk",
                    self.make, self.model, self.doors, self.trunk_size
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulled_up_field_keeps_the_name() {
        let duplicated = pull_up_field::before::Manager {
            name: "John".into(),
            budget: 100_000.0,
        };
        let shared = pull_up_field::after::Manager {
            employee: pull_up_field::after::Employee {
                name: "John".into(),
            },
            budget: 100_000.0,
        };
        assert_eq!(duplicated.name, shared.employee.name);
    }

    #[test]
    fn test_pulled_up_method_is_callable_through_the_trait() {
        use pull_up_method::after::Shape;

        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(pull_up_method::after::Circle { radius: 5.0 }),
            Box::new(pull_up_method::after::Square { side: 4.0 }),
        ];
        let through_trait: Vec<f64> = shapes.iter().map(|s| s.circumference()).collect();

        // Same numbers the concrete-only methods produced
        let concrete = vec![
            pull_up_method::before::Circle { radius: 5.0 }.circumference(),
            pull_up_method::before::Square { side: 4.0 }.circumference(),
        ];
        assert_eq!(through_trait, concrete);
    }

    #[test]
    fn test_pulled_up_constructor_builds_the_same_vehicles() {
        let duplicated = pull_up_constructor_body::before::Car::new("Toyota", "Camry", 2020, 4);
        let shared = pull_up_constructor_body::after::Car::new("Toyota", "Camry", 2020, 4);
        assert_eq!(duplicated.vehicle, shared.vehicle);
        assert_eq!(duplicated.doors, shared.doors);

        let truck_before =
            pull_up_constructor_body::before::Truck::new("Ford", "F150", 2020, 2000.0);
        let truck_after = pull_up_constructor_body::after::Truck::new("Ford", "F150", 2020, 2000.0);
        assert_eq!(truck_before.vehicle, truck_after.vehicle);
    }

    #[test]
    fn test_pushed_down_bonus_is_role_specific() {
        let generic = push_down_method::before::Employee {
            name: "Anyone".into(),
        };
        assert_eq!(generic.bonus(), 1000.0);

        let manager = push_down_method::after::Manager {
            employee: push_down_method::after::Employee {
                name: "John".into(),
            },
            department: "Eng".into(),
        };
        let engineer = push_down_method::after::Engineer {
            employee: push_down_method::after::Employee {
                name: "Jane".into(),
            },
            skills: vec!["rust".into()],
        };
        assert_eq!(manager.bonus(), 2000.0);
        assert_eq!(engineer.bonus(), 1500.0);
    }

    #[test]
    fn test_pushed_down_field_lives_only_on_books() {
        let book = push_down_field::after::Book {
            product: push_down_field::after::Product {
                name: "Refactoring".into(),
                price: 40.0,
            },
            author: "M. Fowler".into(),
            category: "programming".into(),
        };
        assert_eq!(book.category, "programming");
        // Electronics no longer carries a category field at all.
        let electronics = push_down_field::after::Electronics {
            product: push_down_field::after::Product {
                name: "Headphones".into(),
                price: 90.0,
            },
            warranty_months: 24,
        };
        assert_eq!(electronics.warranty_months, 24);
    }

    #[test]
    fn test_extracted_subclass_matches_the_flag() {
        let flagged_manager = extract_subclass::before::Employee {
            name: "John".into(),
            is_manager: true,
            bonus: 5000.0,
        };
        let flagged_regular = extract_subclass::before::Employee {
            name: "Jane".into(),
            is_manager: false,
            bonus: 0.0,
        };

        let typed_manager = extract_subclass::after::Manager {
            employee: extract_subclass::after::Employee {
                name: "John".into(),
            },
            bonus: 5000.0,
        };
        let typed_regular = extract_subclass::after::Employee {
            name: "Jane".into(),
        };

        assert_eq!(
            flagged_manager.salary(80_000.0),
            typed_manager.salary(80_000.0)
        );
        assert_eq!(
            flagged_regular.salary(80_000.0),
            typed_regular.salary(80_000.0)
        );
    }

    #[test]
    fn test_extracted_superclass_behaves_like_the_copies() {
        let mut savings_before = extract_superclass::before::SavingsAccount::new(1000.0, 0.02);
        let mut checking_before = extract_superclass::before::CheckingAccount::new(500.0, 200.0);
        savings_before.deposit(100.0);
        checking_before.deposit(100.0);

        let mut savings_after = extract_superclass::after::SavingsAccount {
            account: extract_superclass::after::Account::new(1000.0),
            interest_rate: 0.02,
        };
        let mut checking_after = extract_superclass::after::CheckingAccount {
            account: extract_superclass::after::Account::new(500.0),
            overdraft_limit: 200.0,
        };
        savings_after.account.deposit(100.0);
        checking_after.account.deposit(100.0);

        assert_eq!(savings_before.balance(), savings_after.account.balance());
        assert_eq!(checking_before.balance(), checking_after.account.balance());
    }

    #[test]
    fn test_extracted_interfaces_run_the_same_pipeline() {
        let monolith = extract_interface::before::DataPipeline;
        let data = monolith.read_data();
        let processed = monolith.process_data(&data);
        let saved = monolith.validate_data(&processed).then(|| monolith.save_data(&processed));

        let segregated = extract_interface::after::DataPipeline;
        assert_eq!(extract_interface::after::run_pipeline(&segregated), saved);
    }

    #[test]
    fn test_collapsed_hierarchy_describes_itself_identically() {
        let nested = collapse_hierarchy::before::Sedan {
            car: collapse_hierarchy::before::Car {
                vehicle: collapse_hierarchy::before::Vehicle {
                    make: "Toyota".into(),
                    model: "Camry".into(),
                },
                doors: 4,
            },
            trunk_size: 15.1,
        };
        let flat = collapse_hierarchy::after::Sedan {
            make: "Toyota".into(),
            model: "Camry".into(),
            doors: 4,
            trunk_size: 15.1,
        };
        assert_eq!(nested.description(), flat.description());
    }
}
