//! The big refactorings: Tease Apart Inheritance, Convert Procedural
//! Design to Objects, Separate Domain from Presentation and Extract
//! Hierarchy.
//!
//! These are multi-step campaigns rather than single mechanical moves, so
//! each pair below shows the end state of the campaign against the
//! structure that motivated it.

use rustc_hash::FxHashMap;

/// Tease Apart Inheritance: one `rate` field doing double duty as salary
/// and base pay splits into honestly named per-role fields behind one
/// payable contract.
pub mod tease_apart_inheritance {
    pub mod before {
        /// `rate` means "monthly salary" for one subtype and "base pay" for
        /// the other; readers cannot tell which without the subtype.
        #[derive(Debug, Clone)]
        pub struct Employee {
            pub name: String,
            pub rate: f64,
        }

        #[derive(Debug)]
        pub struct SalariedEmployee {
            pub employee: Employee,
        }

        impl SalariedEmployee {
            #[must_use]
            pub fn pay(&self) -> f64 {
                self.employee.rate
            }
        }

        #[derive(Debug)]
        pub struct CommissionedEmployee {
            pub employee: Employee,
            pub commission: f64,
        }

        impl CommissionedEmployee {
            #[must_use]
            pub fn pay(&self) -> f64 {
                self.employee.rate + self.commission
            }
        }
    }

    pub mod after {
        pub trait Payable {
            fn pay(&self) -> f64;
        }

        #[derive(Debug, Clone)]
        pub struct Employee {
            pub name: String,
        }

        #[derive(Debug)]
        pub struct SalariedEmployee {
            pub employee: Employee,
            pub salary: f64,
        }

        impl Payable for SalariedEmployee {
            fn pay(&self) -> f64 {
                self.salary
            }
        }

        #[derive(Debug)]
        pub struct CommissionedEmployee {
            pub employee: Employee,
            pub base_salary: f64,
            pub commission: f64,
        }

        impl Payable for CommissionedEmployee {
            fn pay(&self) -> f64 {
                self.base_salary + self.commission
            }
        }
    }
}

/// Convert Procedural Design to Objects: free functions over a shared
/// account table become a bank owning account objects.
pub mod convert_procedural_to_objects {
    pub mod before {
        use rustc_hash::FxHashMap;

        /// The "global" account table, threaded through every call.
        pub type Accounts = FxHashMap<String, f64>;

        pub fn create_account(accounts: &mut Accounts, id: &str, balance: f64) {
            accounts.insert(id.to_string(), balance);
        }

        #[must_use]
        pub fn balance(accounts: &Accounts, id: &str) -> f64 {
            accounts.get(id).copied().unwrap_or(0.0)
        }

        pub fn deposit(accounts: &mut Accounts, id: &str, amount: f64) {
            if let Some(balance) = accounts.get_mut(id) {
                *balance += amount;
            }
        }

        pub fn withdraw(accounts: &mut Accounts, id: &str, amount: f64) -> bool {
            match accounts.get_mut(id) {
                Some(balance) if *balance >= amount => {
                    *balance -= amount;
                    true
                }
                _ => false,
            }
        }
    }

    pub mod after {
        use rustc_hash::FxHashMap;

        #[derive(Debug)]
        pub struct Account {
            id: String,
            balance: f64,
        }

        impl Account {
            #[must_use]
            pub fn new(id: &str, initial_balance: f64) -> Self {
                Self {
                    id: id.to_string(),
                    balance: initial_balance,
                }
            }

            #[must_use]
            pub fn id(&self) -> &str {
                &self.id
            }

            #[must_use]
            pub fn balance(&self) -> f64 {
                self.balance
            }

            pub fn deposit(&mut self, amount: f64) {
                self.balance += amount;
            }

            pub fn withdraw(&mut self, amount: f64) -> bool {
                if self.balance >= amount {
                    self.balance -= amount;
                    true
                } else {
                    false
                }
            }
        }

        #[derive(Debug, Default)]
        pub struct Bank {
            accounts: FxHashMap<String, Account>,
        }

        impl Bank {
            pub fn create_account(&mut self, id: &str, initial_balance: f64) {
                self.accounts
                    .insert(id.to_string(), Account::new(id, initial_balance));
            }

            #[must_use]
            pub fn account(&self, id: &str) -> Option<&Account> {
                self.accounts.get(id)
            }

            pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
                self.accounts.get_mut(id)
            }
        }
    }
}

/// Separate Domain from Presentation: formatting leaves the product and
/// moves into a presenter.
pub mod separate_domain_from_presentation {
    pub mod before {
        #[derive(Debug)]
        pub struct Product {
            pub name: String,
            pub price: f64,
        }

        impl Product {
            /// Presentation baked into the domain object.
            #[must_use]
            pub fn display(&self) -> String {
                format!("Product: {} - ${:.2}", self.name, self.price)
            }

            pub fn apply_discount(&mut self, discount: f64) {
                self.price *= 1.0 - discount;
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct Product {
            name: String,
            price: f64,
        }

        impl Product {
            #[must_use]
            pub fn new(name: &str, price: f64) -> Self {
                Self {
                    name: name.to_string(),
                    price,
                }
            }

            #[must_use]
            pub fn name(&self) -> &str {
                &self.name
            }

            #[must_use]
            pub fn price(&self) -> f64 {
                self.price
            }

            pub fn apply_discount(&mut self, discount: f64) {
                self.price *= 1.0 - discount;
            }
        }

        /// All formatting decisions live here; the product knows nothing
        /// about strings.
        #[derive(Debug, Default)]
        pub struct ProductPresenter;

        impl ProductPresenter {
            #[must_use]
            pub fn display(&self, product: &Product) -> String {
                format!("Product: {} - ${:.2}", product.name(), product.price())
            }

            /// Renders a sale price without mutating the domain object.
            #[must_use]
            pub fn display_with_discount(&self, product: &Product, discount: f64) -> String {
                let discounted = product.price() * (1.0 - discount);
                format!(
                    "Product: {} - Regular: ${:.2}, Sale: ${:.2}",
                    product.name(),
                    product.price(),
                    discounted
                )
            }
        }
    }
}

/// Extract Hierarchy: an employee with a type tag and a field for every
/// possible role becomes one variant per role.
pub mod extract_hierarchy {
    pub mod before {
        /// Which fields matter depends on `kind`; the rest ride along as
        /// zeroes.
        #[derive(Debug)]
        pub struct Employee {
            pub name: String,
            pub kind: String,
            pub salary: f64,
            pub commission: f64,
            pub bonus: f64,
        }

        impl Employee {
            #[must_use]
            pub fn pay(&self) -> f64 {
                match self.kind.as_str() {
                    "salaried" => self.salary,
                    "commissioned" => self.salary + self.commission,
                    "manager" => self.salary + self.bonus,
                    _ => 0.0,
                }
            }
        }
    }

    pub mod after {
        /// Each role carries exactly the fields it uses.
        #[derive(Debug)]
        pub enum Employee {
            Salaried {
                name: String,
                salary: f64,
            },
            Commissioned {
                name: String,
                salary: f64,
                commission: f64,
            },
            Manager {
                name: String,
                salary: f64,
                bonus: f64,
            },
        }

        impl Employee {
            #[must_use]
            pub fn name(&self) -> &str {
                match self {
                    Self::Salaried { name, .. }
                    | Self::Commissioned { name, .. }
                    | Self::Manager { name, .. } => name,
                }
            }

            #[must_use]
            pub fn pay(&self) -> f64 {
                match self {
                    Self::Salaried { salary, .. } => *salary,
                    Self::Commissioned {
                        salary, commission, ..
                    } => salary + commission,
                    Self::Manager { salary, bonus, .. } => salary + bonus,
                }
            }
        }
    }
}

/// Seeds the procedural account table and the object-oriented bank with
/// the same transactions, for side-by-side comparison.
#[must_use]
pub fn seeded_banks() -> (FxHashMap<String, f64>, convert_procedural_to_objects::after::Bank) {
    let mut accounts = FxHashMap::default();
    convert_procedural_to_objects::before::create_account(&mut accounts, "ACC001", 1000.0);
    convert_procedural_to_objects::before::deposit(&mut accounts, "ACC001", 500.0);

    let mut bank = convert_procedural_to_objects::after::Bank::default();
    bank.create_account("ACC001", 1000.0);
    if let Some(account) = bank.account_mut("ACC001") {
        account.deposit(500.0);
    }

    (accounts, bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teased_apart_pay_matches_the_overloaded_rate() {
        let salaried_before = tease_apart_inheritance::before::SalariedEmployee {
            employee: tease_apart_inheritance::before::Employee {
                name: "John".into(),
                rate: 5000.0,
            },
        };
        let commissioned_before = tease_apart_inheritance::before::CommissionedEmployee {
            employee: tease_apart_inheritance::before::Employee {
                name: "Jane".into(),
                rate: 3000.0,
            },
            commission: 500.0,
        };

        use tease_apart_inheritance::after::Payable;
        let payables: Vec<Box<dyn Payable>> = vec![
            Box::new(tease_apart_inheritance::after::SalariedEmployee {
                employee: tease_apart_inheritance::after::Employee {
                    name: "John".into(),
                },
                salary: 5000.0,
            }),
            Box::new(tease_apart_inheritance::after::CommissionedEmployee {
                employee: tease_apart_inheritance::after::Employee {
                    name: "Jane".into(),
                },
                base_salary: 3000.0,
                commission: 500.0,
            }),
        ];

        assert_eq!(payables[0].pay(), salaried_before.pay());
        assert_eq!(payables[1].pay(), commissioned_before.pay());
    }

    #[test]
    fn test_bank_objects_mirror_the_account_table() {
        let (accounts, bank) = seeded_banks();
        let table_balance =
            convert_procedural_to_objects::before::balance(&accounts, "ACC001");
        let object_balance = bank
            .account("ACC001")
            .map_or(0.0, convert_procedural_to_objects::after::Account::balance);
        assert_eq!(table_balance, 1500.0);
        assert_eq!(object_balance, table_balance);
    }

    #[test]
    fn test_withdrawals_agree_on_insufficient_funds() {
        let (mut accounts, mut bank) = seeded_banks();

        let table_ok =
            convert_procedural_to_objects::before::withdraw(&mut accounts, "ACC001", 2000.0);
        let object_ok = bank
            .account_mut("ACC001")
            .is_some_and(|account| account.withdraw(2000.0));
        assert!(!table_ok);
        assert_eq!(table_ok, object_ok);

        let table_ok =
            convert_procedural_to_objects::before::withdraw(&mut accounts, "ACC001", 200.0);
        let object_ok = bank
            .account_mut("ACC001")
            .is_some_and(|account| account.withdraw(200.0));
        assert!(table_ok && object_ok);
        assert_eq!(
            convert_procedural_to_objects::before::balance(&accounts, "ACC001"),
            1300.0
        );
    }

    #[test]
    fn test_presenter_renders_what_the_domain_method_did() {
        let baked_in = separate_domain_from_presentation::before::Product {
            name: "Widget".into(),
            price: 100.0,
        };

        let product = separate_domain_from_presentation::after::Product::new("Widget", 100.0);
        let presenter = separate_domain_from_presentation::after::ProductPresenter;

        assert_eq!(presenter.display(&product), baked_in.display());
        assert_eq!(
            presenter.display_with_discount(&product, 0.1),
            "Product: Widget - Regular: $100.00, Sale: $90.00"
        );
        // Rendering the discount did not touch the price
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn test_hierarchy_variants_pay_like_the_tagged_struct() {
        let tagged = extract_hierarchy::before::Employee {
            name: "Bob".into(),
            kind: "commissioned".into(),
            salary: 4000.0,
            commission: 600.0,
            bonus: 0.0,
        };
        let variant = extract_hierarchy::after::Employee::Commissioned {
            name: "Bob".into(),
            salary: 4000.0,
            commission: 600.0,
        };
        assert_eq!(tagged.pay(), variant.pay());
        assert_eq!(variant.name(), "Bob");

        let manager = extract_hierarchy::after::Employee::Manager {
            name: "Ann".into(),
            salary: 6000.0,
            bonus: 1000.0,
        };
        assert_eq!(manager.pay(), 7000.0);

        let unknown_kind = extract_hierarchy::before::Employee {
            name: "Nobody".into(),
            kind: "contractor".into(),
            salary: 4000.0,
            commission: 0.0,
            bonus: 0.0,
        };
        // The tag-based version silently pays zero for unknown kinds; the
        // enum makes that state unrepresentable.
        assert_eq!(unknown_kind.pay(), 0.0);
    }
}
