//! Organizing data: Self-Encapsulate Field, Replace Data Value with
//! Object, Change Value to Reference, Change Reference to Value, Replace
//! Array with Object and Replace Magic Number with Symbolic Constant.

/// Self-Encapsulate Field: subtypes and invariants go through an accessor.
pub mod self_encapsulate_field {
    pub mod before {
        /// Anyone can write anything into the field.
        #[derive(Debug, Default)]
        pub struct Person {
            pub name: String,
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct Person {
            name: String,
        }

        impl Person {
            #[must_use]
            pub fn name(&self) -> &str {
                &self.name
            }

            /// Single write path; trimming is the invariant the raw field
            /// could not enforce.
            pub fn set_name(&mut self, name: &str) {
                self.name = name.trim().to_string();
            }
        }
    }
}

/// Replace Data Value with Object: a customer is more than a string.
pub mod replace_data_value_with_object {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct Order {
            customer: String,
        }

        impl Order {
            pub fn set_customer(&mut self, customer: &str) {
                self.customer = customer.to_string();
            }

            #[must_use]
            pub fn customer_name(&self) -> &str {
                &self.customer
            }
        }
    }

    pub mod after {
        #[derive(Debug, Clone)]
        pub struct Customer {
            name: String,
        }

        impl Customer {
            #[must_use]
            pub fn new(name: &str) -> Self {
                Self {
                    name: name.to_string(),
                }
            }

            #[must_use]
            pub fn name(&self) -> &str {
                &self.name
            }
        }

        #[derive(Debug, Default)]
        pub struct Order {
            customer: Option<Customer>,
        }

        impl Order {
            pub fn set_customer(&mut self, customer: Customer) {
                self.customer = Some(customer);
            }

            #[must_use]
            pub fn customer_name(&self) -> &str {
                self.customer.as_ref().map_or("", Customer::name)
            }
        }
    }
}

/// Change Value to Reference: all orders for one customer share one
/// registry entry instead of carrying private copies.
pub mod change_value_to_reference {
    use std::sync::{Arc, Mutex};

    use once_cell::sync::Lazy;
    use rustc_hash::FxHashMap;

    pub mod before {
        /// Each order owns an independent copy; updating one customer's
        /// data means hunting down every copy.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct Customer {
            pub name: String,
        }

        #[derive(Debug)]
        pub struct Order {
            pub customer: Customer,
        }

        impl Order {
            #[must_use]
            pub fn new(customer_name: &str) -> Self {
                Self {
                    customer: Customer {
                        name: customer_name.to_string(),
                    },
                }
            }
        }
    }

    /// Interned customer; one instance per name.
    #[derive(Debug)]
    pub struct Customer {
        name: String,
    }

    impl Customer {
        #[must_use]
        pub fn name(&self) -> &str {
            &self.name
        }
    }

    static REGISTRY: Lazy<Mutex<FxHashMap<String, Arc<Customer>>>> =
        Lazy::new(|| Mutex::new(FxHashMap::default()));

    /// Fetch or create the shared instance for `name`.
    #[must_use]
    pub fn customer(name: &str) -> Arc<Customer> {
        let mut registry = match REGISTRY.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(registry.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Customer {
                name: name.to_string(),
            })
        }))
    }

    pub mod after {
        use std::sync::Arc;

        use super::Customer;

        #[derive(Debug)]
        pub struct Order {
            pub customer: Arc<Customer>,
        }

        impl Order {
            #[must_use]
            pub fn new(customer_name: &str) -> Self {
                Self {
                    customer: super::customer(customer_name),
                }
            }
        }
    }
}

/// Change Reference to Value: when independence is the point, copy.
pub mod change_reference_to_value {
    use std::sync::Arc;

    pub mod before {
        use std::sync::Arc;

        /// Shared mutable-looking handle where each order really wants its
        /// own snapshot.
        #[derive(Debug)]
        pub struct Currency {
            pub code: Arc<String>,
        }
    }

    /// A plain value: cheap to copy, compared by content.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Currency {
        code: String,
    }

    impl Currency {
        #[must_use]
        pub fn new(code: &str) -> Self {
            Self {
                code: code.to_string(),
            }
        }

        #[must_use]
        pub fn code(&self) -> &str {
            &self.code
        }
    }

    /// Two references are "equal" only when they alias; two values are
    /// equal when their content is.
    #[must_use]
    pub fn reference_equality(a: &Arc<String>, b: &Arc<String>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

/// Replace Array with Object: indexed positions become named fields.
pub mod replace_array_with_object {
    pub mod before {
        /// `stats[0]` goals, `stats[1]` assists, `stats[2]` minutes; the
        /// reader has to just know.
        #[derive(Debug)]
        pub struct PerformanceData {
            stats: [u32; 3],
        }

        impl PerformanceData {
            #[must_use]
            pub fn new(stats: [u32; 3]) -> Self {
                Self { stats }
            }

            #[must_use]
            pub fn goals(&self) -> u32 {
                self.stats[0]
            }

            #[must_use]
            pub fn assists(&self) -> u32 {
                self.stats[1]
            }

            #[must_use]
            pub fn minutes_played(&self) -> u32 {
                self.stats[2]
            }
        }
    }

    pub mod after {
        #[derive(Debug)]
        pub struct PerformanceData {
            goals: u32,
            assists: u32,
            minutes_played: u32,
        }

        impl PerformanceData {
            #[must_use]
            pub fn new(goals: u32, assists: u32, minutes_played: u32) -> Self {
                Self {
                    goals,
                    assists,
                    minutes_played,
                }
            }

            #[must_use]
            pub fn goals(&self) -> u32 {
                self.goals
            }

            #[must_use]
            pub fn assists(&self) -> u32 {
                self.assists
            }

            #[must_use]
            pub fn minutes_played(&self) -> u32 {
                self.minutes_played
            }
        }
    }
}

/// Replace Magic Number with Symbolic Constant.
pub mod replace_magic_number_with_constant {
    pub mod before {
        #[derive(Debug)]
        pub struct Circle {
            pub radius: f64,
        }

        impl Circle {
            #[must_use]
            pub fn area(&self) -> f64 {
                3.14159 * self.radius * self.radius
            }

            #[must_use]
            pub fn circumference(&self) -> f64 {
                2.0 * 3.14159 * self.radius
            }
        }
    }

    pub mod after {
        /// The truncated pi the legacy formulas were written against.
        pub const PI: f64 = 3.14159;

        #[derive(Debug)]
        pub struct Circle {
            pub radius: f64,
        }

        impl Circle {
            #[must_use]
            pub fn area(&self) -> f64 {
                PI * self.radius * self.radius
            }

            #[must_use]
            pub fn circumference(&self) -> f64 {
                2.0 * PI * self.radius
            }
        }
    }
}
