//! Composing methods: carving function bodies into the right-sized pieces.
//!
//! Eight refactorings, each as a nested `before`/`after` pair:
//! Extract Method, Inline Method, Inline Temp, Replace Temp with Query,
//! Introduce Explaining Variable, Split Temporary Variable, Remove
//! Assignments to Parameters, Replace Method with Method Object.

/// Extract Method: a process function whose comments become method names.
pub mod extract_method {
    use crate::error::{Result, SmellbookError};

    /// What the order pipeline needs to know about one order.
    #[derive(Debug, Clone, Copy)]
    pub struct Order {
        pub subtotal: f64,
        pub weight: f64,
    }

    pub mod before {
        use tracing::info;

        use super::{Order, Result, SmellbookError};

        #[derive(Debug, Default)]
        pub struct OrderProcessor;

        impl OrderProcessor {
            pub fn process(&self, order: &Order) -> Result<f64> {
                // Validate order
                if order.subtotal <= 0.0 {
                    return Err(SmellbookError::validation("invalid order total"));
                }

                // Calculate tax
                let tax = order.subtotal * 0.08;

                // Calculate shipping
                let shipping = if order.weight > 10.0 { 15.0 } else { 5.0 };

                // Calculate total and save
                let total = order.subtotal + tax + shipping;
                info!(total, "saving order");

                Ok(total)
            }
        }
    }

    pub mod after {
        use tracing::info;

        use super::{Order, Result, SmellbookError};

        #[derive(Debug, Default)]
        pub struct OrderProcessor;

        impl OrderProcessor {
            pub fn process(&self, order: &Order) -> Result<f64> {
                self.validate(order)?;
                let tax = self.tax(order);
                let shipping = self.shipping(order);
                let total = order.subtotal + tax + shipping;
                self.save(total);
                Ok(total)
            }

            fn validate(&self, order: &Order) -> Result<()> {
                if order.subtotal <= 0.0 {
                    return Err(SmellbookError::validation("invalid order total"));
                }
                Ok(())
            }

            fn tax(&self, order: &Order) -> f64 {
                order.subtotal * 0.08
            }

            fn shipping(&self, order: &Order) -> f64 {
                if order.weight > 10.0 {
                    15.0
                } else {
                    5.0
                }
            }

            fn save(&self, total: f64) {
                info!(total, "saving order");
            }
        }
    }
}

/// Inline Method: accessors that only forward to a field.
pub mod inline_method {
    pub mod before {
        pub struct User {
            pub first_name: String,
            pub last_name: String,
        }

        impl User {
            #[must_use]
            pub fn full_name(&self) -> String {
                format!("{} {}", self.first_name(), self.last_name())
            }

            fn first_name(&self) -> &str {
                &self.first_name
            }

            fn last_name(&self) -> &str {
                &self.last_name
            }
        }
    }

    pub mod after {
        pub struct User {
            pub first_name: String,
            pub last_name: String,
        }

        impl User {
            #[must_use]
            pub fn full_name(&self) -> String {
                format!("{} {}", self.first_name, self.last_name)
            }
        }
    }
}

/// Inline Temp: a temp read once, folded into its use sites.
pub mod inline_temp {
    pub mod before {
        pub struct PriceCalculator {
            pub quantity: u32,
            pub item_price: f64,
        }

        impl PriceCalculator {
            #[must_use]
            pub fn price(&self) -> f64 {
                let base_price = f64::from(self.quantity) * self.item_price;
                if base_price > 1000.0 {
                    base_price * 0.95
                } else {
                    base_price * 0.98
                }
            }
        }
    }

    pub mod after {
        pub struct PriceCalculator {
            pub quantity: u32,
            pub item_price: f64,
        }

        impl PriceCalculator {
            #[must_use]
            pub fn price(&self) -> f64 {
                if f64::from(self.quantity) * self.item_price > 1000.0 {
                    f64::from(self.quantity) * self.item_price * 0.95
                } else {
                    f64::from(self.quantity) * self.item_price * 0.98
                }
            }
        }
    }
}

/// Replace Temp with Query: the base price becomes a method.
pub mod replace_temp_with_query {
    pub mod before {
        pub struct Order {
            pub quantity: u32,
            pub item_price: f64,
        }

        impl Order {
            #[must_use]
            pub fn price(&self) -> f64 {
                let base_price = f64::from(self.quantity) * self.item_price;
                base_price - self.discount(base_price)
            }

            fn discount(&self, base_price: f64) -> f64 {
                (base_price - 500.0).max(0.0) * 0.05
            }
        }
    }

    pub mod after {
        pub struct Order {
            pub quantity: u32,
            pub item_price: f64,
        }

        impl Order {
            #[must_use]
            pub fn price(&self) -> f64 {
                self.base_price() - self.discount()
            }

            fn base_price(&self) -> f64 {
                f64::from(self.quantity) * self.item_price
            }

            fn discount(&self) -> f64 {
                (self.base_price() - 500.0).max(0.0) * 0.05
            }
        }
    }
}

/// Introduce Explaining Variable: a scoring formula named term by term.
pub mod introduce_explaining_variable {
    pub mod before {
        pub struct PerformanceCalculator {
            pub goals: u32,
            pub assists: u32,
            pub minutes_played: u32,
        }

        impl PerformanceCalculator {
            #[must_use]
            pub fn performance(&self) -> f64 {
                f64::from(self.goals * 2)
                    + f64::from(self.assists) * 1.5
                    + f64::from(self.minutes_played) / 60.0 * 0.1
            }
        }
    }

    pub mod after {
        pub struct PerformanceCalculator {
            pub goals: u32,
            pub assists: u32,
            pub minutes_played: u32,
        }

        impl PerformanceCalculator {
            #[must_use]
            pub fn performance(&self) -> f64 {
                let goal_points = f64::from(self.goals * 2);
                let assist_points = f64::from(self.assists) * 1.5;
                let playing_time_bonus = f64::from(self.minutes_played) / 60.0 * 0.1;

                goal_points + assist_points + playing_time_bonus
            }
        }
    }
}

/// Split Temporary Variable: one binding per meaning.
pub mod split_temporary_variable {
    /// Initial and adjusted readings from one sensor pass.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Reading {
        pub initial: f64,
        pub adjusted: f64,
    }

    const CURRENT_TEMPERATURE: f64 = 25.0;
    const ADJUSTMENT: f64 = 2.5;

    pub mod before {
        use super::{Reading, ADJUSTMENT, CURRENT_TEMPERATURE};

        #[derive(Debug, Default)]
        pub struct TemperatureMonitor;

        impl TemperatureMonitor {
            #[must_use]
            pub fn reading(&self) -> Reading {
                let mut temp = CURRENT_TEMPERATURE;
                let initial = temp;

                // temp is reused for a different quantity
                temp += ADJUSTMENT;
                let adjusted = temp;

                Reading { initial, adjusted }
            }
        }
    }

    pub mod after {
        use super::{Reading, ADJUSTMENT, CURRENT_TEMPERATURE};

        #[derive(Debug, Default)]
        pub struct TemperatureMonitor;

        impl TemperatureMonitor {
            #[must_use]
            pub fn reading(&self) -> Reading {
                let initial = CURRENT_TEMPERATURE;
                let adjusted = initial + ADJUSTMENT;
                Reading { initial, adjusted }
            }
        }
    }
}

/// Remove Assignments to Parameters: shadowing a parameter hides intent.
pub mod remove_assignments_to_parameters {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct DiscountCalculator;

        impl DiscountCalculator {
            #[must_use]
            pub fn apply_discount(&self, mut price: f64) -> f64 {
                if price > 100.0 {
                    price *= 0.9;
                }
                price
            }
        }
    }

    pub mod after {
        #[derive(Debug, Default)]
        pub struct DiscountCalculator;

        impl DiscountCalculator {
            #[must_use]
            pub fn apply_discount(&self, price: f64) -> f64 {
                let mut result = price;
                if price > 100.0 {
                    result = price * 0.9;
                }
                result
            }
        }
    }
}

/// Replace Method with Method Object: compound interest gets its own type.
pub mod replace_method_with_method_object {
    pub mod before {
        #[derive(Debug, Default)]
        pub struct Account;

        impl Account {
            #[must_use]
            pub fn interest(
                &self,
                principal: f64,
                rate: f64,
                years: f64,
                compounding_frequency: f64,
            ) -> f64 {
                let amount = principal
                    * (1.0 + rate / compounding_frequency)
                        .powf(compounding_frequency * years);
                amount - principal
            }
        }
    }

    pub mod after {
        /// The former parameter list, promoted to fields.
        pub struct InterestCalculation {
            principal: f64,
            rate: f64,
            years: f64,
            compounding_frequency: f64,
        }

        impl InterestCalculation {
            #[must_use]
            pub fn new(principal: f64, rate: f64, years: f64, compounding_frequency: f64) -> Self {
                Self {
                    principal,
                    rate,
                    years,
                    compounding_frequency,
                }
            }

            #[must_use]
            pub fn calculate(&self) -> f64 {
                let amount = self.principal
                    * (1.0 + self.rate / self.compounding_frequency)
                        .powf(self.compounding_frequency * self.years);
                amount - self.principal
            }
        }

        #[derive(Debug, Default)]
        pub struct Account;

        impl Account {
            #[must_use]
            pub fn interest(
                &self,
                principal: f64,
                rate: f64,
                years: f64,
                compounding_frequency: f64,
            ) -> f64 {
                InterestCalculation::new(principal, rate, years, compounding_frequency).calculate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_method_totals_match() {
        let order = extract_method::Order {
            subtotal: 100.0,
            weight: 5.0,
        };
        let got_before = extract_method::before::OrderProcessor.process(&order);
        let got_after = extract_method::after::OrderProcessor.process(&order);
        assert_eq!(got_before, got_after);
        assert_eq!(got_before.unwrap(), 100.0 + 8.0 + 5.0);

        let heavy = extract_method::Order {
            subtotal: 100.0,
            weight: 12.0,
        };
        assert_eq!(
            extract_method::before::OrderProcessor.process(&heavy).unwrap(),
            extract_method::after::OrderProcessor.process(&heavy).unwrap()
        );

        let invalid = extract_method::Order {
            subtotal: 0.0,
            weight: 1.0,
        };
        assert_eq!(
            extract_method::before::OrderProcessor.process(&invalid),
            extract_method::after::OrderProcessor.process(&invalid)
        );
    }

    #[test]
    fn test_inline_method_full_name() {
        let verbose = inline_method::before::User {
            first_name: "John".into(),
            last_name: "Doe".into(),
        };
        let inlined = inline_method::after::User {
            first_name: "John".into(),
            last_name: "Doe".into(),
        };
        assert_eq!(verbose.full_name(), inlined.full_name());
        assert_eq!(inlined.full_name(), "John Doe");
    }

    #[test]
    fn test_inline_temp_prices_match() {
        // 20 * 60 = 1200, above the bulk threshold
        for (quantity, item_price) in [(20, 60.0), (5, 10.0)] {
            let with_temp = inline_temp::before::PriceCalculator {
                quantity,
                item_price,
            };
            let inlined = inline_temp::after::PriceCalculator {
                quantity,
                item_price,
            };
            assert_eq!(with_temp.price(), inlined.price());
        }
    }

    #[test]
    fn test_replace_temp_with_query_prices_match() {
        let with_temp = replace_temp_with_query::before::Order {
            quantity: 15,
            item_price: 50.0,
        };
        let queried = replace_temp_with_query::after::Order {
            quantity: 15,
            item_price: 50.0,
        };
        assert_eq!(with_temp.price(), queried.price());
        // 750 base, 250 over the 500 line, 5% of that discounted
        assert_eq!(queried.price(), 750.0 - 12.5);
    }

    #[test]
    fn test_explaining_variables_preserve_score() {
        let opaque = introduce_explaining_variable::before::PerformanceCalculator {
            goals: 10,
            assists: 5,
            minutes_played: 180,
        };
        let named = introduce_explaining_variable::after::PerformanceCalculator {
            goals: 10,
            assists: 5,
            minutes_played: 180,
        };
        assert_eq!(opaque.performance(), named.performance());
        assert_eq!(named.performance(), 20.0 + 7.5 + 0.3);
    }

    #[test]
    fn test_split_temp_readings_match() {
        let reused = split_temporary_variable::before::TemperatureMonitor.reading();
        let split = split_temporary_variable::after::TemperatureMonitor.reading();
        assert_eq!(reused, split);
        assert_eq!(split.initial, 25.0);
        assert_eq!(split.adjusted, 27.5);
    }

    #[test]
    fn test_parameter_assignment_removal_keeps_discount() {
        let mutating = remove_assignments_to_parameters::before::DiscountCalculator;
        let local = remove_assignments_to_parameters::after::DiscountCalculator;
        for price in [50.0, 100.0, 150.0] {
            assert_eq!(mutating.apply_discount(price), local.apply_discount(price));
        }
        assert_eq!(local.apply_discount(150.0), 135.0);
        assert_eq!(local.apply_discount(100.0), 100.0);
    }

    #[test]
    fn test_method_object_computes_same_interest() {
        let inline = replace_method_with_method_object::before::Account;
        let object = replace_method_with_method_object::after::Account;
        let (principal, rate, years, freq) = (1000.0, 0.05, 2.0, 12.0);
        assert_eq!(
            inline.interest(principal, rate, years, freq),
            object.interest(principal, rate, years, freq)
        );
        assert!(inline.interest(principal, rate, years, freq) > 0.0);
    }
}
