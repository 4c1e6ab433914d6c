//! Duplication: the same arithmetic copied into three billing types.
//!
//! The order processor, the invoice generator and the quote generator each
//! carry their own copy of the state tax lookup and the shipping formula.
//! A rate change means three edits. The cure is Extract Class: one
//! [`after::TaxTable`] and one [`after::ShippingRates`], shared by all three.
//!
//! Rates: CA 8.25%, NY 4%, TX 6.25%, anything else 0%. Shipping is a flat
//! base of 5.0 plus 0.5 per weight unit plus 0.1 per distance unit.

/// Three types, three private copies of the same arithmetic.
pub mod before {
    /// Computes order totals, with its own tax and shipping logic.
    #[derive(Debug, Default)]
    pub struct OrderProcessor;

    impl OrderProcessor {
        pub fn calculate_tax(&self, price: f64, state: &str) -> f64 {
            let rate = match state {
                "CA" => 0.0825,
                "NY" => 0.04,
                "TX" => 0.0625,
                _ => 0.0,
            };
            price * rate
        }

        pub fn calculate_shipping(&self, weight: f64, distance: f64) -> f64 {
            let base_rate = 5.0;
            let weight_rate = weight * 0.5;
            let distance_rate = distance * 0.1;
            base_rate + weight_rate + distance_rate
        }
    }

    /// Renders invoices, with a second copy of the same logic.
    #[derive(Debug, Default)]
    pub struct InvoiceGenerator;

    impl InvoiceGenerator {
        pub fn calculate_tax(&self, price: f64, state: &str) -> f64 {
            let rate = match state {
                "CA" => 0.0825,
                "NY" => 0.04,
                "TX" => 0.0625,
                _ => 0.0,
            };
            price * rate
        }

        pub fn calculate_shipping(&self, weight: f64, distance: f64) -> f64 {
            let base_rate = 5.0;
            let weight_rate = weight * 0.5;
            let distance_rate = distance * 0.1;
            base_rate + weight_rate + distance_rate
        }
    }

    /// Produces quotes, with a third copy.
    #[derive(Debug, Default)]
    pub struct QuoteGenerator;

    impl QuoteGenerator {
        pub fn calculate_tax(&self, price: f64, state: &str) -> f64 {
            let rate = match state {
                "CA" => 0.0825,
                "NY" => 0.04,
                "TX" => 0.0625,
                _ => 0.0,
            };
            price * rate
        }

        pub fn calculate_shipping(&self, weight: f64, distance: f64) -> f64 {
            let base_rate = 5.0;
            let weight_rate = weight * 0.5;
            let distance_rate = distance * 0.1;
            base_rate + weight_rate + distance_rate
        }
    }
}

/// Extract Class: one tax table, one shipping schedule, three thin clients.
pub mod after {
    use once_cell::sync::Lazy;
    use rustc_hash::FxHashMap;

    static TAX_RATES: Lazy<FxHashMap<&'static str, f64>> = Lazy::new(|| {
        let mut rates = FxHashMap::default();
        rates.insert("CA", 0.0825);
        rates.insert("NY", 0.04);
        rates.insert("TX", 0.0625);
        rates
    });

    /// The single home of state tax rates.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct TaxTable;

    impl TaxTable {
        /// Tax on `price` for `state`; unknown states are untaxed.
        #[must_use]
        pub fn tax_for(&self, price: f64, state: &str) -> f64 {
            price * TAX_RATES.get(state).copied().unwrap_or(0.0)
        }
    }

    /// The single home of the shipping cost schedule.
    #[derive(Debug, Clone, Copy)]
    pub struct ShippingRates {
        base: f64,
        per_weight_unit: f64,
        per_distance_unit: f64,
    }

    impl Default for ShippingRates {
        fn default() -> Self {
            Self {
                base: 5.0,
                per_weight_unit: 0.5,
                per_distance_unit: 0.1,
            }
        }
    }

    impl ShippingRates {
        #[must_use]
        pub fn cost_for(&self, weight: f64, distance: f64) -> f64 {
            self.base + weight * self.per_weight_unit + distance * self.per_distance_unit
        }
    }

    /// Order totals, delegating to the shared calculators.
    #[derive(Debug, Default)]
    pub struct OrderProcessor {
        taxes: TaxTable,
        shipping: ShippingRates,
    }

    impl OrderProcessor {
        pub fn calculate_tax(&self, price: f64, state: &str) -> f64 {
            self.taxes.tax_for(price, state)
        }

        pub fn calculate_shipping(&self, weight: f64, distance: f64) -> f64 {
            self.shipping.cost_for(weight, distance)
        }
    }

    /// Invoices, delegating to the shared calculators.
    #[derive(Debug, Default)]
    pub struct InvoiceGenerator {
        taxes: TaxTable,
        shipping: ShippingRates,
    }

    impl InvoiceGenerator {
        pub fn calculate_tax(&self, price: f64, state: &str) -> f64 {
            self.taxes.tax_for(price, state)
        }

        pub fn calculate_shipping(&self, weight: f64, distance: f64) -> f64 {
            self.shipping.cost_for(weight, distance)
        }
    }

    /// Quotes, delegating to the shared calculators.
    #[derive(Debug, Default)]
    pub struct QuoteGenerator {
        taxes: TaxTable,
        shipping: ShippingRates,
    }

    impl QuoteGenerator {
        pub fn calculate_tax(&self, price: f64, state: &str) -> f64 {
            self.taxes.tax_for(price, state)
        }

        pub fn calculate_shipping(&self, weight: f64, distance: f64) -> f64 {
            self.shipping.cost_for(weight, distance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_is_identical_across_variants() {
        let smelly = before::OrderProcessor;
        let clean = after::OrderProcessor::default();

        assert_eq!(smelly.calculate_tax(1000.0, "CA"), 82.5);
        assert_eq!(clean.calculate_tax(1000.0, "CA"), 82.5);

        for state in ["CA", "NY", "TX", "WA"] {
            assert_eq!(
                smelly.calculate_tax(250.0, state),
                clean.calculate_tax(250.0, state),
                "tax diverges for {state}"
            );
        }
    }

    #[test]
    fn test_shipping_is_identical_across_variants() {
        let smelly = before::InvoiceGenerator;
        let clean = after::InvoiceGenerator::default();

        // 5 + 20 * 0.5 + 100 * 0.1
        assert_eq!(smelly.calculate_shipping(20.0, 100.0), 25.0);
        assert_eq!(clean.calculate_shipping(20.0, 100.0), 25.0);
    }

    #[test]
    fn test_all_three_clients_agree_after_extraction() {
        let orders = after::OrderProcessor::default();
        let invoices = after::InvoiceGenerator::default();
        let quotes = after::QuoteGenerator::default();

        assert_eq!(
            orders.calculate_tax(100.0, "TX"),
            invoices.calculate_tax(100.0, "TX")
        );
        assert_eq!(
            invoices.calculate_shipping(10.0, 50.0),
            quotes.calculate_shipping(10.0, 50.0)
        );
    }

    #[test]
    fn test_unknown_state_is_untaxed() {
        let smelly = before::QuoteGenerator;
        let clean = after::QuoteGenerator::default();
        assert_eq!(smelly.calculate_tax(999.0, "ZZ"), 0.0);
        assert_eq!(clean.calculate_tax(999.0, "ZZ"), 0.0);
    }
}
