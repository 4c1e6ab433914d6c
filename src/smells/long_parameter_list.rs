//! Long parameter list: an order built from twenty positional arguments.
//!
//! The before variant's `create_order` takes every customer field, every
//! address field, every product field and every billing knob as its own
//! parameter; call sites are unreadable and argument swaps compile fine.
//! Introduce Parameter Object folds them into [`after::Customer`],
//! [`after::Product`] and [`after::OrderDetails`], and the totals math
//! moves to a dedicated calculator.
//!
//! Totals in both variants: subtotal = price * quantity, discount is a
//! percentage of the subtotal, tax is a percentage of the discounted
//! amount, shipping is 9.99 standard or 19.99 express.

use serde_json::Value;

/// Everything positional.
pub mod before {
    use serde_json::{json, Value};

    #[derive(Debug, Default)]
    pub struct OrderService;

    impl OrderService {
        /// Twenty-one parameters. The four address strings appear twice.
        #[allow(clippy::too_many_arguments)]
        #[must_use]
        pub fn create_order(
            &self,
            customer_id: u64,
            customer_name: &str,
            customer_email: &str,
            customer_phone: &str,
            street: &str,
            city: &str,
            state: &str,
            zip_code: &str,
            product_id: u64,
            product_name: &str,
            product_price: f64,
            quantity: f64,
            tax_rate: f64,
            discount_percent: f64,
            shipping_method: &str,
            payment_method: &str,
            billing_street: &str,
            billing_city: &str,
            billing_state: &str,
            billing_zip: &str,
            notes: &str,
        ) -> Value {
            let subtotal = product_price * quantity;
            let discount_amount = subtotal * (discount_percent / 100.0);
            let taxable_amount = subtotal - discount_amount;
            let tax_amount = taxable_amount * (tax_rate / 100.0);
            let shipping_cost = if shipping_method == "express" { 19.99 } else { 9.99 };
            let total = taxable_amount + tax_amount + shipping_cost;

            json!({
                "customer_id": customer_id,
                "customer_name": customer_name,
                "customer_email": customer_email,
                "customer_phone": customer_phone,
                "customer_address": street,
                "customer_city": city,
                "customer_state": state,
                "customer_zip": zip_code,
                "product_id": product_id,
                "product_name": product_name,
                "product_price": product_price,
                "quantity": quantity,
                "subtotal": subtotal,
                "discount_percent": discount_percent,
                "discount_amount": discount_amount,
                "tax_rate": tax_rate,
                "tax_amount": tax_amount,
                "shipping_method": shipping_method,
                "shipping_cost": shipping_cost,
                "payment_method": payment_method,
                "billing_address": billing_street,
                "billing_city": billing_city,
                "billing_state": billing_state,
                "billing_zip": billing_zip,
                "total": total,
                "notes": notes,
            })
        }
    }
}

/// Parameter objects carry the clumps; a calculator owns the math.
pub mod after {
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Address {
        pub street: String,
        pub city: String,
        pub state: String,
        pub zip_code: String,
    }

    impl Address {
        #[must_use]
        pub fn new(street: &str, city: &str, state: &str, zip_code: &str) -> Self {
            Self {
                street: street.into(),
                city: city.into(),
                state: state.into(),
                zip_code: zip_code.into(),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Customer {
        pub id: u64,
        pub name: String,
        pub email: String,
        pub phone: String,
        pub shipping_address: Address,
        pub billing_address: Address,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Product {
        pub id: u64,
        pub name: String,
        pub price: f64,
    }

    /// The per-order knobs that are not customer or product identity.
    #[derive(Debug, Clone, PartialEq)]
    pub struct OrderDetails {
        pub product: Product,
        pub quantity: f64,
        pub tax_rate: f64,
        pub discount_percent: f64,
        pub shipping_method: String,
        pub payment_method: String,
        pub notes: String,
    }

    /// Computed money amounts for one order.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Totals {
        pub subtotal: f64,
        pub discount_amount: f64,
        pub tax_amount: f64,
        pub shipping_cost: f64,
        pub total: f64,
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct OrderCalculator;

    impl OrderCalculator {
        #[must_use]
        pub fn totals(&self, details: &OrderDetails) -> Totals {
            let subtotal = details.product.price * details.quantity;
            let discount_amount = subtotal * (details.discount_percent / 100.0);
            let taxable_amount = subtotal - discount_amount;
            let tax_amount = taxable_amount * (details.tax_rate / 100.0);
            let shipping_cost = if details.shipping_method == "express" {
                19.99
            } else {
                9.99
            };
            Totals {
                subtotal,
                discount_amount,
                tax_amount,
                shipping_cost,
                total: taxable_amount + tax_amount + shipping_cost,
            }
        }
    }

    #[derive(Debug, Default)]
    pub struct OrderService {
        calculator: OrderCalculator,
    }

    impl OrderService {
        #[must_use]
        pub fn create_order(&self, customer: &Customer, details: &OrderDetails) -> Value {
            let totals = self.calculator.totals(details);

            json!({
                "customer_id": customer.id,
                "customer_name": customer.name,
                "customer_email": customer.email,
                "customer_phone": customer.phone,
                "customer_address": customer.shipping_address.street,
                "customer_city": customer.shipping_address.city,
                "customer_state": customer.shipping_address.state,
                "customer_zip": customer.shipping_address.zip_code,
                "product_id": details.product.id,
                "product_name": details.product.name,
                "product_price": details.product.price,
                "quantity": details.quantity,
                "subtotal": totals.subtotal,
                "discount_percent": details.discount_percent,
                "discount_amount": totals.discount_amount,
                "tax_rate": details.tax_rate,
                "tax_amount": totals.tax_amount,
                "shipping_method": details.shipping_method,
                "shipping_cost": totals.shipping_cost,
                "payment_method": details.payment_method,
                "billing_address": customer.billing_address.street,
                "billing_city": customer.billing_address.city,
                "billing_state": customer.billing_address.state,
                "billing_zip": customer.billing_address.zip_code,
                "total": totals.total,
                "notes": details.notes,
            })
        }
    }
}

/// Build the same order both ways for side-by-side comparison.
#[must_use]
pub fn sample_order_in_both() -> (Value, Value) {
    let positional = before::OrderService.create_order(
        1,
        "John Doe",
        "john@example.com",
        "555-1234",
        "123 Main St",
        "Anytown",
        "CA",
        "12345",
        101,
        "Widget",
        29.99,
        2.0,
        8.25,
        10.0,
        "standard",
        "credit_card",
        "123 Main St",
        "Anytown",
        "CA",
        "12345",
        "Handle with care",
    );

    let address = after::Address::new("123 Main St", "Anytown", "CA", "12345");
    let customer = after::Customer {
        id: 1,
        name: "John Doe".into(),
        email: "john@example.com".into(),
        phone: "555-1234".into(),
        shipping_address: address.clone(),
        billing_address: address,
    };
    let details = after::OrderDetails {
        product: after::Product {
            id: 101,
            name: "Widget".into(),
            price: 29.99,
        },
        quantity: 2.0,
        tax_rate: 8.25,
        discount_percent: 10.0,
        shipping_method: "standard".into(),
        payment_method: "credit_card".into(),
        notes: "Handle with care".into(),
    };
    let object = after::OrderService::default().create_order(&customer, &details);

    (positional, object)
}
