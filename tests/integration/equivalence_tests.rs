//! Cross-module equivalence spot checks.
//!
//! The in-module tests already hold each before/after pair to identical
//! behavior; these pin a handful of concrete values so a regression in the
//! shared arithmetic shows up as a changed number, not just a broken pair.

use smellbook::refactorings::{big_refactorings, conditionals};
use smellbook::smells::{data_clumps, duplication, long_method, long_parameter_list};

#[test]
fn test_california_tax_on_a_thousand_dollars() {
    let legacy = duplication::before::OrderProcessor;
    let shared = duplication::after::OrderProcessor::default();
    assert_eq!(legacy.calculate_tax(1000.0, "CA"), 82.5);
    assert_eq!(shared.calculate_tax(1000.0, "CA"), 82.5);
}

#[test]
fn test_shipping_twenty_pounds_a_hundred_miles() {
    let legacy = duplication::before::InvoiceGenerator;
    let shared = duplication::after::InvoiceGenerator::default();
    assert_eq!(legacy.calculate_shipping(20.0, 100.0), 25.0);
    assert_eq!(shared.calculate_shipping(20.0, 100.0), 25.0);
}

#[test]
fn test_short_zip_rejected_by_both_address_variants() {
    let (loose, object) = data_clumps::validate_in_both("123 Main St", "Anytown", "CA", "1234");
    assert!(!loose);
    assert!(!object);
}

#[test]
fn test_registration_outcomes_agree() {
    let data = long_method::Registration {
        email: "pat@example.com".into(),
        password: "password123".into(),
        first_name: "Pat".into(),
        last_name: "Lee".into(),
        phone: "555-0000".into(),
    };
    let (smelly, clean) = long_method::register_in_both(&data);
    assert_eq!(smelly, clean);
    assert!(smelly.is_ok());

    let bad = long_method::Registration {
        email: "not-an-email".into(),
        ..data
    };
    let (smelly, clean) = long_method::register_in_both(&bad);
    assert_eq!(smelly, clean);
    assert!(smelly.is_err());
}

#[test]
fn test_discount_eligibility_at_thirty_with_good_record() {
    let sprawling = conditionals::consolidate_conditional_expression::before::InsuranceCalculator;
    let consolidated =
        conditionals::consolidate_conditional_expression::after::InsuranceCalculator;
    assert!(sprawling.is_eligible_for_discount(30, false, true));
    assert!(consolidated.is_eligible_for_discount(30, false, true));
}

#[test]
fn test_order_records_identical_across_signatures() {
    let (positional, structured) = long_parameter_list::sample_order_in_both();
    assert_eq!(positional, structured);
}

#[test]
fn test_procedural_and_object_banks_agree() {
    let (accounts, bank) = big_refactorings::seeded_banks();
    let table = big_refactorings::convert_procedural_to_objects::before::balance(
        &accounts, "ACC001",
    );
    let object = bank.account("ACC001").map(|a| a.balance());
    assert_eq!(object, Some(table));
}
