//! Integration test entry point.
//!
//! Individual test modules live in tests/integration/.
//!
//! Run all integration tests:
//!   cargo test --test integration
//!
//! Run one module:
//!   cargo test --test integration catalog

#[path = "integration/catalog_tests.rs"]
mod catalog_tests;

#[path = "integration/equivalence_tests.rs"]
mod equivalence_tests;

#[path = "integration/cli_tests.rs"]
mod cli_tests;
