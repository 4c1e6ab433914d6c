//! The refactoring collection: one module per group, one nested module per
//! refactoring, each holding a `before` and an `after` rendition of the
//! same behavior.
//!
//! | Module | Group |
//! |--------|-------|
//! | [`composing_methods`] | Extract/inline methods, temps and parameters |
//! | [`moving_features`] | Moving methods, fields and classes |
//! | [`organizing_data`] | Encapsulation and value/reference structure |
//! | [`conditionals`] | Simplifying conditional logic |
//! | [`method_calls`] | Making signatures honest |
//! | [`generalization`] | Hierarchies and shared behavior |
//! | [`big_refactorings`] | Whole-design transformations |
//!
//! The `before` code in these modules is deliberately bad. It stays
//! compilable and correct so the paired tests can hold both variants to
//! the same observable behavior, which is the property a refactoring must
//! preserve.

pub mod big_refactorings;
pub mod composing_methods;
pub mod conditionals;
pub mod generalization;
pub mod method_calls;
pub mod moving_features;
pub mod organizing_data;
