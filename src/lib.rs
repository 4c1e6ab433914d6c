//! smellbook: a field catalog of object-oriented code smells and the
//! refactorings that cure them.
//!
//! Every entry in the catalog is a pair of runnable modules, `before` and
//! `after`, that implement the same small scenario. The `before` side
//! exhibits the smell; the `after` side shows the refactored shape. The
//! pairs are behaviorally equivalent and the tests in each module hold both
//! sides to the same outputs and the same errors, which is the one property
//! a refactoring must preserve.
//!
//! - [`smells`] holds the ten smell demonstrations.
//! - [`refactorings`] holds the refactoring pairs, one module per group.
//! - [`catalog`] is the index over both collections, used by the CLI.
//!
//! # Example
//!
//! ```
//! use smellbook::catalog::{smells, SmellCategory};
//!
//! let bloaters: Vec<_> = smells()
//!     .iter()
//!     .filter(|s| s.category() == SmellCategory::Bloater)
//!     .collect();
//! assert_eq!(bloaters.len(), 4);
//! ```

pub mod catalog;
pub mod error;
pub mod refactorings;
pub mod smells;

pub use catalog::{Refactoring, RefactoringGroup, Smell, SmellCategory};
pub use error::{Result, SmellbookError};
