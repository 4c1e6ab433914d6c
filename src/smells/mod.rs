//! The code smell collection.
//!
//! Each module pairs a `before` (smelly) and an `after` (refactored)
//! rendition of one small scenario. The pairs are behaviorally equivalent:
//! given the same inputs they produce the same outputs and the same errors,
//! which the tests in each module verify. Nothing here shares state with
//! anything else; every module stands alone.
//!
//! | Module | Smell | Cure demonstrated |
//! |--------|-------|-------------------|
//! | [`duplication`] | copied tax/shipping arithmetic | Extract Class |
//! | [`long_method`] | nine-job registration function | Extract Method + seams |
//! | [`large_class`] | god service | Extract Class |
//! | [`feature_envy`] | helpers envious of `Rectangle` | Move Method |
//! | [`data_clumps`] | loose address/name parameters | value objects |
//! | [`long_parameter_list`] | twenty-one positional arguments | parameter objects |
//! | [`divergent_change`] | one type, three reasons to change | one type per reason |
//! | [`data_class`] | anemic record | encapsulated behavior |
//! | [`refused_bequest`] | per-renderer copies of color state | composed style + shared trait |
//! | [`incomplete_library`] | call sites patching a minimal API | local extension |

pub mod data_class;
pub mod data_clumps;
pub mod divergent_change;
pub mod duplication;
pub mod feature_envy;
pub mod incomplete_library;
pub mod large_class;
pub mod long_method;
pub mod long_parameter_list;
pub mod refused_bequest;
