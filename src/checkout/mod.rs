//! Checkout (finish) suggestions.
//!
//! - `dart`: parsing and labeling of single-dart tokens (`T20`, `D16`, `Bull`)
//! - `table`: the curated score -> finishes table, loaded once
//! - `generator`: exhaustive enumeration of legal finishes
//! - `advisor`: filters suggestions by the darts left in the turn

pub mod advisor;
pub mod dart;
pub mod generator;
pub mod table;

pub use advisor::{filter_for_darts_left, CheckoutAdvisor};
pub use dart::Dart;
pub use table::{Checkout, CheckoutTable, MAX_CHECKOUT, MIN_CHECKOUT, NO_FINISH};
