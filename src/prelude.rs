//! Prelude module for thru crate.
//!
//! Re-exports the derive macros from derive_more and the chrono traits
//! every engine module needs for component access.

#[allow(unused_imports)]
pub use chrono::{Datelike, Offset, TimeZone, Timelike};
#[allow(unused_imports)]
pub use derive_more::Display;
