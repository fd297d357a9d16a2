//! Prelude module for jalali_date crate.
//!
//! Re-exports the derive macros shared by the date types.

pub use derive_more::Display;
