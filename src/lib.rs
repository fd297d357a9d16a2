//! Conversion between the Gregorian and Jalali (Persian solar Hijri) calendars.
//!
//! The crate has two layers:
//!
//! - Exact integer converters ([`gregorian_to_jalali`], [`jalali_to_gregorian`])
//!   and the validated value types [`GregorianDate`] and [`JalaliDate`] built
//!   on them.
//! - Display helpers ([`to_jalali`], [`to_gregorian`], [`normalize_gregorian`],
//!   ...) that accept raw user or database strings and never fail: anything
//!   they cannot read is handed back unchanged.
//!
//! ```
//! use jalali_date::{GregorianDate, Locale, to_gregorian, to_jalali};
//!
//! let nowruz = GregorianDate::new(2024, 3, 20)?.to_jalali()?;
//! assert_eq!(nowruz.to_string(), "1403/01/01");
//!
//! let fa = Locale::Persian;
//! assert_eq!(to_jalali(Some("2024-03-20 10:15:00"), &fa).as_deref(), Some("1403/01/01"));
//! assert_eq!(to_gregorian(Some("۱۴۰۳/۰۱/۰۱"), &fa).as_deref(), Some("2024-03-20"));
//! assert_eq!(to_gregorian(Some("not-a-date"), &fa).as_deref(), Some("not-a-date"));
//! # Ok::<(), jalali_date::ParseError>(())
//! ```

mod consts;
mod convert;
mod digits;
mod display;
mod locale;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{gregorian_to_jalali, jalali_to_gregorian};
pub use digits::{to_latin_digits, to_persian_digits};
pub use display::{normalize_gregorian, to_gregorian, to_jalali, to_jalali_date, to_jalali_display};
pub use locale::{Locale, PERSIAN_TAG};
pub use types::{
    GregorianDate, JalaliDate, gregorian_days_in_month, is_gregorian_leap_year,
    is_jalali_leap_year, jalali_days_in_month,
};

/// Error type for parsing and converting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0}")]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Date out of supported range: {0}")]
    OutOfRange(String),
    #[error("Empty date string")]
    EmptyInput,
}
