use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_LEAP_YEAR, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_SEPARATOR, JALALI_DAYS_IN_MONTH,
    JALALI_MONTH_NAMES, JALALI_SEPARATOR, LEAP_YEAR_CYCLE, MAX_GREGORIAN_YEAR, MAX_JALALI_YEAR,
    MAX_MONTH, MIN_DAY, MIN_GREGORIAN_YEAR, MIN_JALALI_YEAR,
};
use crate::convert::jalali_year_length;
use crate::digits::to_latin_digits;
use crate::prelude::*;
use crate::ParseError;
use std::str::FromStr;

/// A valid date in the proleptic Gregorian calendar, years `1..=MAX_GREGORIAN_YEAR`.
/// Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating every component.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        validate_month(month)?;
        if day < MIN_DAY || day > gregorian_days_in_month(i32::from(year), month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(self) -> bool {
        is_gregorian_leap_year(self.year as i32)
    }
}

/// A valid date in the Jalali (solar Hijri) calendar, years `1..=MAX_JALALI_YEAR`.
/// Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, month, day)]
pub struct JalaliDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl JalaliDate {
    /// Creates a new Jalali date, validating every component against the
    /// Jalali month table and leap rule.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        validate_month(month)?;
        if day < MIN_DAY || day > jalali_days_in_month(i32::from(year), month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(self) -> bool {
        is_jalali_leap_year(self.year as i32)
    }

    /// Persian name of the month, e.g. `فروردین` for month 1
    pub const fn month_name(self) -> &'static str {
        JALALI_MONTH_NAMES[self.month as usize]
    }
}

fn validate_month(month: u8) -> Result<(), ParseError> {
    if month == 0 || month > MAX_MONTH {
        return Err(ParseError::InvalidMonth(month));
    }
    Ok(())
}

/// Splits `YYYY-MM-DD` or `YYYY/MM/DD` (either digit set) into raw components.
/// Mixing both separators in one string is rejected.
fn parse_components(s: &str) -> Result<(u16, u8, u8), ParseError> {
    let latin = to_latin_digits(s.trim());
    if latin.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let has_hyphen = latin.contains(GREGORIAN_SEPARATOR);
    let has_slash = latin.contains(JALALI_SEPARATOR);
    let separator = match (has_hyphen, has_slash) {
        (true, false) => GREGORIAN_SEPARATOR,
        (false, true) => JALALI_SEPARATOR,
        (true, true) => {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({GREGORIAN_SEPARATOR} and {JALALI_SEPARATOR})"
            )));
        }
        (false, false) => return Err(ParseError::InvalidFormat(latin)),
    };

    let parts: Vec<&str> = latin.split(separator).map(str::trim).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)),
        _ => Err(ParseError::InvalidFormat(format!(
            "Expected 2 {separator} separators, found {}",
            parts.len() - 1
        ))),
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_components(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_components(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// A Jalali year is leap when 366 days separate its Nowruz from the next one,
/// as counted by the conversion arithmetic.
pub const fn is_jalali_leap_year(year: i32) -> bool {
    jalali_year_length(year) == DAYS_PER_LEAP_YEAR
}

pub const fn jalali_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}
