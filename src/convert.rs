//! Integer arithmetic between the Gregorian and Jalali day numbering systems.
//!
//! Both calendars are counted in days from a shared anchor: Gregorian
//! 1600-01-01, which falls 79 days before Nowruz of Jalali 979. Gregorian
//! dates are decomposed with the 400/100/4-year cycle, Jalali dates with the
//! 33-year cycle (8 leap days per cycle). All divisions are floor divisions so
//! dates before the anchor decompose the same way as dates after it.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_4_YEARS, DAYS_PER_400_YEARS, DAYS_PER_CENTURY, DAYS_PER_JALALI_CYCLE,
    DAYS_PER_LEAP_CENTURY, DAYS_PER_LEAP_YEAR, DAYS_PER_YEAR, EPOCH_OFFSET, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_BASE_YEAR, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    JALALI_BASE_YEAR, JALALI_CYCLE_LEAP_DAYS, JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_JALALI_YEAR, MAX_MONTH, MIN_JALALI_YEAR,
};
use crate::types::{GregorianDate, JalaliDate, is_gregorian_leap_year};
use crate::ParseError;

/// Days from 1600-01-01 to the given Gregorian date.
const fn gregorian_day_number(gy: i32, gm: i32, gd: i32) -> i32 {
    let y = gy - GREGORIAN_BASE_YEAR;
    let mut days = DAYS_PER_YEAR * y + (y + 3).div_euclid(LEAP_YEAR_CYCLE)
        - (y + 99).div_euclid(CENTURY_CYCLE)
        + (y + 399).div_euclid(GREGORIAN_CYCLE);

    let mut m = 1;
    while m < gm && m < MAX_MONTH as i32 {
        days += GREGORIAN_DAYS_IN_MONTH[m as usize] as i32;
        m += 1;
    }
    if gm > FEBRUARY as i32 && is_gregorian_leap_year(gy) {
        days += 1;
    }
    days + gd - 1
}

/// Days from Nowruz 979 to the given Jalali date.
const fn jalali_day_number(jy: i32, jm: i32, jd: i32) -> i32 {
    let y = jy - JALALI_BASE_YEAR;
    let mut days = DAYS_PER_YEAR * y
        + y.div_euclid(JALALI_CYCLE_YEARS) * JALALI_CYCLE_LEAP_DAYS
        + (y.rem_euclid(JALALI_CYCLE_YEARS) + 3) / LEAP_YEAR_CYCLE;

    let mut m = 1;
    while m < jm && m < MAX_MONTH as i32 {
        days += JALALI_DAYS_IN_MONTH[m as usize] as i32;
        m += 1;
    }
    days + jd - 1
}

/// Number of days in Jalali year `jy` (365 or 366).
pub(crate) const fn jalali_year_length(jy: i32) -> i32 {
    jalali_day_number(jy + 1, 1, 1) - jalali_day_number(jy, 1, 1)
}

/// Converts a Gregorian `(year, month, day)` to Jalali `(year, month, day)`.
///
/// Defined only for valid Gregorian dates; months and days are 1-based on
/// both sides. Dates before 622-03-21 yield a Jalali year below 1.
pub const fn gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> (i32, i32, i32) {
    let mut j = gregorian_day_number(gy, gm, gd) - EPOCH_OFFSET;

    let cycles = j.div_euclid(DAYS_PER_JALALI_CYCLE);
    j = j.rem_euclid(DAYS_PER_JALALI_CYCLE);

    let mut jy = JALALI_BASE_YEAR
        + JALALI_CYCLE_YEARS * cycles
        + LEAP_YEAR_CYCLE * (j / DAYS_PER_4_YEARS);
    j %= DAYS_PER_4_YEARS;

    // The first year of each 4-year run carries the leap day
    if j >= DAYS_PER_LEAP_YEAR {
        jy += (j - 1) / DAYS_PER_YEAR;
        j = (j - 1) % DAYS_PER_YEAR;
    }

    let mut jm = 1;
    while jm < MAX_MONTH as i32 && j >= JALALI_DAYS_IN_MONTH[jm as usize] as i32 {
        j -= JALALI_DAYS_IN_MONTH[jm as usize] as i32;
        jm += 1;
    }

    (jy, jm, j + 1)
}

/// Converts a Jalali `(year, month, day)` to Gregorian `(year, month, day)`.
///
/// Defined only for valid Jalali dates; months and days are 1-based on both
/// sides.
pub const fn jalali_to_gregorian(jy: i32, jm: i32, jd: i32) -> (i32, i32, i32) {
    let mut g = jalali_day_number(jy, jm, jd) + EPOCH_OFFSET;

    let mut gy = GREGORIAN_BASE_YEAR + GREGORIAN_CYCLE * g.div_euclid(DAYS_PER_400_YEARS);
    g = g.rem_euclid(DAYS_PER_400_YEARS);

    // Only the first century of a 400-year cycle opens with a leap year
    let mut leap = true;
    if g >= DAYS_PER_LEAP_CENTURY {
        g -= 1;
        gy += CENTURY_CYCLE * (g / DAYS_PER_CENTURY);
        g %= DAYS_PER_CENTURY;
        if g >= DAYS_PER_YEAR {
            g += 1;
        } else {
            leap = false;
        }
    }

    gy += LEAP_YEAR_CYCLE * (g / DAYS_PER_4_YEARS);
    g %= DAYS_PER_4_YEARS;

    if g >= DAYS_PER_LEAP_YEAR {
        leap = false;
        g -= 1;
        gy += g / DAYS_PER_YEAR;
        g %= DAYS_PER_YEAR;
    }

    let mut gm = 1;
    while gm < MAX_MONTH as i32 && g >= gregorian_month_length(gm, leap) {
        g -= gregorian_month_length(gm, leap);
        gm += 1;
    }

    (gy, gm, g + 1)
}

const fn gregorian_month_length(month: i32, leap: bool) -> i32 {
    if leap && month == FEBRUARY as i32 {
        FEBRUARY_DAYS_LEAP as i32
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize] as i32
    }
}

impl GregorianDate {
    /// Converts to the Jalali calendar.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` for dates before Jalali 1/01/01
    /// (622-03-21) or after Jalali `MAX_JALALI_YEAR`.
    pub fn to_jalali(self) -> Result<JalaliDate, ParseError> {
        JalaliDate::try_from(self)
    }
}

impl JalaliDate {
    /// Converts to the Gregorian calendar. Every valid Jalali date has a
    /// Gregorian counterpart.
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from(self)
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = ParseError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        let (jy, jm, jd) = gregorian_to_jalali(
            i32::from(date.year()),
            i32::from(date.month()),
            i32::from(date.day()),
        );
        if jy < i32::from(MIN_JALALI_YEAR) || jy > i32::from(MAX_JALALI_YEAR) {
            return Err(ParseError::OutOfRange(format!(
                "{date} has no Jalali date in years {MIN_JALALI_YEAR}-{MAX_JALALI_YEAR}"
            )));
        }
        Self::new(jy as u16, jm as u8, jd as u8)
    }
}

impl From<JalaliDate> for GregorianDate {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(date: JalaliDate) -> Self {
        let (gy, gm, gd) = jalali_to_gregorian(
            i32::from(date.year()),
            i32::from(date.month()),
            i32::from(date.day()),
        );
        Self::from_parts(gy as u16, gm as u8, gd as u8)
    }
}
