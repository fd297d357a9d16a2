/// Minimum valid Gregorian year (inclusive)
pub const MIN_GREGORIAN_YEAR: u16 = 1;
/// Maximum valid Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Minimum valid Jalali year (inclusive)
pub const MIN_JALALI_YEAR: u16 = 1;
/// Maximum valid Jalali year (inclusive).
/// Esfand 9377 ends on 9999-03-20, the last whole Jalali year before `MAX_GREGORIAN_YEAR` runs out.
pub const MAX_JALALI_YEAR: u16 = 9377;

/// Maximum valid month, shared by both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_jalali_leap_year check)
];

/// Persian month names, 1-indexed like the day tables
pub const JALALI_MONTH_NAMES: [&str; 13] = [
    "",
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Year the Gregorian day count is anchored to
pub(crate) const GREGORIAN_BASE_YEAR: i32 = 1600;
/// Jalali year that starts in `GREGORIAN_BASE_YEAR`
pub(crate) const JALALI_BASE_YEAR: i32 = 979;
/// Days from 1600-01-01 to Nowruz 979 (1600-03-21)
pub(crate) const EPOCH_OFFSET: i32 = 79;

/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;
/// Days in the first century of a 400-year cycle (starts with a leap year)
pub(crate) const DAYS_PER_LEAP_CENTURY: i32 = 36_525;
/// Days in the remaining centuries of a 400-year cycle
pub(crate) const DAYS_PER_CENTURY: i32 = 36_524;
/// Days in a 4-year cycle with one leap day
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i32 = 365;
/// Days in a leap year
pub(crate) const DAYS_PER_LEAP_YEAR: i32 = 366;

/// Length of the Jalali leap cycle in years
pub(crate) const JALALI_CYCLE_YEARS: i32 = 33;
/// Leap days in one Jalali cycle
pub(crate) const JALALI_CYCLE_LEAP_DAYS: i32 = 8;
/// Days in one 33-year Jalali cycle
pub(crate) const DAYS_PER_JALALI_CYCLE: i32 = 12_053;

/// Gregorian output separator (ISO 8601)
pub const GREGORIAN_SEPARATOR: char = '-';
/// Jalali output separator
pub const JALALI_SEPARATOR: char = '/';

/// Latin digits, indexed by value
pub const LATIN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
/// Persian (Extended Arabic-Indic) digits, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
/// Arabic-Indic digits, indexed by value. Accepted on input only.
pub const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
