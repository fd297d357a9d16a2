//! Fail-soft date rendering for display paths.
//!
//! Every function here is total: input that cannot be read as a date comes
//! back exactly as it was given, and `None` or blank input yields `None`. The
//! conversion itself runs as a plain `Result` pipeline; the decision to fall
//! back to the original text is made once, in [`fail_soft`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::digits::{to_latin_digits, to_persian_digits};
use crate::{GREGORIAN_SEPARATOR, GregorianDate, JALALI_SEPARATOR, JalaliDate, Locale, ParseError};

/// `YYYY/MM/DD` with Latin digits; month and day may drop the leading zero
static JALALI_SHAPE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})$"));

/// Renders a Gregorian date string as Jalali `YYYY/MM/DD`.
///
/// Non-Persian locales get `input` back untouched. The input may use either
/// digit set, `-` or `/` separators, and may carry a trailing time.
pub fn to_jalali(input: Option<&str>, locale: &Locale) -> Option<String> {
    if !locale.displays_jalali() {
        return input.map(str::to_owned);
    }
    let raw = non_blank(input)?;
    Some(fail_soft("to_jalali", raw, gregorian_to_jalali_text(raw)))
}

/// Like [`to_jalali`], with the converted date written in Persian digits.
/// Unconvertible input is still returned as given.
pub fn to_jalali_display(input: Option<&str>, locale: &Locale) -> Option<String> {
    if !locale.displays_jalali() {
        return input.map(str::to_owned);
    }
    let raw = non_blank(input)?;
    let result = gregorian_to_jalali_text(raw).map(|text| to_persian_digits(&text));
    Some(fail_soft("to_jalali_display", raw, result))
}

/// Renders an already-parsed Gregorian date for `locale`.
pub fn to_jalali_date(date: GregorianDate, locale: &Locale) -> String {
    let original = date.to_string();
    if !locale.displays_jalali() {
        return original;
    }
    let result = date.to_jalali().map(|jalali| jalali.to_string());
    fail_soft("to_jalali_date", &original, result)
}

/// Reads a Jalali date string and renders it as Gregorian `YYYY-MM-DD`.
///
/// Accepts Persian digits and `-` in place of `/`. Shapes other than
/// `YYYY/MM/DD`, and dates that do not exist in the Jalali calendar, are
/// returned unchanged.
pub fn to_gregorian(input: Option<&str>, locale: &Locale) -> Option<String> {
    if !locale.displays_jalali() {
        return input.map(str::to_owned);
    }
    let raw = non_blank(input)?;
    let result = parse_jalali_shape(raw).map(|date| date.to_gregorian().to_string());
    Some(fail_soft("to_gregorian", raw, result))
}

/// Drops any time-of-day suffix and returns the date as `YYYY-MM-DD`.
///
/// If the date part cannot be read, falls back to the first
/// whitespace-separated token of `input`.
pub fn normalize_gregorian(input: Option<&str>) -> Option<String> {
    let raw = non_blank(input)?;
    match parse_gregorian_lenient(raw) {
        Ok(date) => Some(date.to_string()),
        Err(error) => {
            debug!(operation = "normalize_gregorian", input = raw, %error, "date left unparsed");
            Some(raw.split_whitespace().next().unwrap_or(raw).to_owned())
        }
    }
}

fn non_blank(input: Option<&str>) -> Option<&str> {
    input.filter(|s| !s.trim().is_empty())
}

fn fail_soft(operation: &'static str, raw: &str, result: Result<String, ParseError>) -> String {
    result.unwrap_or_else(|error| {
        debug!(operation, input = raw, %error, "date left unconverted");
        raw.to_owned()
    })
}

fn gregorian_to_jalali_text(raw: &str) -> Result<String, ParseError> {
    let date = parse_gregorian_lenient(raw)?;
    Ok(date.to_jalali()?.to_string())
}

/// Parses the date part of a Gregorian date or date-time string.
fn parse_gregorian_lenient(raw: &str) -> Result<GregorianDate, ParseError> {
    let latin = to_latin_digits(raw.trim());
    let date_part = latin
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .unwrap_or_default();
    date_part.parse()
}

fn parse_jalali_shape(raw: &str) -> Result<JalaliDate, ParseError> {
    let shape = JALALI_SHAPE
        .as_ref()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    let normalized = to_latin_digits(raw.trim())
        .replace(GREGORIAN_SEPARATOR, &JALALI_SEPARATOR.to_string());
    let caps = shape
        .captures(&normalized)
        .ok_or_else(|| ParseError::InvalidFormat(normalized.clone()))?;

    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let year = field(1)
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(normalized.clone()))?;
    let month = field(2)
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(normalized.clone()))?;
    let day = field(3)
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(normalized.clone()))?;

    JalaliDate::new(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fa() -> Locale {
        Locale::Persian
    }

    fn en() -> Locale {
        Locale::from("en")
    }

    #[test]
    fn test_to_jalali() {
        struct TestCase {
            input:       &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-03-20",
                expected:    "1403/01/01",
                description: "iso date",
            },
            TestCase {
                input:       "1979-02-11",
                expected:    "1357/11/22",
                description: "iso date",
            },
            TestCase {
                input:       "2024/3/20",
                expected:    "1403/01/01",
                description: "slashes, no padding",
            },
            TestCase {
                input:       "2024-03-20 10:15:00",
                expected:    "1403/01/01",
                description: "trailing time",
            },
            TestCase {
                input:       "2024-03-20T10:15:00.000000Z",
                expected:    "1403/01/01",
                description: "iso date-time",
            },
            TestCase {
                input:       "۲۰۲۴-۰۳-۲۰",
                expected:    "1403/01/01",
                description: "persian digits",
            },
            TestCase {
                input:       "  2025-03-20  ",
                expected:    "1403/12/30",
                description: "surrounding whitespace",
            },
        ];

        for case in &cases {
            assert_eq!(
                to_jalali(Some(case.input), &fa()).as_deref(),
                Some(case.expected),
                "{} ({:?})",
                case.description,
                case.input
            );
        }
    }

    #[test]
    fn test_to_jalali_passthrough_locale() {
        assert_eq!(
            to_jalali(Some("2024-03-20"), &en()).as_deref(),
            Some("2024-03-20")
        );
        assert_eq!(to_jalali(Some("   "), &en()).as_deref(), Some("   "));
        assert_eq!(to_jalali(None, &en()), None);
    }

    #[test]
    fn test_to_jalali_blank() {
        assert_eq!(to_jalali(None, &fa()), None);
        assert_eq!(to_jalali(Some(""), &fa()), None);
        assert_eq!(to_jalali(Some("  \t"), &fa()), None);
    }

    #[test]
    fn test_to_jalali_fail_soft() {
        for input in ["not-a-date", "2023-02-29", "2024-13-01", "0500-01-01", "yesterday "] {
            assert_eq!(
                to_jalali(Some(input), &fa()).as_deref(),
                Some(input),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_to_jalali_display() {
        assert_eq!(
            to_jalali_display(Some("2024-03-20"), &fa()).as_deref(),
            Some("۱۴۰۳/۰۱/۰۱")
        );
        assert_eq!(
            to_jalali_display(Some("2024-03-20"), &en()).as_deref(),
            Some("2024-03-20")
        );
        assert_eq!(
            to_jalali_display(Some("garbage 12"), &fa()).as_deref(),
            Some("garbage 12")
        );
        assert_eq!(to_jalali_display(Some(" "), &fa()), None);
    }

    #[test]
    fn test_to_jalali_date() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(to_jalali_date(date, &fa()), "1403/01/01");
        assert_eq!(to_jalali_date(date, &en()), "2024-03-20");

        let before_epoch = GregorianDate::new(600, 1, 1).unwrap();
        assert_eq!(to_jalali_date(before_epoch, &fa()), "0600-01-01");
    }

    #[test]
    fn test_to_gregorian() {
        struct TestCase {
            input:       &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "1403/01/01",
                expected:    "2024-03-20",
                description: "canonical shape",
            },
            TestCase {
                input:       "۱۴۰۳/۰۱/۰۱",
                expected:    "2024-03-20",
                description: "persian digits",
            },
            TestCase {
                input:       "1403-01-01",
                expected:    "2024-03-20",
                description: "hyphen separators",
            },
            TestCase {
                input:       "1357/11/22",
                expected:    "1979-02-11",
                description: "single conversion",
            },
            TestCase {
                input:       "1403/1/1",
                expected:    "2024-03-20",
                description: "unpadded month and day",
            },
            TestCase {
                input:       "1403/12/30",
                expected:    "2025-03-20",
                description: "leap esfand",
            },
        ];

        for case in &cases {
            assert_eq!(
                to_gregorian(Some(case.input), &fa()).as_deref(),
                Some(case.expected),
                "{} ({:?})",
                case.description,
                case.input
            );
        }
    }

    #[test]
    fn test_to_gregorian_fail_soft() {
        let cases = [
            "not-a-date",
            "1403/13/01",
            "1402/12/30",
            "1403/07/31",
            "1403/00/10",
            "0000/01/01",
            "14030101",
            "1403/01/01 10:00",
            "03/01/1403",
        ];
        for input in cases {
            assert_eq!(
                to_gregorian(Some(input), &fa()).as_deref(),
                Some(input),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_to_gregorian_locale_and_blank() {
        assert_eq!(
            to_gregorian(Some("1403/01/01"), &en()).as_deref(),
            Some("1403/01/01")
        );
        assert_eq!(to_gregorian(None, &fa()), None);
        assert_eq!(to_gregorian(Some(""), &fa()), None);
    }

    #[test]
    fn test_normalize_gregorian() {
        assert_eq!(
            normalize_gregorian(Some("2024-03-20 10:15:00")).as_deref(),
            Some("2024-03-20")
        );
        assert_eq!(
            normalize_gregorian(Some("2024-03-20")).as_deref(),
            Some("2024-03-20")
        );
        assert_eq!(
            normalize_gregorian(Some("2024/3/5")).as_deref(),
            Some("2024-03-05")
        );
        assert_eq!(
            normalize_gregorian(Some("۲۰۲۴-۰۳-۲۰ ۱۰:۱۵")).as_deref(),
            Some("2024-03-20")
        );
    }

    #[test]
    fn test_normalize_gregorian_fallback() {
        assert_eq!(
            normalize_gregorian(Some("garbage 10:15:00")).as_deref(),
            Some("garbage")
        );
        assert_eq!(
            normalize_gregorian(Some("2023-02-30 00:00:00")).as_deref(),
            Some("2023-02-30")
        );
        assert_eq!(normalize_gregorian(Some("   ")), None);
        assert_eq!(normalize_gregorian(None), None);
    }

    #[test]
    fn test_jalali_round_trip_through_strings() {
        for input in ["2024-03-20", "1979-02-11", "2000-02-29", "2025-03-20"] {
            let jalali = to_jalali(Some(input), &fa());
            let back = to_gregorian(jalali.as_deref(), &fa());
            assert_eq!(back.as_deref(), Some(input));
        }
    }
}
