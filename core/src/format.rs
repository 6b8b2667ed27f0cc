//! Display-pattern formatting for picker values.
//!
//! The picker's `format` option uses the compact field-letter language of
//! the configuration surface: `y/MM/dd`, `YYYY-MM-DD`, or
//! `y/MM/dd HH:mm:ss`. Doubled letters zero-pad, single letters do not,
//! and any other character is emitted verbatim.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use time::{Date, Month, PrimitiveDateTime, Time};

/// Default display pattern for date-only pickers.
pub const DEFAULT_DATE_PATTERN: &str = "y/MM/dd";

/// Default display pattern when time-of-day selection is enabled.
pub const DEFAULT_DATETIME_PATTERN: &str = "y/MM/dd HH:mm:ss";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    YearShort,
    Month,
    Day,
    Hour,
    Hour12,
    Minute,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Field { field: Field, padded: bool },
    Literal(char),
}

/// A compiled display pattern.
///
/// Compiling is cheap and infallible; unrecognized letters become literals,
/// matching how hosts treat separator characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::compile(DEFAULT_DATE_PATTERN)
    }
}

impl Pattern {
    /// Compiles a pattern string.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            let mut run = 1usize;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }
            match field_for(c) {
                Some(Field::Year) if run == 2 => tokens.push(Token::Field {
                    field: Field::YearShort,
                    padded: true,
                }),
                // `y` and `yyyy`/`YYYY` both render the full year.
                Some(Field::Year) => tokens.push(Token::Field {
                    field: Field::Year,
                    padded: run >= 4,
                }),
                Some(field) => tokens.push(Token::Field {
                    field,
                    padded: run >= 2,
                }),
                None => {
                    for _ in 0..run {
                        tokens.push(Token::Literal(c));
                    }
                }
            }
        }
        Self { tokens }
    }

    /// Renders a datetime through the pattern.
    #[must_use]
    pub fn render(&self, value: PrimitiveDateTime) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match *token {
                Token::Literal(c) => out.push(c),
                Token::Field { field, padded } => render_field(&mut out, field, padded, value),
            }
        }
        out
    }

    /// Renders a date at midnight.
    #[must_use]
    pub fn render_date(&self, date: Date) -> String {
        self.render(PrimitiveDateTime::new(date, Time::MIDNIGHT))
    }

    /// Parses text produced by (or compatible with) this pattern.
    ///
    /// Returns `None` when the text does not match. A malformed bound value
    /// is "no value", never an error, so there is no error type here.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<PrimitiveDateTime> {
        let mut rest = text.trim();
        let mut year: Option<i32> = None;
        let mut month: Option<u8> = None;
        let mut day: Option<u8> = None;
        let mut hour = 0u8;
        let mut minute = 0u8;
        let mut second = 0u8;
        for token in &self.tokens {
            match *token {
                Token::Literal(c) => {
                    rest = rest.strip_prefix(c)?;
                }
                Token::Field { field, padded } => {
                    let max = match field {
                        Field::Year => 4,
                        _ => 2,
                    };
                    let (value, tail) = take_number(rest, padded.then_some(max), max)?;
                    rest = tail;
                    match field {
                        Field::Year => year = Some(i32::try_from(value).ok()?),
                        Field::YearShort => year = Some(2000 + i32::try_from(value).ok()?),
                        Field::Month => month = Some(u8::try_from(value).ok()?),
                        Field::Day => day = Some(u8::try_from(value).ok()?),
                        Field::Hour | Field::Hour12 => hour = u8::try_from(value).ok()?,
                        Field::Minute => minute = u8::try_from(value).ok()?,
                        Field::Second => second = u8::try_from(value).ok()?,
                    }
                }
            }
        }
        if !rest.is_empty() {
            return None;
        }
        let date = Date::from_calendar_date(year?, Month::try_from(month?).ok()?, day?).ok()?;
        let time = Time::from_hms(hour, minute, second).ok()?;
        Some(PrimitiveDateTime::new(date, time))
    }
}

fn field_for(c: char) -> Option<Field> {
    match c {
        'y' | 'Y' => Some(Field::Year),
        'M' => Some(Field::Month),
        'd' | 'D' => Some(Field::Day),
        'H' => Some(Field::Hour),
        'h' => Some(Field::Hour12),
        'm' => Some(Field::Minute),
        's' => Some(Field::Second),
        _ => None,
    }
}

fn render_field(out: &mut String, field: Field, padded: bool, value: PrimitiveDateTime) {
    let number = match field {
        Field::Year => i64::from(value.year()),
        Field::YearShort => i64::from(value.year().rem_euclid(100)),
        Field::Month => i64::from(u8::from(value.month())),
        Field::Day => i64::from(value.day()),
        Field::Hour => i64::from(value.hour()),
        Field::Hour12 => i64::from((value.hour() + 11) % 12 + 1),
        Field::Minute => i64::from(value.minute()),
        Field::Second => i64::from(value.second()),
    };
    let width = match field {
        Field::Year => 4,
        _ => 2,
    };
    if padded {
        let _ = write!(out, "{number:0width$}");
    } else {
        let _ = write!(out, "{number}");
    }
}

/// Takes a leading digit run. `exact` requires at least that many digits
/// and consumes exactly that many; otherwise up to `max` are consumed.
fn take_number(text: &str, exact: Option<usize>, max: usize) -> Option<(u32, &str)> {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    let len = match exact {
        Some(width) if digits < width => return None,
        Some(width) => width,
        None if digits == 0 => return None,
        None => digits.min(max),
    };
    let (head, tail) = text.split_at(len);
    head.parse::<u32>().ok().map(|value| (value, tail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn dt(
        year: i32,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> PrimitiveDateTime {
        PrimitiveDateTime::new(
            Date::from_calendar_date(year, month, day).unwrap(),
            Time::from_hms(hour, minute, second).unwrap(),
        )
    }

    #[test]
    fn default_pattern_zero_pads_month_and_day() {
        let pattern = Pattern::default();
        assert_eq!(pattern.render(dt(2024, Month::June, 8, 0, 0, 0)), "2024/06/08");
    }

    #[test]
    fn dash_pattern_renders() {
        let pattern = Pattern::compile("YYYY-MM-DD");
        assert_eq!(pattern.render(dt(2022, Month::January, 3, 0, 0, 0)), "2022-01-03");
    }

    #[test]
    fn single_letters_do_not_pad() {
        let pattern = Pattern::compile("y/M/d");
        assert_eq!(pattern.render(dt(2024, Month::June, 8, 0, 0, 0)), "2024/6/8");
    }

    #[test]
    fn datetime_pattern_renders_time() {
        let pattern = Pattern::compile(DEFAULT_DATETIME_PATTERN);
        assert_eq!(
            pattern.render(dt(2024, Month::June, 16, 3, 0, 0)),
            "2024/06/16 03:00:00"
        );
    }

    #[test]
    fn twelve_hour_clock() {
        let pattern = Pattern::compile("hh:mm");
        assert_eq!(pattern.render(dt(2024, Month::June, 1, 15, 5, 0)), "03:05");
        assert_eq!(pattern.render(dt(2024, Month::June, 1, 12, 0, 0)), "12:00");
    }

    #[test]
    fn short_year() {
        let pattern = Pattern::compile("yy/MM");
        assert_eq!(pattern.render(dt(2007, Month::March, 1, 0, 0, 0)), "07/03");
    }

    #[test]
    fn parse_round_trips_date_patterns() {
        for raw in ["y/MM/dd", "YYYY-MM-DD", "y/M/d"] {
            let pattern = Pattern::compile(raw);
            let value = dt(2024, Month::June, 8, 0, 0, 0);
            assert_eq!(pattern.parse(&pattern.render(value)), Some(value), "{raw}");
        }
    }

    #[test]
    fn parse_accepts_unpadded_fields() {
        let pattern = Pattern::default();
        assert_eq!(
            pattern.parse("2024/6/8"),
            Some(dt(2024, Month::June, 8, 0, 0, 0))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let pattern = Pattern::default();
        assert_eq!(pattern.parse("not a date"), None);
        assert_eq!(pattern.parse("2024-06-08"), None);
        assert_eq!(pattern.parse("2024/13/01"), None);
        assert_eq!(pattern.parse("2024/06/08 extra"), None);
        assert_eq!(pattern.parse(""), None);
    }

    #[test]
    fn parse_trims_whitespace() {
        let pattern = Pattern::default();
        assert_eq!(
            pattern.parse("  2024/06/08  "),
            Some(dt(2024, Month::June, 8, 0, 0, 0))
        );
    }
}
