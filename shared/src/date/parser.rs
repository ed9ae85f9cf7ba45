use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Year, month (1-12), day as pulled out of the text; not yet validated.
type Parts = (i32, u32, u32);

struct DateFormat {
    name: &'static str,
    pattern: Regex,
    extract: fn(&Captures) -> Option<Parts>,
}

lazy_static! {
    /// Accepted input formats, tried in order. The first one that yields a
    /// real calendar date wins.
    static ref FORMATS: Vec<DateFormat> = vec![
        DateFormat {
            name: "MM/DD/YYYY",
            pattern: Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap(),
            extract: month_day_year,
        },
        DateFormat {
            name: "YYYY-MM-DD",
            pattern: Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap(),
            extract: year_month_day,
        },
        DateFormat {
            name: "MM-DD-YYYY",
            pattern: Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").unwrap(),
            extract: month_day_year,
        },
        DateFormat {
            name: "Month DD, YYYY",
            pattern: Regex::new(r"(?i)^([a-z]+)\.?\s+(\d{1,2}),?\s+(\d{4})$").unwrap(),
            extract: named_month_day_year,
        },
    ];
}

fn number<T: std::str::FromStr>(caps: &Captures, idx: usize) -> Option<T> {
    caps.get(idx)?.as_str().parse().ok()
}

fn month_day_year(caps: &Captures) -> Option<Parts> {
    Some((number(caps, 3)?, number(caps, 1)?, number(caps, 2)?))
}

fn year_month_day(caps: &Captures) -> Option<Parts> {
    Some((number(caps, 1)?, number(caps, 2)?, number(caps, 3)?))
}

fn named_month_day_year(caps: &Captures) -> Option<Parts> {
    let month = month_from_name(caps.get(1)?.as_str())?;
    Some((number(caps, 3)?, month, number(caps, 2)?))
}

/// 1-based month whose full English name starts with `prefix`, ignoring case.
pub fn month_from_name(prefix: &str) -> Option<u32> {
    let prefix = prefix.to_lowercase();
    if prefix.is_empty() {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(&prefix))
        .map(|idx| idx as u32 + 1)
}

fn build((year, month, day): Parts) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    // from_ymd_opt rejects days the month does not have (Feb 30 etc.)
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses free-form date text in any accepted format.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    FORMATS.iter().find_map(|format| {
        let caps = format.pattern.captures(text)?;
        let date = build((format.extract)(&caps)?)?;
        log::trace!("Parsed {:?} as {} via {}", text, date, format.name);
        Some(date)
    })
}

/// Parses free-form date text into canonical `YYYY-MM-DD`.
pub fn parse(text: &str) -> Option<String> {
    parse_date(text).map(format_iso)
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `MM/DD/YYYY`, the form shown in date inputs.
pub fn format_slashed(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// `MM-DD-YYYY`.
pub fn format_dashed(date: NaiveDate) -> String {
    date.format("%m-%d-%Y").to_string()
}

/// `Month DD, YYYY`.
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {:02}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}
