//! Daily-page date validation

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Lexical shape of a daily-page uid: `DD-MM-YYYY`.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("date pattern compiles"));

/// True iff `candidate` is a `DD-MM-YYYY` string naming a real calendar
/// date. Rejects reordered formats (`YYYY-MM-DD`) as well as
/// calendar-invalid values like `31-04-2023` or day `00`.
///
/// This predicate is the sole criterion for daily-journal pages.
pub fn is_valid_date(candidate: &str) -> bool {
    DATE_SHAPE.is_match(candidate)
        && NaiveDate::parse_from_str(candidate, "%d-%m-%Y").is_ok()
}
