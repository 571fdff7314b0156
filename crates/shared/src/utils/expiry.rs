use chrono::{Datelike, NaiveDate};

/// Renders a card expiry as `MM/YY`: open date shifted by the validity
/// period, two-digit year.
pub fn expiry_string(open_date: NaiveDate, validity_years: i32) -> String {
    let year = open_date.year() + validity_years;
    format!("{:02}/{:02}", open_date.month(), year % 100)
}
