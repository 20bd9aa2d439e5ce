use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// "Monday, June 10, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "9:00 AM"
pub fn format_time(datetime: NaiveDateTime) -> String {
    datetime.format("%-I:%M %p").to_string()
}

/// "Monday, June 10, 2024 at 9:00 AM"
pub fn format_date_time(datetime: NaiveDateTime) -> String {
    format!("{} at {}", format_date(datetime.date()), format_time(datetime))
}

/// Cents to a dollar string: 3500 -> "$35.00".
pub fn format_currency(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// The next bookable day after `from`, skipping Saturdays and Sundays.
pub fn next_available_day(from: NaiveDate) -> NaiveDate {
    let mut day = from + Duration::days(1);
    match day.weekday() {
        Weekday::Sat => day += Duration::days(2),
        Weekday::Sun => day += Duration::days(1),
        _ => {}
    }
    day
}
