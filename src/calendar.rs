use crate::error::SchedulerError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, SchedulerError> {
    first_of_month(year, month)?;
    // Probing downwards from 31 also works for the last representable month,
    // where the first of the following month does not exist.
    let last_day = (29..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28);
    Ok(last_day)
}

/// Builds the Sunday-first month view: trailing days of the previous month,
/// every day of the target month, then leading days of the next month until
/// the grid is a whole number of 7-day weeks.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<NaiveDate>, SchedulerError> {
    let first = first_of_month(year, month)?;
    let day_count = days_in_month(year, month)?;
    let leading = first.weekday().num_days_from_sunday() as u64;

    // Padding days can fall outside chrono's representable range at the
    // calendar's extremes, so every step is checked.
    let overflow = SchedulerError::InvalidYear { year };
    let mut days = Vec::new();
    for offset in (1..=leading).rev() {
        let date = first
            .checked_sub_days(Days::new(offset))
            .ok_or(overflow.clone())?;
        days.push(date);
    }
    for offset in 0..day_count as u64 {
        let date = first
            .checked_add_days(Days::new(offset))
            .ok_or(overflow.clone())?;
        days.push(date);
    }
    while days.len() % 7 != 0 {
        let date = days
            .last()
            .unwrap()
            .checked_add_days(Days::new(1))
            .ok_or(overflow.clone())?;
        days.push(date);
    }
    Ok(days)
}

/// Pure selectability predicate for a grid day: the date must fall inside
/// the target month, within the min/max bounds, and not on a weekend.
pub fn is_selectable(
    date: NaiveDate,
    year: i32,
    month: u32,
    min_date: NaiveDate,
    max_date: Option<NaiveDate>,
) -> bool {
    let in_month = date.year() == year && date.month() == month;
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    in_month
        && date >= min_date
        && max_date.map_or(true, |max| date <= max)
        && !weekend
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, SchedulerError> {
    if !(1..=12).contains(&month) {
        return Err(SchedulerError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(SchedulerError::InvalidYear { year })
}
