//! Tenure, notice, and accrual-period date arithmetic.
//!
//! All tenure rules share two conventions: a year is 365 calendar days
//! regardless of leap years, and a month of service counts toward an
//! accrual when at least 15 of its calendar days fall inside the period.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::NoticeType;

/// Computes whole years worked as `floor(calendar days / 365)`.
///
/// Inverted ranges (end before start) are absorbed by taking the
/// absolute day count, so the function never underflows.
pub fn years_worked(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    let days = (end_date - start_date).num_days().abs();
    (days / 365) as u32
}

/// Computes the statutory notice period in days.
///
/// 30 base days plus 3 per whole year worked, capped at an extra 60
/// (90 days total). A probationary contract reaching its natural end
/// carries no notice at all.
///
/// # Legal Reference
///
/// Lei 12.506/2011 art. 1.
pub fn notice_days(years: u32, probation_end: bool) -> u32 {
    if probation_end {
        return 0;
    }
    30 + (years * 3).min(60)
}

/// Computes how many notice days extend the contract for accrual purposes.
///
/// An indemnified notice projects the contract forward by its full
/// length; under mutual agreement only half the days are credited
/// (floored). Worked notice is already inside the contract dates and
/// unfulfilled notice credits nothing.
pub fn credited_notice_days(days: u32, notice_type: NoticeType, mutual_agreement: bool) -> u32 {
    match notice_type {
        NoticeType::Indemnified if mutual_agreement => days / 2,
        NoticeType::Indemnified => days,
        NoticeType::Worked | NoticeType::NotFulfilled | NoticeType::NotApplicable => 0,
    }
}

/// Projects the contract end date forward by the credited notice days.
pub fn projected_exit_date(end_date: NaiveDate, credited_days: u32) -> NaiveDate {
    end_date
        .checked_add_days(Days::new(u64::from(credited_days)))
        .unwrap_or(end_date)
}

/// Counts the accrual months between an anchor date and an end date.
///
/// Walks calendar months from the anchor: a month counts when at least
/// 15 of its days fall within `[anchor, end]`. Capped at 12 — a full
/// accrual period. Returns 0 when the end precedes the anchor.
pub fn accrual_months(anchor: NaiveDate, end: NaiveDate) -> u32 {
    if end < anchor {
        return 0;
    }

    let mut months = 0u32;
    let mut cursor = anchor;

    loop {
        let month_end = last_day_of_month(cursor);
        let span_end = month_end.min(end);
        let days_in_span = (span_end - cursor).num_days() + 1;

        if days_in_span >= 15 {
            months += 1;
        }
        if months == 12 || span_end >= end {
            break;
        }
        cursor = first_day_of_next_month(cursor);
    }

    months
}

/// Finds the most recent vacation anniversary on or before the exit date.
///
/// The anniversary is the start date's month and day in the exit year,
/// falling back to the previous year when it has not yet occurred. A
/// February 29 start anchors to February 28 in non-leap years.
pub fn vacation_anniversary(start_date: NaiveDate, exit_date: NaiveDate) -> NaiveDate {
    let candidate = anniversary_in_year(start_date, exit_date.year());
    if candidate <= exit_date {
        candidate
    } else {
        anniversary_in_year(start_date, exit_date.year() - 1)
    }
}

/// Returns the 13th-salary accrual anchor: January 1 of the exit year,
/// or the start date itself when the contract began mid-year.
pub fn thirteenth_anchor(start_date: NaiveDate, exit_date: NaiveDate) -> NaiveDate {
    let january_first = NaiveDate::from_ymd_opt(exit_date.year(), 1, 1)
        .unwrap_or(exit_date);
    january_first.max(start_date)
}

fn anniversary_in_year(start_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, start_date.month(), start_date.day()).unwrap_or_else(|| {
        // Feb 29 in a non-leap year.
        NaiveDate::from_ymd_opt(year, start_date.month(), 28)
            .unwrap_or(start_date)
    })
}

fn first_day_of_next_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .unwrap_or(date)
}

/// Returns the last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_next_month(date)
        .checked_sub_days(Days::new(1))
        .unwrap_or(date)
}
