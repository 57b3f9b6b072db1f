// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated UTC calendar day.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::TideError;
use crate::instant::Time;
use crate::scales::UTC;

/// Days from 0001-01-01 (day 1 of the common era) to 1858-11-17 (MJD 0).
const MJD_FROM_CE: i64 = 678_576;

/// A proleptic Gregorian date, always valid once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i32, u32, u32)", into = "(i32, u32, u32)")
)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    /// Build a date, rejecting `(2001, 2, 29)`, `(2000, 4, 31)` and the like.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TideError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(TideError::InvalidDate { year, month, day })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Modified Julian Day number of this date (MJD 0 = 1858-11-17).
    #[inline]
    pub fn mjd(&self) -> i64 {
        i64::from(self.date.num_days_from_ce()) - MJD_FROM_CE
    }

    /// 00:00:00 UTC of this date.
    #[inline]
    pub fn midnight(&self) -> Time<UTC> {
        Time::new(self.mjd() as f64)
    }
}

/// Any `NaiveDate` is already a valid calendar day.
impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl TryFrom<(i32, u32, u32)> for CalendarDate {
    type Error = TideError;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u32, u32) {
    fn from(date: CalendarDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mjd_of_known_dates() {
        assert_eq!(CalendarDate::new(1858, 11, 17).unwrap().mjd(), 0);
        assert_eq!(CalendarDate::new(2000, 1, 1).unwrap().mjd(), 51_544);
        assert_eq!(CalendarDate::new(2021, 7, 5).unwrap().mjd(), 59_400);
        assert_eq!(CalendarDate::new(1970, 1, 1).unwrap().mjd(), 40_587);
    }

    #[test]
    fn leap_day_rules() {
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert_eq!(
            CalendarDate::new(2001, 2, 29),
            Err(TideError::InvalidDate {
                year: 2001,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(CalendarDate::new(2000, 4, 31).is_err());
        assert!(CalendarDate::new(2000, 13, 1).is_err());
        assert!(CalendarDate::new(2000, 0, 1).is_err());
        assert!(CalendarDate::new(2000, 1, 0).is_err());
    }

    #[test]
    fn midnight_is_on_utc_axis() {
        let date = CalendarDate::new(2000, 1, 1).unwrap();
        assert_eq!(date.midnight(), Time::<UTC>::new(51_544.0));
    }

    #[test]
    fn from_naive_date_keeps_the_day() {
        let naive = NaiveDate::from_ymd_opt(2021, 7, 5).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date, CalendarDate::new(2021, 7, 5).unwrap());
        assert_eq!(date.mjd(), 59_400);
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(CalendarDate::new(987, 3, 4).unwrap().to_string(), "0987-03-04");
    }
}
