use std::fmt;
use std::ops::{Range, RangeInclusive};

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{Error, Result};

/// Range of supported fiscal years, output file names use four-digit years.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9998;

/// A fiscal year, from April 1 of its year to March 31 of the next one.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FiscalYear {
    year: i32,
    /// First day of the year (April 1).
    start: NaiveDate,
    /// First day of the second half (October 1).
    middle: NaiveDate,
    /// First day of next year (April 1).
    end: NaiveDate,
}

impl FiscalYear {
    /// Fiscal year starting on April 1 of `year`.
    ///
    /// ```
    /// use eltax_calendar::FiscalYear;
    ///
    /// assert!(FiscalYear::new(2024).is_ok());
    /// assert!(FiscalYear::new(-5).is_err());
    /// ```
    pub fn new(year: i32) -> Result<Self> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(Error::UnsupportedYear(year));
        }

        let first_of = |calendar_year, month| {
            NaiveDate::from_ymd_opt(calendar_year, month, 1).ok_or(Error::UnsupportedYear(year))
        };

        Ok(Self {
            year,
            start: first_of(year, 4)?,
            middle: first_of(year, 10)?,
            end: first_of(year + 1, 4)?,
        })
    }

    /// Calendar year in which this fiscal year begins.
    pub fn year(self) -> i32 {
        self.year
    }

    pub fn first_day(self) -> NaiveDate {
        self.start
    }

    pub fn last_day(self) -> NaiveDate {
        self.end
            .pred_opt()
            .expect("fiscal year cannot end on the first representable day")
    }

    /// April to September.
    pub fn first_half(self) -> Range<NaiveDate> {
        self.start..self.middle
    }

    /// October to March.
    pub fn second_half(self) -> Range<NaiveDate> {
        self.middle..self.end
    }

    /// Iterate over all days of this fiscal year.
    ///
    /// ```
    /// use eltax_calendar::FiscalYear;
    ///
    /// assert_eq!(FiscalYear::new(2023).unwrap().days().count(), 366);
    /// assert_eq!(FiscalYear::new(2024).unwrap().days().count(), 365);
    /// ```
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date < end)
    }

    /// Check if a day is displayed as not belonging to this fiscal year: three months before,
    /// its calendar year is not the fiscal year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use eltax_calendar::FiscalYear;
    ///
    /// let fy = FiscalYear::new(2024).unwrap();
    /// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ///
    /// assert!(fy.is_out_of_scope(date(2024, 3, 31)));
    /// assert!(!fy.is_out_of_scope(date(2024, 4, 1)));
    /// assert!(!fy.is_out_of_scope(date(2025, 3, 31)));
    /// assert!(fy.is_out_of_scope(date(2025, 4, 1)));
    /// ```
    pub fn is_out_of_scope(self, date: NaiveDate) -> bool {
        date.checked_sub_months(Months::new(3))
            .map_or(true, |shifted| shifted.year() != self.year)
    }

    /// Name of the calendar page generated for this year.
    ///
    /// ```
    /// use eltax_calendar::FiscalYear;
    ///
    /// let fy = FiscalYear::new(2024).unwrap();
    /// assert_eq!(fy.page_file_name(), "20240401-20250331.html");
    /// ```
    pub fn page_file_name(self) -> String {
        format!("{:04}0401-{:04}0331.html", self.year, self.year + 1)
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)
    }
}
