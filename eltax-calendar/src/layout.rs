//! Layout of a half-year as a grid of complete weeks.
//!
//! Each row of the grid starts with a cell holding the label of the month it opens, followed
//! by one cell per day from Monday to Sunday. Borders mark the limits of months and of the
//! table while shading marks padding days that belong to another fiscal year.

use std::ops::Range;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::fiscal_year::FiscalYear;
use crate::schedule::Schedule;
use crate::status::{DayStatus, OpStatus};
use crate::utils::dates::{days_since_monday, days_until_monday, GridDate};

/// Extend a range of days to complete weeks: its start is moved back to a Monday and its
/// (excluded) end is moved forward to a Monday.
///
/// ```
/// use chrono::{NaiveDate, Weekday, Datelike};
/// use eltax_calendar::layout::week_range;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// // From Monday 2024-04-01 (included) to Tuesday 2024-10-01 (excluded).
/// let range = week_range(date(2024, 4, 1)..date(2024, 10, 1));
/// assert_eq!(range, date(2024, 4, 1)..date(2024, 10, 7));
///
/// // From Tuesday 2024-10-01 (included) to Tuesday 2025-04-01 (excluded).
/// let range = week_range(date(2024, 10, 1)..date(2025, 4, 1));
/// assert_eq!(range, date(2024, 9, 30)..date(2025, 4, 7));
/// ```
pub fn week_range(range: Range<NaiveDate>) -> Range<NaiveDate> {
    let start = range.start - Days::new(days_since_monday(range.start));
    let end = range.end + Days::new(days_until_monday(range.end));
    start..end
}

/// Style of the right side of a day cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RightBorder {
    Default,
    /// Last day of a month, before the end of the week.
    MonthEnd,
    /// Sunday, the row is closed by the weekend separator.
    None,
}

/// Style of the bottom side of a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BottomBorder {
    Default,
    /// The cell below belongs to the next month.
    MonthEnd,
    /// Last row of the table.
    EndOfTable,
}

/// Leftmost cell of a row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthCell {
    /// Month of the Monday starting this row.
    pub month: u32,
    /// Only the first row of a month shows its label.
    pub show_label: bool,
    pub bottom: BottomBorder,
}

impl MonthCell {
    pub fn is_odd_month(&self) -> bool {
        self.month % 2 == 1
    }
}

/// A day of the grid, annotated with its status in the schedule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DayCell<'s> {
    pub date: NaiveDate,
    pub right: RightBorder,
    pub bottom: BottomBorder,
    /// Padding day belonging to another fiscal year.
    pub out_of_scope: bool,
    /// Status of the day, absent if it is not in the schedule.
    pub status: Option<&'s DayStatus>,
}

impl DayCell<'_> {
    pub fn is_odd_month(&self) -> bool {
        self.date.is_odd_month()
    }

    pub fn op(&self) -> Option<OpStatus> {
        self.status.map(|status| status.op)
    }

    pub fn holiday(&self) -> Option<&str> {
        self.status?.holiday_name()
    }

    pub fn is_saturday(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }

    /// Sundays and holidays share the same marker.
    pub fn is_sunday_like(&self) -> bool {
        !self.is_saturday() && (self.date.weekday() == Weekday::Sun || self.holiday().is_some())
    }
}

/// A row of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Week<'s> {
    pub month: MonthCell,
    /// Days from Monday to Sunday.
    pub days: Vec<DayCell<'s>>,
}

/// The grid displaying a range of days of a fiscal year.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarTable<'s> {
    /// Displayed days, extended to complete weeks.
    pub range: Range<NaiveDate>,
    pub weeks: Vec<Week<'s>>,
}

impl<'s> CalendarTable<'s> {
    /// Layout the days of `range`, which is expected to be part of `fiscal_year`.
    ///
    /// ```
    /// use eltax_calendar::layout::CalendarTable;
    /// use eltax_calendar::{FiscalYear, Schedule};
    ///
    /// let fy = FiscalYear::new(2024).unwrap();
    /// let schedule = Schedule::new();
    /// let table = CalendarTable::new(fy.first_half(), fy, &schedule);
    ///
    /// assert_eq!(table.weeks.len(), 27);
    /// assert!(table.weeks.iter().all(|week| week.days.len() == 7));
    /// ```
    pub fn new(range: Range<NaiveDate>, fiscal_year: FiscalYear, schedule: &'s Schedule) -> Self {
        let range = week_range(range);
        let end = range.end;
        debug_assert!(range.start.is_week_start() && end.is_week_start());

        // A row is the last one of the table when the same weekday of next week is out of it.
        let is_last_week = move |date: NaiveDate| date + Days::new(7) >= end;

        let bottom_border = move |date: NaiveDate| {
            if is_last_week(date) {
                BottomBorder::EndOfTable
            } else if date.next_week_is_next_month() {
                BottomBorder::MonthEnd
            } else {
                BottomBorder::Default
            }
        };

        let weeks = range
            .start
            .iter_weeks()
            .take_while(|monday| *monday < end)
            .map(|monday| {
                let month = MonthCell {
                    month: monday.month(),
                    show_label: monday.last_week_is_last_month(),
                    bottom: bottom_border(monday),
                };

                let days = monday
                    .iter_days()
                    .take(7)
                    .map(|date| DayCell {
                        date,
                        right: if date.is_week_end() {
                            RightBorder::None
                        } else if date.tomorrow_is_next_month() {
                            RightBorder::MonthEnd
                        } else {
                            RightBorder::Default
                        },
                        bottom: bottom_border(date),
                        out_of_scope: fiscal_year.is_out_of_scope(date),
                        status: schedule.get(date),
                    })
                    .collect();

                Week { month, days }
            })
            .collect();

        Self { range, weeks }
    }

    /// Iterate over all displayed days.
    pub fn days(&self) -> impl Iterator<Item = &DayCell<'s>> + '_ {
        self.weeks.iter().flat_map(|week| &week.days)
    }
}
