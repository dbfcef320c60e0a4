use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Position of a day relative to the rows and columns of a Monday-first calendar grid.
pub(crate) trait GridDate: Datelike + Copy {
    /// Is this day in the first column of the grid.
    fn is_week_start(self) -> bool {
        self.weekday() == Weekday::Mon
    }

    /// Is this day in the last column of the grid.
    fn is_week_end(self) -> bool {
        self.weekday() == Weekday::Sun
    }

    fn is_odd_month(self) -> bool {
        self.month() % 2 == 1
    }

    fn tomorrow_is_next_month(self) -> bool;
    fn next_week_is_next_month(self) -> bool;
    fn last_week_is_last_month(self) -> bool;
}

impl GridDate for NaiveDate {
    fn tomorrow_is_next_month(self) -> bool {
        self.succ_opt()
            .map_or(true, |tomorrow| tomorrow.month() != self.month())
    }

    fn next_week_is_next_month(self) -> bool {
        self.checked_add_days(Days::new(7))
            .map_or(true, |next_week| next_week.month() != self.month())
    }

    fn last_week_is_last_month(self) -> bool {
        self.checked_sub_days(Days::new(7))
            .map_or(true, |last_week| last_week.month() != self.month())
    }
}

/// Number of days to move back from `date` to reach a Monday.
pub(crate) fn days_since_monday(date: NaiveDate) -> u64 {
    date.weekday().num_days_from_monday().into()
}

/// Number of days to move forward from `date` to reach a Monday, zero for a Monday.
pub(crate) fn days_until_monday(date: NaiveDate) -> u64 {
    (7 - days_since_monday(date)) % 7
}
