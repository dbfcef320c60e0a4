mod render;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::holidays::HolidayCalendar;
use crate::localization::Language;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// A fixed set of holidays, with names that do not depend on the language.
#[derive(Debug, Default)]
pub(crate) struct FixedHolidays(HashMap<NaiveDate, &'static str>);

impl FixedHolidays {
    pub(crate) fn new(holidays: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self(
            holidays
                .into_iter()
                .map(|(date, name)| (date!(date), name))
                .collect(),
        )
    }
}

impl HolidayCalendar for FixedHolidays {
    fn holiday_name(&self, date: NaiveDate, _language: Language) -> Option<&'static str> {
        self.0.get(&date).copied()
    }
}
