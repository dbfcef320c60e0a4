use chrono::NaiveDate;

use crate::localization::Language;

/// Source of public holidays.
pub trait HolidayCalendar {
    /// Name of the public holiday falling on a given day, if any.
    fn holiday_name(&self, date: NaiveDate, language: Language) -> Option<&'static str>;
}

impl<H: HolidayCalendar + ?Sized> HolidayCalendar for &H {
    fn holiday_name(&self, date: NaiveDate, language: Language) -> Option<&'static str> {
        (**self).holiday_name(date, language)
    }
}

/// National holidays of Japan.
///
/// ```
/// use chrono::NaiveDate;
/// use eltax_calendar::{HolidayCalendar, JapaneseHolidays, Language};
///
/// let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
/// assert_eq!(JapaneseHolidays.holiday_name(date, Language::English), Some("Culture Day"));
/// assert_eq!(JapaneseHolidays.holiday_name(date, Language::Japanese), Some("文化の日"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct JapaneseHolidays;

impl HolidayCalendar for JapaneseHolidays {
    fn holiday_name(&self, date: NaiveDate, language: Language) -> Option<&'static str> {
        jp_holidays::holiday(date).map(|holiday| language.holiday_name(holiday))
    }
}
