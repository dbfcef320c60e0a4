use chrono::{Datelike, NaiveDate, Weekday};

use crate::context::Context;
use crate::fiscal_year::FiscalYear;
use crate::holidays::HolidayCalendar;
use crate::schedule::Schedule;
use crate::status::{DayStatus, OpStatus};

/// Default status of a day, before any manual adjustment of the schedule.
///
/// Public holidays take precedence over the new-year and year-end closures, which take
/// precedence over weekends. Any other day is fully operated.
///
/// ```
/// use chrono::NaiveDate;
/// use eltax_calendar::{classify_day, Context, DayStatus, OpStatus};
///
/// let ctx = Context::default();
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// assert_eq!(classify_day(&ctx, date(2024, 4, 1)), DayStatus::new(OpStatus::FullService));
/// assert_eq!(classify_day(&ctx, date(2024, 4, 6)), DayStatus::new(OpStatus::Closed));
/// assert_eq!(classify_day(&ctx, date(2024, 4, 29)), DayStatus::holiday("Showa Day"));
/// assert_eq!(classify_day(&ctx, date(2024, 12, 30)), DayStatus::holiday("Year-end holiday"));
/// ```
pub fn classify_day<H: HolidayCalendar>(ctx: &Context<H>, date: NaiveDate) -> DayStatus {
    let labels = ctx.language.labels();

    if let Some(name) = ctx.holidays.holiday_name(date, ctx.language) {
        return DayStatus::holiday(name);
    }

    match (date.month(), date.day(), date.weekday()) {
        (1, 1..=3, _) => DayStatus::holiday(labels.new_year_holiday),
        (12, 29..=31, _) => DayStatus::holiday(labels.year_end_holiday),
        (_, _, Weekday::Sat | Weekday::Sun) => DayStatus::new(OpStatus::Closed),
        _ => DayStatus::new(OpStatus::FullService),
    }
}

/// Build the default schedule of a fiscal year, with one entry for each of its days.
pub fn schedule_template<H: HolidayCalendar>(
    ctx: &Context<H>,
    fiscal_year: FiscalYear,
) -> Schedule {
    #[cfg(feature = "log")]
    log::debug!(
        "Classifying days from {} to {}",
        fiscal_year.first_day(),
        fiscal_year.last_day(),
    );

    fiscal_year
        .days()
        .map(|date| (date, classify_day(ctx, date)))
        .collect()
}
