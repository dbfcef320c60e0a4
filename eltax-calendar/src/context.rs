use std::sync::Arc;

use crate::holidays::{HolidayCalendar, JapaneseHolidays};
use crate::localization::Language;
use crate::schedule::Schedule;

/// Everything a generation step reads: the holiday source, the output language and the
/// operating schedule loaded from disk.
///
/// A context is immutable once built, the schedule is wrapped in an `Arc` so that it is cheap
/// to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context<H: HolidayCalendar = JapaneseHolidays> {
    pub holidays: H,
    pub language: Language,
    pub schedule: Arc<Schedule>,
}

impl<H: HolidayCalendar> Context<H> {
    /// Attach a new holidays source to this context.
    pub fn with_holidays<H2: HolidayCalendar>(self, holidays: H2) -> Context<H2> {
        Context { holidays, language: self.language, schedule: self.schedule }
    }

    /// Attach a new output language to this context.
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    /// Attach a new operating schedule to this context.
    pub fn with_schedule(self, schedule: impl Into<Arc<Schedule>>) -> Self {
        Self { schedule: schedule.into(), ..self }
    }
}

impl Default for Context<JapaneseHolidays> {
    fn default() -> Self {
        Self {
            holidays: JapaneseHolidays,
            language: Language::default(),
            schedule: Default::default(),
        }
    }
}
