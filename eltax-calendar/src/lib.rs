#![doc = include_str!("../../README.md")]

pub mod classify;
pub mod context;
pub mod era;
pub mod error;
pub mod fiscal_year;
pub mod holidays;
pub mod layout;
pub mod localization;
pub mod logging;
pub mod render;
pub mod schedule;
pub mod status;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::classify::{classify_day, schedule_template};
pub use crate::context::Context;
pub use crate::error::{Error, Result};
pub use crate::fiscal_year::FiscalYear;
pub use crate::holidays::{HolidayCalendar, JapaneseHolidays};
pub use crate::localization::Language;
pub use crate::render::{render_page, write_page};
pub use crate::schedule::Schedule;
pub use crate::status::{DayStatus, OpStatus};
