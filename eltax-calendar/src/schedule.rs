use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::status::{DayStatus, OpStatus};

/// Format of keys in schedule files.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Operating status of the filing system, day by day.
///
/// The schedule is never mutated once loaded: a day that has no entry is reported as absent
/// rather than receiving a default status.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, DayStatus>,
}

impl Schedule {
    /// Create a schedule without any entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schedule from its JSON representation, a map from `YYYY-MM-DD` to day status.
    ///
    /// Keys that are not valid dates are ignored.
    ///
    /// ```
    /// use eltax_calendar::{OpStatus, Schedule};
    ///
    /// let schedule = Schedule::from_json(r#"{
    ///     "2024-04-28": { "op": "closed" },
    ///     "2024-04-29": { "op": "closed", "holiday": "Showa Day" },
    ///     "2024-04-30": { "op": "○" },
    ///     "someday": { "op": "closed" }
    /// }"#).unwrap();
    ///
    /// assert_eq!(schedule.len(), 3);
    /// assert_eq!(schedule.lookup("2024-04-29").unwrap().holiday_name(), Some("Showa Day"));
    /// assert_eq!(schedule.lookup("2024-04-30").unwrap().op, OpStatus::LimitedService);
    /// assert!(schedule.lookup("someday").is_none());
    /// ```
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: BTreeMap<String, DayStatus> = serde_json::from_str(raw)?;

        let days = entries
            .into_iter()
            .filter_map(|(key, status)| match parse_key(&key) {
                Some(date) => Some((date, status)),
                None => {
                    #[cfg(feature = "log")]
                    log::warn!("Ignoring schedule entry with invalid date `{key}`");
                    None
                }
            })
            .collect();

        Ok(Self { days })
    }

    /// Load a schedule from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

        let schedule = Self::from_json(&raw)?;

        #[cfg(feature = "log")]
        log::debug!("Loaded {} days from {}", schedule.len(), path.display());

        Ok(schedule)
    }

    /// Set the status of a day, returning the status it replaces.
    pub fn insert(&mut self, date: NaiveDate, status: DayStatus) -> Option<DayStatus> {
        self.days.insert(date, status)
    }

    /// Get the status of a day, if it is covered by this schedule.
    pub fn get(&self, date: NaiveDate) -> Option<&DayStatus> {
        self.days.get(&date)
    }

    /// Get the status of a day from a raw key, only its first 10 characters are considered.
    /// Malformed keys are reported as absent.
    ///
    /// ```
    /// use eltax_calendar::{DayStatus, OpStatus, Schedule};
    /// use chrono::NaiveDate;
    ///
    /// let mut schedule = Schedule::new();
    /// let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    /// schedule.insert(date, DayStatus::new(OpStatus::FullService));
    ///
    /// assert!(schedule.lookup("2024-04-01").is_some());
    /// assert!(schedule.lookup("2024-04-01T09:00:00").is_some());
    /// assert!(schedule.lookup("2024-04-02").is_none());
    /// assert!(schedule.lookup("04/01/2024").is_none());
    /// ```
    pub fn lookup(&self, key: &str) -> Option<&DayStatus> {
        self.get(parse_key(key)?)
    }

    /// Operating status of a day, if it is covered by this schedule.
    pub fn op(&self, date: NaiveDate) -> Option<OpStatus> {
        self.get(date).map(|status| status.op)
    }

    /// Holiday name of a day, if any.
    pub fn holiday(&self, date: NaiveDate) -> Option<&str> {
        self.get(date)?.holiday_name()
    }

    /// Number of days covered by this schedule.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over covered days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DayStatus)> + '_ {
        self.days.iter().map(|(date, status)| (*date, status))
    }

    /// Write the schedule as a JSON object with one day per line and an empty line between
    /// months, which keeps the file convenient to edit by hand.
    ///
    /// ```
    /// use eltax_calendar::{DayStatus, OpStatus, Schedule};
    /// use chrono::NaiveDate;
    ///
    /// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ///
    /// let schedule: Schedule = [
    ///     (date(2024, 4, 30), DayStatus::new(OpStatus::FullService)),
    ///     (date(2024, 5, 1), DayStatus::holiday("Some \"day\"")),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let mut buf = Vec::new();
    /// schedule.write_json(&mut buf).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(buf).unwrap(),
    ///     concat!(
    ///         "{\n",
    ///         "\t\"2024-04-30\": { \"op\":\"full-service\" },\n",
    ///         "\n",
    ///         "\t\"2024-05-01\": { \"op\":\"closed\", \"holiday\":\"Some \\\"day\\\"\" }\n",
    ///         "}\n",
    ///     ),
    /// );
    /// ```
    pub fn write_json(&self, mut writer: impl io::Write) -> io::Result<()> {
        writeln!(writer, "{{")?;
        let mut days = self.days.iter().peekable();

        while let Some((date, status)) = days.next() {
            write!(writer, "\t\"{date}\": {{ \"op\":\"{}\"", status.op.code())?;

            if let Some(holiday) = &status.holiday {
                write!(writer, ", \"holiday\":{}", serde_json::to_string(holiday)?)?;
            }

            write!(writer, " }}")?;

            match days.peek() {
                None => writeln!(writer)?,
                Some((next, _)) => {
                    writeln!(writer, ",")?;

                    if next.month() != date.month() {
                        writeln!(writer)?;
                    }
                }
            }
        }

        writeln!(writer, "}}")
    }
}

impl FromIterator<(NaiveDate, DayStatus)> for Schedule {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, DayStatus)>>(iter: T) -> Self {
        Self { days: iter.into_iter().collect() }
    }
}

fn parse_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.get(..10)?, DATE_FORMAT).ok()
}
