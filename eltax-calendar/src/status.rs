use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// OpStatus

/// Operating status of the filing system for a day.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpStatus {
    /// Available from 0:00 to 24:00.
    #[serde(alias = "◎")]
    FullService,
    /// Available from 8:30 to 24:00.
    #[serde(alias = "○")]
    LimitedService,
    #[serde(alias = "×")]
    Closed,
}

impl OpStatus {
    /// Code used for this status in schedule files.
    ///
    /// ```
    /// use eltax_calendar::OpStatus;
    ///
    /// assert_eq!(OpStatus::LimitedService.code(), "limited-service");
    /// ```
    pub const fn code(self) -> &'static str {
        match self {
            Self::FullService => "full-service",
            Self::LimitedService => "limited-service",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for OpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// DayStatus

/// Status of a single day: operating status and, for closed days, the name of the holiday.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct DayStatus {
    pub op: OpStatus,
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub holiday: Option<String>,
}

impl DayStatus {
    /// A day without holiday name.
    pub fn new(op: OpStatus) -> Self {
        Self { op, holiday: None }
    }

    /// A closed day named after a holiday.
    pub fn holiday(name: impl Into<String>) -> Self {
        Self { op: OpStatus::Closed, holiday: Some(name.into()) }
    }

    /// Name of the holiday, if any.
    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday.as_deref()
    }
}

/// Hand-edited files may leave an empty name for plain weekends.
fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|name| !name.is_empty()))
}
