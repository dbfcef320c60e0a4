use std::fmt;
use std::str::FromStr;

use jp_holidays::Holiday;

use crate::era::EraYear;
use crate::error::UnknownLanguage;
use crate::fiscal_year::FiscalYear;

/// Language of generated holiday names and page labels.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

/// Static texts of a calendar page.
#[derive(Debug)]
pub struct Labels {
    /// Value of the `lang` attribute of the page.
    pub html_lang: &'static str,
    pub calendar_name: &'static str,
    pub legend: &'static str,
    pub full_service_hours: &'static str,
    pub limited_service_hours: &'static str,
    /// Text of closed days that are not holidays.
    pub closed: &'static str,
    /// Weekday headers, starting on Monday.
    pub weekdays: [&'static str; 7],
    pub new_year_holiday: &'static str,
    pub year_end_holiday: &'static str,
}

const LABELS_EN: Labels = Labels {
    html_lang: "en",
    calendar_name: "eLTAX operating calendar",
    legend: "Filing system hours : ",
    full_service_hours: "0:00 - 24:00",
    limited_service_hours: "8:30 - 24:00",
    closed: "Closed",
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    new_year_holiday: "New Year holiday",
    year_end_holiday: "Year-end holiday",
};

const LABELS_JA: Labels = Labels {
    html_lang: "ja-JP",
    calendar_name: "eLTAX運転日カレンダー",
    legend: "電子申告システム運転時間 : ",
    full_service_hours: "0:00～24:00",
    limited_service_hours: "8:30～24:00",
    closed: "休止中",
    weekdays: ["月", "火", "水", "木", "金", "土", "日"],
    new_year_holiday: "年始休",
    year_end_holiday: "年末休",
};

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::English => &LABELS_EN,
            Self::Japanese => &LABELS_JA,
        }
    }

    pub fn holiday_name(self, holiday: Holiday) -> &'static str {
        match self {
            Self::English => holiday.name_en(),
            Self::Japanese => holiday.name(),
        }
    }

    /// Label of a month in the leftmost column of the calendar.
    ///
    /// ```
    /// use eltax_calendar::Language;
    ///
    /// assert_eq!(Language::Japanese.month_label(4), "4月");
    /// assert_eq!(Language::English.month_label(4), "Apr");
    /// ```
    pub fn month_label(self, month: u32) -> String {
        match self {
            Self::English => MONTHS_EN
                .get(month.wrapping_sub(1) as usize)
                .map(|name| name.to_string())
                .unwrap_or_else(|| month.to_string()),
            Self::Japanese => format!("{month}月"),
        }
    }

    /// Name of a fiscal year, including its era when it has one.
    ///
    /// ```
    /// use eltax_calendar::{FiscalYear, Language};
    ///
    /// let fy = FiscalYear::new(2024).unwrap();
    /// assert_eq!(Language::Japanese.fiscal_year_label(fy), "2024(R6)年度");
    /// assert_eq!(Language::English.fiscal_year_label(fy), "FY2024 (R6)");
    ///
    /// let fy = FiscalYear::new(1850).unwrap();
    /// assert_eq!(Language::Japanese.fiscal_year_label(fy), "1850年度");
    /// ```
    pub fn fiscal_year_label(self, fiscal_year: FiscalYear) -> String {
        let era = EraYear::from_year(fiscal_year.year());

        match (self, era) {
            (Self::English, Some(era)) => format!("FY{fiscal_year} ({era})"),
            (Self::English, None) => format!("FY{fiscal_year}"),
            (Self::Japanese, Some(era)) => format!("{fiscal_year}({era})年度"),
            (Self::Japanese, None) => format!("{fiscal_year}年度"),
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ja" | "jp" | "japanese" => Ok(Self::Japanese),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Japanese => write!(f, "ja"),
        }
    }
}
