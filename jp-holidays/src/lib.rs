#![doc = include_str!("../README.md")]

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

/// First year for which holidays are computed.
pub const MIN_YEAR: i32 = 1949;

/// Last year for which holidays are computed, bounded by the equinox approximation.
pub const MAX_YEAR: i32 = 2150;

/// Substitute holidays apply to holidays falling on a Sunday from this day on.
const SUBSTITUTE_SINCE: (i32, u32, u32) = (1973, 4, 12);

/// Citizens' holidays apply from this year on.
const CITIZENS_HOLIDAY_SINCE: i32 = 1988;

/// From this year on, a substitute holiday moves to the next non-holiday and citizens' holidays
/// may fall on a Sunday.
const REVISION_2007: i32 = 2007;

/// Holidays enacted for a single imperial ceremony.
const IMPERIAL_EVENTS: [(i32, u32, u32, Holiday); 6] = [
    (1959, 4, 10, Holiday::CrownPrinceAkihitoWedding),
    (1989, 2, 24, Holiday::ShowaFuneral),
    (1990, 11, 12, Holiday::EnthronementCeremony),
    (1993, 6, 9, Holiday::CrownPrinceNaruhitoWedding),
    (2019, 5, 1, Holiday::EnthronementDay),
    (2019, 10, 22, Holiday::EnthronementCeremony),
];

/// A national holiday of Japan.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Holiday {
    NewYearsDay,
    ComingOfAgeDay,
    NationalFoundationDay,
    EmperorsBirthday,
    VernalEquinoxDay,
    GreeneryDay,
    ShowaDay,
    ConstitutionMemorialDay,
    ChildrensDay,
    MarineDay,
    MountainDay,
    RespectForTheAgedDay,
    AutumnalEquinoxDay,
    HealthAndSportsDay,
    SportsDay,
    CultureDay,
    LaborThanksgivingDay,
    /// 振替休日: replaces a holiday that fell on a Sunday.
    SubstituteHoliday,
    /// 国民の休日: a day sandwiched between two holidays.
    CitizensHoliday,
    CrownPrinceAkihitoWedding,
    ShowaFuneral,
    EnthronementCeremony,
    CrownPrinceNaruhitoWedding,
    EnthronementDay,
}

impl Holiday {
    /// Official Japanese name of the holiday.
    ///
    /// ```
    /// use jp_holidays::Holiday;
    ///
    /// assert_eq!(Holiday::NewYearsDay.name(), "元日");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewYearsDay => "元日",
            Self::ComingOfAgeDay => "成人の日",
            Self::NationalFoundationDay => "建国記念の日",
            Self::EmperorsBirthday => "天皇誕生日",
            Self::VernalEquinoxDay => "春分の日",
            Self::GreeneryDay => "みどりの日",
            Self::ShowaDay => "昭和の日",
            Self::ConstitutionMemorialDay => "憲法記念日",
            Self::ChildrensDay => "こどもの日",
            Self::MarineDay => "海の日",
            Self::MountainDay => "山の日",
            Self::RespectForTheAgedDay => "敬老の日",
            Self::AutumnalEquinoxDay => "秋分の日",
            Self::HealthAndSportsDay => "体育の日",
            Self::SportsDay => "スポーツの日",
            Self::CultureDay => "文化の日",
            Self::LaborThanksgivingDay => "勤労感謝の日",
            Self::SubstituteHoliday => "振替休日",
            Self::CitizensHoliday => "国民の休日",
            Self::CrownPrinceAkihitoWedding => "皇太子明仁親王の結婚の儀",
            Self::ShowaFuneral => "昭和天皇の大喪の礼",
            Self::EnthronementCeremony => "即位礼正殿の儀",
            Self::CrownPrinceNaruhitoWedding => "皇太子徳仁親王の結婚の儀",
            Self::EnthronementDay => "天皇の即位の日",
        }
    }

    /// Usual English name of the holiday.
    ///
    /// ```
    /// use jp_holidays::Holiday;
    ///
    /// assert_eq!(Holiday::MarineDay.name_en(), "Marine Day");
    /// ```
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::NewYearsDay => "New Year's Day",
            Self::ComingOfAgeDay => "Coming of Age Day",
            Self::NationalFoundationDay => "National Foundation Day",
            Self::EmperorsBirthday => "The Emperor's Birthday",
            Self::VernalEquinoxDay => "Vernal Equinox Day",
            Self::GreeneryDay => "Greenery Day",
            Self::ShowaDay => "Showa Day",
            Self::ConstitutionMemorialDay => "Constitution Memorial Day",
            Self::ChildrensDay => "Children's Day",
            Self::MarineDay => "Marine Day",
            Self::MountainDay => "Mountain Day",
            Self::RespectForTheAgedDay => "Respect for the Aged Day",
            Self::AutumnalEquinoxDay => "Autumnal Equinox Day",
            Self::HealthAndSportsDay => "Health and Sports Day",
            Self::SportsDay => "Sports Day",
            Self::CultureDay => "Culture Day",
            Self::LaborThanksgivingDay => "Labor Thanksgiving Day",
            Self::SubstituteHoliday => "Substitute Holiday",
            Self::CitizensHoliday => "Citizens' Holiday",
            Self::CrownPrinceAkihitoWedding => "Wedding of Crown Prince Akihito",
            Self::ShowaFuneral => "Funeral of Emperor Showa",
            Self::EnthronementCeremony => "Enthronement Ceremony",
            Self::CrownPrinceNaruhitoWedding => "Wedding of Crown Prince Naruhito",
            Self::EnthronementDay => "Enthronement Day",
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Get the holiday falling on a given day, if any.
///
/// ```
/// use chrono::NaiveDate;
/// use jp_holidays::{holiday, Holiday};
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(holiday(date(2024, 1, 8)), Some(Holiday::ComingOfAgeDay));
/// assert_eq!(holiday(date(2024, 5, 6)), Some(Holiday::SubstituteHoliday));
/// assert_eq!(holiday(date(2024, 5, 7)), None);
/// ```
pub fn holiday(date: NaiveDate) -> Option<Holiday> {
    holidays(date.year())
        .into_iter()
        .find(|(day, _)| *day == date)
        .map(|(_, holiday)| holiday)
}

/// List all holidays of a year, sorted by date.
///
/// Years outside of `[MIN_YEAR, MAX_YEAR]` have no holidays.
///
/// ```
/// use jp_holidays::holidays;
///
/// assert_eq!(holidays(2024).len(), 21);
/// assert!(holidays(1900).is_empty());
/// ```
pub fn holidays(year: i32) -> Vec<(NaiveDate, Holiday)> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Vec::new();
    }

    let mut days = national_holidays(year);
    days.sort_unstable();

    let substitutes = substitute_holidays(&days);
    let citizens = citizens_holidays(&days, &substitutes);

    days.extend(substitutes);
    days.extend(citizens);
    days.sort_unstable();
    days
}

/// Holidays defined by the law itself, before substitutions.
fn national_holidays(year: i32) -> Vec<(NaiveDate, Holiday)> {
    use Holiday::*;

    let ymd = |month, day| NaiveDate::from_ymd_opt(year, month, day);
    let nth_monday = |month, n| NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n);

    let rules = [
        (ymd(1, 1), NewYearsDay),
        (
            if year < 2000 { ymd(1, 15) } else { nth_monday(1, 2) },
            ComingOfAgeDay,
        ),
        (
            if year >= 1967 { ymd(2, 11) } else { None },
            NationalFoundationDay,
        ),
        (
            match year {
                ..=1988 => ymd(4, 29),
                1989..=2018 => ymd(12, 23),
                2019 => None,
                _ => ymd(2, 23),
            },
            EmperorsBirthday,
        ),
        (vernal_equinox(year), VernalEquinoxDay),
        (
            match year {
                ..=1988 => None,
                1989..=2006 => ymd(4, 29),
                _ => ymd(5, 4),
            },
            GreeneryDay,
        ),
        (if year >= 2007 { ymd(4, 29) } else { None }, ShowaDay),
        (ymd(5, 3), ConstitutionMemorialDay),
        (ymd(5, 5), ChildrensDay),
        (
            match year {
                ..=1995 => None,
                1996..=2002 => ymd(7, 20),
                2020 => ymd(7, 23),
                2021 => ymd(7, 22),
                _ => nth_monday(7, 3),
            },
            MarineDay,
        ),
        (
            match year {
                ..=2015 => None,
                2020 => ymd(8, 10),
                2021 => ymd(8, 8),
                _ => ymd(8, 11),
            },
            MountainDay,
        ),
        (
            match year {
                ..=1965 => None,
                1966..=2002 => ymd(9, 15),
                _ => nth_monday(9, 3),
            },
            RespectForTheAgedDay,
        ),
        (autumnal_equinox(year), AutumnalEquinoxDay),
        (
            match year {
                ..=1965 => None,
                1966..=1999 => ymd(10, 10),
                2000..=2019 => nth_monday(10, 2),
                _ => None,
            },
            HealthAndSportsDay,
        ),
        (
            match year {
                ..=2019 => None,
                2020 => ymd(7, 24),
                2021 => ymd(7, 23),
                _ => nth_monday(10, 2),
            },
            SportsDay,
        ),
        (ymd(11, 3), CultureDay),
        (ymd(11, 23), LaborThanksgivingDay),
    ];

    let imperial_events = IMPERIAL_EVENTS
        .iter()
        .filter(|(event_year, ..)| *event_year == year)
        .map(|&(_, month, day, holiday)| (ymd(month, day), holiday));

    rules
        .into_iter()
        .chain(imperial_events)
        .filter_map(|(date, holiday)| Some((date?, holiday)))
        .collect()
}

/// A holiday falling on a Sunday is moved to the next day, or to the next day that is not a
/// holiday since 2007.
fn substitute_holidays(days: &[(NaiveDate, Holiday)]) -> Vec<(NaiveDate, Holiday)> {
    let is_holiday = |date: NaiveDate| days.iter().any(|(day, _)| *day == date);

    days.iter()
        .map(|(date, _)| *date)
        .filter(|date| date.weekday() == Weekday::Sun)
        .filter(|date| (date.year(), date.month(), date.day()) >= SUBSTITUTE_SINCE)
        .filter_map(|date| {
            let mut next = date.succ_opt()?;

            if date.year() >= REVISION_2007 {
                while is_holiday(next) {
                    next = next.succ_opt()?;
                }
            }

            (!is_holiday(next)).then_some((next, Holiday::SubstituteHoliday))
        })
        .collect()
}

/// A day preceded and followed by a holiday is a holiday as well. Until 2006 this excludes
/// Sundays and substitute holidays.
fn citizens_holidays(
    days: &[(NaiveDate, Holiday)],
    substitutes: &[(NaiveDate, Holiday)],
) -> Vec<(NaiveDate, Holiday)> {
    days.windows(2)
        .filter_map(|pair| {
            let (before, _) = pair[0];
            let (after, _) = pair[1];

            if before.year() < CITIZENS_HOLIDAY_SINCE || (after - before).num_days() != 2 {
                return None;
            }

            let date = before.succ_opt()?;

            if substitutes.iter().any(|(day, _)| *day == date)
                || (date.year() < REVISION_2007 && date.weekday() == Weekday::Sun)
            {
                return None;
            }

            Some((date, Holiday::CitizensHoliday))
        })
        .collect()
}

/// Approximate day of the vernal equinox in Japan Standard Time.
fn vernal_equinox(year: i32) -> Option<NaiveDate> {
    let day = equinox_day(year, [20.8357, 20.8431, 21.8510])?;
    NaiveDate::from_ymd_opt(year, 3, day)
}

/// Approximate day of the autumnal equinox in Japan Standard Time.
fn autumnal_equinox(year: i32) -> Option<NaiveDate> {
    let day = equinox_day(year, [23.2588, 23.2488, 24.2488])?;
    NaiveDate::from_ymd_opt(year, 9, day)
}

/// Evaluate the usual approximation of equinox days, given the base constant for the periods
/// 1900-1979, 1980-2099 and 2100-2150.
///
/// See https://ja.wikipedia.org/wiki/春分の日
fn equinox_day(year: i32, [base_1900, base_1980, base_2100]: [f64; 3]) -> Option<u32> {
    let (base, leap_days) = match year {
        1900..=1979 => (base_1900, (year - 1983) / 4),
        1980..=2099 => (base_1980, (year - 1980) / 4),
        2100..=2150 => (base_2100, (year - 1980) / 4),
        _ => return None,
    };

    let drift = 0.242194 * f64::from(year - 1980);
    let day = (base + drift).floor() as i32 - leap_days;
    u32::try_from(day).ok()
}
