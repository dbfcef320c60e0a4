//! Japanese era labels (和暦) used in page titles.

use std::fmt;

/// Supported eras, by first year.
const ERAS: [Era; 5] = [Era::Meiji, Era::Taisho, Era::Showa, Era::Heisei, Era::Reiwa];

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

impl Era {
    /// Gregorian year during which the era started.
    pub const fn first_year(self) -> i32 {
        match self {
            Self::Meiji => 1868,
            Self::Taisho => 1912,
            Self::Showa => 1926,
            Self::Heisei => 1989,
            Self::Reiwa => 2019,
        }
    }

    /// One-letter abbreviation, as in JIS X 0301.
    pub const fn abbreviation(self) -> char {
        match self {
            Self::Meiji => 'M',
            Self::Taisho => 'T',
            Self::Showa => 'S',
            Self::Heisei => 'H',
            Self::Reiwa => 'R',
        }
    }
}

/// A year counted in a Japanese era.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EraYear {
    pub era: Era,
    /// Year in the era, starting at 1.
    pub year: i32,
}

impl EraYear {
    /// Convert a Gregorian year, the year during which an era starts is counted as its first
    /// year. Years before the Meiji era have no label.
    ///
    /// ```
    /// use eltax_calendar::era::{Era, EraYear};
    ///
    /// assert_eq!(EraYear::from_year(2024).unwrap().to_string(), "R6");
    /// assert_eq!(EraYear::from_year(2019).unwrap().to_string(), "R1");
    /// assert_eq!(EraYear::from_year(2018).unwrap().to_string(), "H30");
    /// assert_eq!(EraYear::from_year(1867), None);
    /// ```
    pub fn from_year(year: i32) -> Option<Self> {
        let era = ERAS
            .into_iter()
            .rev()
            .find(|era| era.first_year() <= year)?;

        Some(Self { era, year: year - era.first_year() + 1 })
    }
}

impl fmt::Display for EraYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.era.abbreviation(), self.year)
    }
}
