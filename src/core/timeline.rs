use std::fmt;

use time::{Date, format_description};

use crate::core::model::ProjectDetails;
use crate::error::Error;

const LABEL_FORMAT: &str = "[month repr:short] [year]";

/// A calendar month as written on project cards, e.g. `Jan 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthYear(Date);

impl MonthYear {
    pub fn parse(label: &str) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidDate {
            label: label.to_string(),
            reason,
        };
        let pattern = format!("[day] {LABEL_FORMAT}");
        let format = format_description::parse_borrowed::<2>(&pattern)
            .map_err(|e| invalid(e.to_string()))?;
        Date::parse(&format!("01 {}", label.trim()), &format)
            .map(MonthYear)
            .map_err(|e| invalid(e.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    fn index(&self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month()) - 1
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format =
            format_description::parse_borrowed::<2>(LABEL_FORMAT).map_err(|_| fmt::Error)?;
        let label = self.0.format(&format).map_err(|_| fmt::Error)?;
        f.write_str(&label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub start: MonthYear,
    pub end: MonthYear,
}

impl Timeline {
    pub fn parse(start: &str, end: &str) -> Result<Self, Error> {
        Ok(Self {
            start: MonthYear::parse(start)?,
            end: MonthYear::parse(end)?,
        })
    }

    /// Reads the timeline off a project, if it has both date labels.
    pub fn from_details(details: &ProjectDetails) -> Option<Result<Self, Error>> {
        let start = details.start_date.as_deref()?;
        let end = details.end_date.as_deref()?;
        Some(Self::parse(start, end))
    }

    /// Number of calendar months covered, counting both ends; zero if `end` precedes `start`.
    pub fn months(&self) -> u32 {
        let span = self.end.index() - self.start.index() + 1;
        u32::try_from(span.max(0)).unwrap_or(0)
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
