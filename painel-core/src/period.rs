//! Inclusive date window used by every indicator query.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::PainelError;

/// Wire format of `data_inicio` / `data_fim`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closed interval `[start, end]`; `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PainelError> {
        if start > end {
            return Err(PainelError::InvertedRange);
        }
        Ok(Self { start, end })
    }

    /// Validate the raw values of the two date inputs of the filter panel.
    pub fn parse_inputs(start: &str, end: &str) -> Result<Self, PainelError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(PainelError::MissingDate);
        }
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// First to last day of the calendar month before `today`.
    pub fn previous_month(today: NaiveDate) -> Self {
        let first_current = today - Duration::days(i64::from(today.day0()));
        let end = first_current - Duration::days(1);
        let start = end - Duration::days(i64::from(end.day0()));
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, PainelError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| PainelError::InvalidDate(raw.to_string()))
}
