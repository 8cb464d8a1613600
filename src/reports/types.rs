//! Type definitions for the report engine.
//!
//! This module defines the core types shared by every report:
//! - [`Table`] - A typed tabular result with named columns
//! - [`Cell`] - A single table value (text, count, percentage, date or null)
//! - [`ReportCategory`] - Report categories for grouping
//! - [`ReportInfo`] / [`ReportResult`] - Report metadata and output

use chrono::NaiveDate;
use compact_str::CompactString;
use serde::Serialize;
use smallvec::SmallVec;

/// Type alias for small column vectors (typically < 8 elements)
pub type ColumnVec = SmallVec<[CompactString; 8]>;

/// Type alias for one table row
pub type RowVec = SmallVec<[Cell; 8]>;

/// A single value in a result table.
///
/// Null cells come from nullable source columns and from guarded divisions
/// (a rate over a zero or missing denominator is null, not an error).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(CompactString),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Null
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{:.4}", x),
            Self::Date(d) => write!(f, "{}", d),
            Self::Null => Ok(())
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<CompactString> for Cell {
    fn from(value: CompactString) -> Self {
        Self::Text(value)
    }
}

impl From<Option<i64>> for Cell {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Null, Self::Int)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Float)
    }
}

/// A tabular report result with named columns.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    /// Ordered column headers
    pub columns: ColumnVec,
    /// Data rows, each aligned with `columns`
    pub rows:    Vec<RowVec>
}

impl Table {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = &'static str>
    {
        Self {
            columns: columns.into_iter().map(CompactString::from).collect(),
            rows:    Vec::new()
        }
    }

    pub fn push_row<I>(&mut self, row: I)
    where
        I: IntoIterator<Item = Cell>
    {
        self.rows.push(row.into_iter().collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Category of a report for grouping and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportCategory {
    /// Death counts and death percentages
    Mortality,
    /// Case counts relative to population
    Infection,
    /// Vaccination rollout figures
    Vaccination,
    /// Whole-dataset totals
    Summary
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mortality => write!(f, "Mortality"),
            Self::Infection => write!(f, "Infection"),
            Self::Vaccination => write!(f, "Vaccination"),
            Self::Summary => write!(f, "Summary")
        }
    }
}

/// Metadata about a report for identification and configuration.
#[derive(Debug, Clone)]
pub struct ReportInfo {
    /// Unique report identifier (e.g., "death-rate")
    pub id:       &'static str,
    /// Human-readable report name
    pub name:     &'static str,
    /// Report category
    pub category: ReportCategory
}

/// One executed report: metadata plus its result table.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    pub id:       &'static str,
    pub name:     &'static str,
    pub category: ReportCategory,
    pub table:    Table
}
