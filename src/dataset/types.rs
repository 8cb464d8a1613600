use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::NaiveDate;
use compact_str::CompactString;
use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};

/// One reported row of the deaths table: cumulative and incremental counts
/// for a location on a calendar date.
///
/// Aggregate world/region rows carry a null continent and are excluded from
/// per-country breakdowns by [`country_rows`](crate::dataset::country_rows).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeathsRow {
    pub location:     CompactString,
    #[serde(deserialize_with = "de_date")]
    pub date:         NaiveDate,
    #[serde(default, deserialize_with = "de_opt_name")]
    pub continent:    Option<CompactString>,
    #[serde(default, deserialize_with = "de_count")]
    pub population:   Option<i64>,
    #[serde(default, deserialize_with = "de_count")]
    pub total_cases:  Option<i64>,
    #[serde(default, deserialize_with = "de_count")]
    pub new_cases:    Option<i64>,
    #[serde(default, deserialize_with = "de_count")]
    pub total_deaths: Option<i64>,
    #[serde(default, deserialize_with = "de_count")]
    pub new_deaths:   Option<i64>
}

impl DeathsRow {
    /// Create a row with the join key set and every count null
    pub fn new(location: impl Into<CompactString>, date: NaiveDate) -> Self {
        Self {
            location:     location.into(),
            date,
            continent:    None,
            population:   None,
            total_cases:  None,
            new_cases:    None,
            total_deaths: None,
            new_deaths:   None
        }
    }
}

/// One reported row of the vaccinations table, joining 1:1 with
/// [`DeathsRow`] on `(location, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaccinationRow {
    pub location:         CompactString,
    #[serde(deserialize_with = "de_date")]
    pub date:             NaiveDate,
    #[serde(default, deserialize_with = "de_count")]
    pub new_vaccinations: Option<i64>
}

impl VaccinationRow {
    pub fn new(
        location: impl Into<CompactString>,
        date: NaiveDate,
        new_vaccinations: Option<i64>
    ) -> Self {
        Self {
            location: location.into(),
            date,
            new_vaccinations
        }
    }
}

/// Both input tables, loaded once and treated as immutable for the lifetime
/// of a run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub deaths:       Vec<DeathsRow>,
    pub vaccinations: Vec<VaccinationRow>
}

impl Dataset {
    /// Content hash of both tables, used to memoize derived views
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.deaths.hash(&mut hasher);
        self.vaccinations.hash(&mut hasher);
        hasher.finish()
    }

    /// Human-readable summary of what was loaded
    pub fn summary(&self) -> String {
        let mut summary = String::from("Dataset:\n");
        summary.push_str(&table_summary("Deaths", &self.deaths, |r| {
            (&r.location, r.date)
        }));
        summary.push_str(&table_summary("Vaccinations", &self.vaccinations, |r| {
            (&r.location, r.date)
        }));
        summary
    }
}

fn table_summary<T>(
    name: &str,
    rows: &[T],
    key: impl Fn(&T) -> (&CompactString, NaiveDate)
) -> String {
    if rows.is_empty() {
        return format!("  {}: empty\n", name);
    }
    let mut locations = IndexSet::new();
    let mut min_date = key(&rows[0]).1;
    let mut max_date = min_date;
    for row in rows {
        let (location, date) = key(row);
        locations.insert(location.clone());
        min_date = min_date.min(date);
        max_date = max_date.max(date);
    }
    format!(
        "  {}: {} rows, {} locations, {}..{}\n",
        name,
        rows.len(),
        locations.len(),
        min_date,
        max_date
    )
}

/// A reported-data anomaly that does not prevent loading
#[derive(Debug, Clone, Serialize)]
pub struct QualityIssue {
    pub location: CompactString,
    pub date:     NaiveDate,
    pub message:  String
}

fn de_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>
{
    let raw = String::deserialize(deserializer)?;
    let s = raw.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|_| serde::de::Error::custom(format!("invalid date '{}'", s)))
}

fn de_opt_name<'de, D>(deserializer: D) -> Result<Option<CompactString>, D::Error>
where
    D: Deserializer<'de>
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CompactString::from))
}

/// Counts arrive as text: empty/NA/NULL mean absent, integral floats like
/// `"123.0"` are accepted, anything else is rejected at load time.
fn de_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let s = raw.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    if let Ok(n) = s.parse::<i64>() {
        return Ok(Some(n));
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
        _ => Err(serde::de::Error::custom(format!("invalid count '{}'", s)))
    }
}
