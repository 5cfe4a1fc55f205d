//! Derived view over the champion collection.
//!
//! Pure computation from the raw record set to the view model rendered by the
//! client: the most recent champion, the distinct years available as a filter
//! axis, and the year-filtered, year-grouped history. Re-evaluated wholesale
//! whenever a new snapshot arrives.

use std::fmt;

use chrono::Datelike;

use crate::model::champion::ChampionDto;

/// Secondary filter axis over the history list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(i32),
}

impl YearFilter {
    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(selected) => *selected == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("All"),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

/// View model consumed by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChampionView {
    /// Most recent champion, absent when the collection is empty.
    pub latest: Option<ChampionDto>,
    /// "All" plus the distinct years across every record, newest first.
    pub available_years: Vec<YearFilter>,
    /// Everything except the latest record, filtered to the selected year.
    pub history: Vec<ChampionDto>,
    /// History partitioned by year, keys descending.
    pub grouped: Vec<(i32, Vec<ChampionDto>)>,
}

impl Default for YearFilter {
    fn default() -> Self {
        YearFilter::All
    }
}

/// Builds the view model for a snapshot of the collection.
///
/// Records are ordered by date descending; records sharing a date fall back to
/// ascending id, so the view is deterministic regardless of snapshot order.
pub fn build_view(records: &[ChampionDto], filter: YearFilter) -> ChampionView {
    let mut sorted: Vec<ChampionDto> = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));

    // Dates are descending, so years come out descending and dedup suffices.
    let mut years: Vec<i32> = sorted.iter().map(|record| record.date.year()).collect();
    years.dedup();

    let mut available_years = vec![YearFilter::All];
    available_years.extend(years.into_iter().map(YearFilter::Year));

    let mut rest = sorted.into_iter();
    let latest = rest.next();

    let history: Vec<ChampionDto> = rest
        .filter(|record| filter.matches(record.date.year()))
        .collect();

    let mut grouped: Vec<(i32, Vec<ChampionDto>)> = Vec::new();
    for record in &history {
        let year = record.date.year();
        match grouped.last_mut() {
            Some((key, group)) if *key == year => group.push(record.clone()),
            _ => grouped.push((year, vec![record.clone()])),
        }
    }

    ChampionView {
        latest,
        available_years,
        history,
        grouped,
    }
}
