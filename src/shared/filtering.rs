//! Per-screen record filtering.
//!
//! A screen's filter configuration is a set of options, each of which is
//! either the `all` sentinel or a concrete value. A record is visible when
//! every active option admits it. Results keep the store's order.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::shared::constants::FILTER_ALL;

/// One option of a filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue<T> {
    All,
    Only(T),
}

impl<T> Default for FilterValue<T> {
    fn default() -> Self {
        FilterValue::All
    }
}

impl<T: PartialEq> FilterValue<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(expected) => expected == value,
        }
    }
}

impl<T> FilterValue<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }
}

impl<T> FilterValue<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Parse a raw query value.
    ///
    /// Empty input and `all` impose no constraint. So do values outside the
    /// known set.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(FILTER_ALL) {
            return FilterValue::All;
        }

        match trimmed.parse::<T>() {
            Ok(value) => FilterValue::Only(value),
            Err(e) => {
                tracing::debug!(value = %trimmed, error = %e, "Ignoring unrecognized filter value");
                FilterValue::All
            }
        }
    }
}

impl<'de, T> Deserialize<'de> for FilterValue<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| Self::parse(&r)).unwrap_or_default())
    }
}

/// Normalized free-text search term (trimmed, lowercased)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchText(String);

impl SearchText {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the term is a case-insensitive substring of any field.
    /// An empty term matches everything.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

impl<'de> Deserialize<'de> for SearchText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| Self::new(&r)).unwrap_or_default())
    }
}

/// Records that can be found by free-text search
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// A screen's filter configuration
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Select the visible subset of `records`, preserving their order
pub fn apply_filter<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: RecordFilter<T>,
{
    records.iter().filter(|record| filter.matches(record)).collect()
}
