use crate::constants::*;
use crate::error::{DashboardError, Result};
use crate::table::{parse_decimal, Table};
use crate::types::OwnershipRow;
use once_cell::sync::Lazy;
use regex::Regex;

static PERCENTAGE_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[~<>%]").expect("static marker pattern is valid"));

/// Strip the `~`, `<`, `>` and `%` markers and parse what is left.
///
/// `"~45%"` is 45.0, `">90"` is 90.0. Anything that is not a finite number
/// once the markers are gone is an error, never a default.
pub fn parse_percentage(raw: &str) -> Result<f64> {
    let stripped = PERCENTAGE_MARKERS.replace_all(raw, "");
    parse_decimal(&stripped).ok_or_else(|| DashboardError::InvalidPercentage(raw.to_string()))
}

/// Percentages must also land in [0, 100]
fn ownership_value(raw: &str) -> Option<f64> {
    parse_percentage(raw)
        .ok()
        .filter(|v| (0.0..=100.0).contains(v))
}

/// Typed ownership rows with every percentage parsed
pub fn ownership_rows(table: &Table) -> Result<Vec<OwnershipRow>> {
    let parents = table.text_column(PARENT_COMPANY)?;
    let platforms = table.text_column(PLATFORM)?;
    let origins = table.text_column(COUNTRY_OF_ORIGIN)?;
    let percentages = table.map_column(OWNERSHIP_PERCENTAGE, ownership_value)?;

    Ok(parents
        .into_iter()
        .zip(platforms)
        .zip(origins)
        .zip(percentages)
        .map(
            |(((parent_company, platform), country_of_origin), ownership_percentage)| OwnershipRow {
                parent_company,
                platform,
                country_of_origin,
                ownership_percentage,
            },
        )
        .collect())
}
