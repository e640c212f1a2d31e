use crate::constants::*;
use crate::error::Result;
use crate::table::Table;
use crate::types::{
    AdAlgoRow, DependencyRow, FlowRow, LocalAppRow, OwnershipRow, ScreenTimeRow,
};

/// Typed view over a loaded source table, one value per row
pub trait FromTable: Sized {
    fn from_table(table: &Table) -> Result<Vec<Self>>;
}

impl FromTable for DependencyRow {
    fn from_table(table: &Table) -> Result<Vec<Self>> {
        let countries = table.text_column(COUNTRY)?;
        let values = table.float_column(YOUTH_DEPENDENCY_INDEX_PERCENT)?;
        Ok(countries
            .into_iter()
            .zip(values)
            .map(|(country, youth_dependency_index_percent)| DependencyRow {
                country,
                youth_dependency_index_percent,
            })
            .collect())
    }
}

impl FromTable for OwnershipRow {
    fn from_table(table: &Table) -> Result<Vec<Self>> {
        super::ownership::ownership_rows(table)
    }
}

impl FromTable for FlowRow {
    fn from_table(table: &Table) -> Result<Vec<Self>> {
        let origins = table.text_column(ORIGIN_COUNTRY)?;
        let destinations = table.text_column(DESTINATION_COUNTRY)?;
        let platforms = table.text_column(PLATFORM)?;
        let companies = table.text_column(COMPANY)?;
        Ok(origins
            .into_iter()
            .zip(destinations)
            .zip(platforms)
            .zip(companies)
            .map(
                |(((origin_country, destination_country), platform), company)| FlowRow {
                    origin_country,
                    destination_country,
                    platform,
                    company,
                },
            )
            .collect())
    }
}

impl FromTable for LocalAppRow {
    fn from_table(table: &Table) -> Result<Vec<Self>> {
        let apps = table.text_column(APP_NAME)?;
        let countries = table.text_column(COUNTRY)?;
        let adoption = table.float_column(YOUTH_ADOPTION_PERCENT)?;
        Ok(apps
            .into_iter()
            .zip(countries)
            .zip(adoption)
            .map(|((app_name, country), youth_adoption_percent)| LocalAppRow {
                app_name,
                country,
                youth_adoption_percent,
            })
            .collect())
    }
}

impl FromTable for ScreenTimeRow {
    fn from_table(table: &Table) -> Result<Vec<Self>> {
        let countries = table.text_column(COUNTRY)?;
        let minutes = table.float_column(AVG_SCREEN_TIME_MIN)?;
        Ok(countries
            .into_iter()
            .zip(minutes)
            .map(|(country, avg_screen_time_min)| ScreenTimeRow {
                country,
                avg_screen_time_min,
            })
            .collect())
    }
}

impl FromTable for AdAlgoRow {
    fn from_table(table: &Table) -> Result<Vec<Self>> {
        let countries = table.text_column(COUNTRY)?;
        let scores = table.float_column(AD_ALGO_SCORE)?;
        Ok(countries
            .into_iter()
            .zip(scores)
            .map(|(country, ad_algo_score)| AdAlgoRow {
                country,
                ad_algo_score,
            })
            .collect())
    }
}
