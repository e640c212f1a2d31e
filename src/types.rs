use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven CSV sources the dashboard is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    YouthDependencyIndex,
    PlatformOwnership,
    DataFlowPaths,
    LocalAppsUsage,
    DigitalLawsScore,
    ScreenTimeStats,
    AdAlgoExposure,
}

impl SourceId {
    /// Canonical source order: the pipeline loads and summarizes in this order
    pub const ALL: [SourceId; 7] = [
        SourceId::YouthDependencyIndex,
        SourceId::PlatformOwnership,
        SourceId::DataFlowPaths,
        SourceId::LocalAppsUsage,
        SourceId::DigitalLawsScore,
        SourceId::ScreenTimeStats,
        SourceId::AdAlgoExposure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::YouthDependencyIndex => YOUTH_DEPENDENCY_INDEX,
            SourceId::PlatformOwnership => PLATFORM_OWNERSHIP,
            SourceId::DataFlowPaths => DATA_FLOW_PATHS,
            SourceId::LocalAppsUsage => LOCAL_APPS_USAGE,
            SourceId::DigitalLawsScore => DIGITAL_LAWS_SCORE,
            SourceId::ScreenTimeStats => SCREEN_TIME_STATS,
            SourceId::AdAlgoExposure => AD_ALGO_EXPOSURE,
        }
    }

    /// File name under the data directory, e.g. `platform_ownership.csv`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.as_str(), CSV_EXTENSION)
    }

    /// Header names that must be present. The laws table is schema-free.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SourceId::YouthDependencyIndex => &[COUNTRY, YOUTH_DEPENDENCY_INDEX_PERCENT],
            SourceId::PlatformOwnership => &[
                PARENT_COMPANY,
                PLATFORM,
                COUNTRY_OF_ORIGIN,
                OWNERSHIP_PERCENTAGE,
            ],
            SourceId::DataFlowPaths => &[ORIGIN_COUNTRY, DESTINATION_COUNTRY, PLATFORM, COMPANY],
            SourceId::LocalAppsUsage => &[APP_NAME, COUNTRY, YOUTH_ADOPTION_PERCENT],
            SourceId::DigitalLawsScore => &[],
            SourceId::ScreenTimeStats => &[COUNTRY, AVG_SCREEN_TIME_MIN],
            SourceId::AdAlgoExposure => &[COUNTRY, AD_ALGO_SCORE],
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Youth_Dependency_Index_Percent")]
    pub youth_dependency_index_percent: f64,
}

/// Ownership row with the percentage already stripped of its markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipRow {
    #[serde(rename = "Parent_Company")]
    pub parent_company: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Country_of_Origin")]
    pub country_of_origin: String,
    #[serde(rename = "Ownership_Percentage")]
    pub ownership_percentage: f64,
}

/// Flow row as read from the source, before node indices are assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRow {
    #[serde(rename = "Origin_Country")]
    pub origin_country: String,
    #[serde(rename = "Destination_Country")]
    pub destination_country: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Company")]
    pub company: String,
}

/// Flow row annotated with its endpoints in the node list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    #[serde(flatten)]
    pub row: FlowRow,
    pub source_idx: usize,
    pub target_idx: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAppRow {
    #[serde(rename = "App_Name")]
    pub app_name: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Youth_Adoption_Percent")]
    pub youth_adoption_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Avg_Screen_Time_Min")]
    pub avg_screen_time_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdAlgoRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Ad_Algo_Score")]
    pub ad_algo_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Avg_Screen_Time_Min")]
    pub avg_screen_time_min: f64,
    #[serde(rename = "Ad_Algo_Score")]
    pub ad_algo_score: f64,
    #[serde(rename = "Attention_Index")]
    pub attention_index: f64,
}
