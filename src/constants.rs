/// Source identifiers and column names to keep the CSV contract in one place.
/// A source id doubles as the file stem under the data directory.

// Logical source names
pub const YOUTH_DEPENDENCY_INDEX: &str = "youth_dependency_index";
pub const PLATFORM_OWNERSHIP: &str = "platform_ownership";
pub const DATA_FLOW_PATHS: &str = "data_flow_paths";
pub const LOCAL_APPS_USAGE: &str = "local_apps_usage";
pub const DIGITAL_LAWS_SCORE: &str = "digital_laws_score";
pub const SCREEN_TIME_STATS: &str = "screen_time_stats";
pub const AD_ALGO_EXPOSURE: &str = "ad_algo_exposure";

// Column names
pub const COUNTRY: &str = "Country";
pub const YOUTH_DEPENDENCY_INDEX_PERCENT: &str = "Youth_Dependency_Index_Percent";
pub const PARENT_COMPANY: &str = "Parent_Company";
pub const PLATFORM: &str = "Platform";
pub const COUNTRY_OF_ORIGIN: &str = "Country_of_Origin";
pub const OWNERSHIP_PERCENTAGE: &str = "Ownership_Percentage";
pub const ORIGIN_COUNTRY: &str = "Origin_Country";
pub const DESTINATION_COUNTRY: &str = "Destination_Country";
pub const COMPANY: &str = "Company";
pub const APP_NAME: &str = "App_Name";
pub const YOUTH_ADOPTION_PERCENT: &str = "Youth_Adoption_Percent";
pub const AVG_SCREEN_TIME_MIN: &str = "Avg_Screen_Time_Min";
pub const AD_ALGO_SCORE: &str = "Ad_Algo_Score";
pub const ATTENTION_INDEX: &str = "Attention_Index";

/// Extension appended to a source id to find its file
pub const CSV_EXTENSION: &str = "csv";
