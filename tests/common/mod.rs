#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const DEPENDENCY: &str = "Country,Youth_Dependency_Index_Percent\nIndia,78\nKenya,66\nBrazil,72\n";
pub const OWNERSHIP: &str = "Parent_Company,Platform,Country_of_Origin,Ownership_Percentage\n\
Meta,Instagram,USA,~45%\n\
Meta,WhatsApp,USA,100%\n\
ByteDance,TikTok,China,>90\n\
Naspers,Stake,South Africa,<5%\n";
pub const FLOWS: &str = "Origin_Country,Destination_Country,Platform,Company\n\
India,USA,Instagram,Meta\n\
Kenya,Ireland,WhatsApp,Meta\n\
Ireland,USA,WhatsApp,Meta\n\
Brazil,China,TikTok,ByteDance\n";
pub const LOCAL_APPS: &str = "App_Name,Country,Youth_Adoption_Percent\nKoo,India,4\nM-Pesa,Kenya,83\n";
pub const LAWS: &str = "Country,Law,Score\nIndia,DPDP Act,5.5\nKenya,Data Protection Act,6\n";
pub const SCREEN_TIME: &str = "Country,Avg_Screen_Time_Min\nIndia,430\nKenya,380\nBrazil,540\n";
pub const AD_ALGO: &str = "Country,Ad_Algo_Score\nBrazil,8\nIndia,7.5\n";

/// Write a complete, valid set of sources into `dir`
pub fn write_sources(dir: &Path) {
    let files = [
        ("youth_dependency_index.csv", DEPENDENCY),
        ("platform_ownership.csv", OWNERSHIP),
        ("data_flow_paths.csv", FLOWS),
        ("local_apps_usage.csv", LOCAL_APPS),
        ("digital_laws_score.csv", LAWS),
        ("screen_time_stats.csv", SCREEN_TIME),
        ("ad_algo_exposure.csv", AD_ALGO),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// The sample data shipped with the crate
pub fn bundled_data_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
