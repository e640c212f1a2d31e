use crate::error::{DashboardError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Port for the Prometheus exporter; no exporter when unset
    pub metrics_port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub default_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            metrics_port: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name: "dashboard.log".to_string(),
            default_filter: "colonization_dashboard=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `dashboard.toml` in the
    /// working directory is used when present, otherwise defaults apply.
    /// `DASHBOARD_DATA_DIR` and `PORT` from the environment (or `.env`)
    /// override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env(
            std::env::var("DASHBOARD_DATA_DIR").ok(),
            std::env::var("PORT").ok(),
        )?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self, data_dir: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| DashboardError::Config(format!("Invalid PORT value: {port}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            data_dir = "/srv/dashboard/data"
            metrics_port = 9898

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/dashboard/data"));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.metrics_port, Some(9898));
        assert_eq!(config.logging.file_name, "dashboard.log");
    }

    #[test]
    fn env_overrides_file() {
        let mut config = Config::default();
        config
            .apply_env(Some("fixtures".into()), Some("3000".into()))
            .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let mut config = Config::default();
        let err = config.apply_env(None, Some("eighty".into())).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let err = Config::from_file(Path::new("/nonexistent/dashboard.toml")).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = Config::from_toml("server = 5").unwrap_err();
        assert!(matches!(err, DashboardError::Toml(_)));
    }
}
