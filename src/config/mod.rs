use crate::errors::{AppError, AppResult};
use crate::models::YearFilter;
use crate::models::year_filter::YEARS;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_schedule_file")]
    pub schedule_file: String,
    #[serde(default = "default_years")]
    pub default_years: Vec<u8>,
    #[serde(default = "default_view")]
    pub default_view: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
}

fn default_schedule_file() -> String {
    Config::schedule_path().to_string_lossy().to_string()
}
fn default_years() -> Vec<u8> {
    YEARS.to_vec()
}
fn default_view() -> String {
    "table".to_string()
}
fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_file: default_schedule_file(),
            default_years: default_years(),
            default_view: default_view(),
            use_colors: default_use_colors(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimetable")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimetable")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetable.conf")
    }

    /// Return the default location of the held schedule
    pub fn schedule_path() -> PathBuf {
        Self::config_dir().join("schedule.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        YearFilter::from_years(&self.default_years)
            .map_err(|e| AppError::Config(format!("default_years: {e}")))?;
        if !matches!(self.default_view.as_str(), "table" | "day" | "grid") {
            return Err(AppError::Config(format!(
                "default_view must be table, day or grid (found '{}')",
                self.default_view
            )));
        }
        Ok(())
    }

    pub fn year_filter(&self) -> AppResult<YearFilter> {
        YearFilter::from_years(&self.default_years)
    }

    pub fn schedule_file_path(&self) -> PathBuf {
        expand_tilde(&self.schedule_file)
    }

    /// Initialize the configuration directory and file.
    /// In test mode nothing is written.
    pub fn init_all(schedule_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Config::default();
        if let Some(custom) = schedule_file {
            config.schedule_file = custom;
        }

        if is_test {
            return Ok(config);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&config)?;
        fs::write(Self::config_file(), yaml)?;
        success(format!("Config file: {}", Self::config_file().display()));

        Ok(config)
    }
}
