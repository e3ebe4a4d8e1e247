pub mod app_config;
pub mod config;
pub mod labels;
pub mod search;
pub mod theme;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use labels::feature_type_label;
pub use search::{SearchInput, SearchType};
pub use theme::{Color, Theme};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
