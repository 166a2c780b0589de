//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ClassifierConfig, ConfigError, DatabaseConfig, Environment,
    FailurePolicy, ServerConfig, SummaryConfig, WorkerConfig,
};
