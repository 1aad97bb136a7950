use dotenvy::dotenv;
use std::env;
use tracing::Level;

#[derive(Clone)]
pub struct Config {
    pub log_dir: String,
    pub log_level: Level,
    pub date_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .expect("LOG_LEVEL must be one of error, warn, info, debug, trace"),
            date_format: env::var("DATE_FORMAT").unwrap_or_else(|_| "%Y-%m-%d".to_string()),
        }
    }
}
