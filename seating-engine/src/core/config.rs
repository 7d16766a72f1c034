use std::path::PathBuf;

/// Engine configuration
///
/// # Environment Variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./work_dir | Holds the database and logs |
/// | DEFAULT_TABLE_SIZE | 10 | Capacity of tables without an explicit size |
/// | LOG_LEVEL | info | Log filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | JSON console logs |
/// | LOG_TO_FILE | false | Also write daily rotating logs under `{WORK_DIR}/logs` |
/// | ENVIRONMENT | development | development, staging or production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/seating DEFAULT_TABLE_SIZE=8 seating show --wedding smith-2026
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub default_table_size: u32,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            default_table_size: std::env::var("DEFAULT_TABLE_SIZE")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(10),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Environment config with a different work dir and table size
    ///
    /// Mostly for tests.
    pub fn with_overrides(work_dir: impl Into<String>, default_table_size: u32) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.default_table_size = default_table_size.max(1);
        config
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("seating.redb")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Settings the seating manager needs
    pub fn seating(&self) -> SeatingConfig {
        SeatingConfig {
            default_table_size: self.default_table_size,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Per-manager seating settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingConfig {
    /// Capacity of tables with no explicit size, at least 1
    pub default_table_size: u32,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            default_table_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_overrides() {
        let config = Config::with_overrides("/tmp/seating", 0);
        assert_eq!(config.default_table_size, 1);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/seating/seating.redb"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/seating/logs"));
        assert_eq!(config.seating().default_table_size, 1);
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("/tmp", 10);
        config.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
