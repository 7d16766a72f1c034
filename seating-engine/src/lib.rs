//! Seating Engine - wedding seating chart guest/table assignment
//!
//! # Module Structure
//!
//! ```text
//! seating-engine/src/
//! ├── core/          # Configuration
//! ├── seating/       # Arrangement engine, actions, undo, ingest, storage
//! ├── utils/         # Logging
//! └── cli.rs         # `seating` binary commands
//! ```

pub mod cli;
pub mod core;
pub mod seating;
pub mod utils;

// Re-export public types
pub use core::{Config, SeatingConfig};
pub use seating::{
    ArrangementRepository, ArrangementStorage, ExportOptions, ManagerError, SeatingManager,
};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, prepare the work dir and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    std::fs::create_dir_all(&config.work_dir)?;

    if config.log_to_file {
        let log_dir = config.log_dir();
        init_logger_with_file(&config.log_level, config.log_json, Some(&log_dir))?;
        let removed = cleanup_old_logs(&log_dir)?;
        if removed > 0 {
            tracing::debug!(removed, "Old log files removed");
        }
    } else {
        init_logger(&config.log_level, config.log_json)?;
    }

    tracing::debug!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        default_table_size = config.default_table_size,
        "Environment ready"
    );
    Ok(config)
}
