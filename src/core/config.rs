use std::env;
use std::path::PathBuf;

use crate::shared::constants::MAX_RECENT_REPORTS;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub store: StoreConfig,
    pub actions: ActionConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Where the record store is loaded from at startup
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// JSON fixture file overriding the compiled-in data set
    pub fixtures_path: Option<PathBuf>,
}

/// Settings for the in-memory action journal
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Maximum number of receipts kept before the oldest are evicted
    pub journal_capacity: usize,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Default number of reports in the overview's "recent" list
    pub recent_reports_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            store: StoreConfig::from_env()?,
            actions: ActionConfig::from_env()?,
            dashboard: DashboardConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Civic Desk API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Department dashboard for citizen service reports".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let fixtures_path = env::var("FIXTURES_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { fixtures_path })
    }
}

impl ActionConfig {
    const DEFAULT_JOURNAL_CAPACITY: usize = 500;

    pub fn from_env() -> Result<Self, String> {
        Self::parse(env::var("ACTION_JOURNAL_CAPACITY").ok())
    }

    fn parse(raw: Option<String>) -> Result<Self, String> {
        let journal_capacity = match raw {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| "ACTION_JOURNAL_CAPACITY must be a valid number".to_string())?,
            None => Self::DEFAULT_JOURNAL_CAPACITY,
        };

        if journal_capacity == 0 {
            return Err("ACTION_JOURNAL_CAPACITY must be at least 1".to_string());
        }

        Ok(Self { journal_capacity })
    }
}

impl DashboardConfig {
    const DEFAULT_RECENT_REPORTS_LIMIT: usize = 5;

    pub fn from_env() -> Result<Self, String> {
        Self::parse(env::var("RECENT_REPORTS_LIMIT").ok())
    }

    fn parse(raw: Option<String>) -> Result<Self, String> {
        let recent_reports_limit = match raw {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| "RECENT_REPORTS_LIMIT must be a valid number".to_string())?,
            None => Self::DEFAULT_RECENT_REPORTS_LIMIT,
        };

        if !(1..=MAX_RECENT_REPORTS).contains(&recent_reports_limit) {
            return Err(format!(
                "RECENT_REPORTS_LIMIT must be between 1 and {}",
                MAX_RECENT_REPORTS
            ));
        }

        Ok(Self {
            recent_reports_limit,
        })
    }
}
