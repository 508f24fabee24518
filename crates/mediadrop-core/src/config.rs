//! Configuration module
//!
//! Configuration is read once from the environment at startup and shared by
//! reference with every handler through the application state.

use std::env;
use std::path::{Path, PathBuf};

const SERVER_PORT: u16 = 3000;
const UPLOAD_DIR: &str = "uploads";
const PUBLIC_DIR: &str = "public";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Root holding one flat directory per category.
    pub upload_dir: PathBuf,
    /// Static frontend served for paths outside the API routes.
    pub public_dir: PathBuf,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number, got '{}'", port))?,
            Err(_) => SERVER_PORT,
        };

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(UPLOAD_DIR));

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(PUBLIC_DIR));

        let config = Config {
            server_port,
            upload_dir,
            public_dir,
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration rooted at `upload_dir` with defaults for everything else.
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Config {
            server_port: SERVER_PORT,
            upload_dir: upload_dir.into(),
            public_dir: PathBuf::from(PUBLIC_DIR),
            environment: "development".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT cannot be 0"));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
        }
        if self.public_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("PUBLIC_DIR cannot be empty"));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}
