//! Configuration validation
//!
//! Validates configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use mediadrop_core::Config;

/// Validate configuration values
///
/// Fails on values the server cannot run with; only warns about things that
/// degrade a single feature.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if !config.public_dir().is_dir() {
        tracing::warn!(
            public_dir = %config.public_dir().display(),
            "Static frontend directory not found - only API routes will respond"
        );
    }

    if config.upload_dir().is_file() {
        return Err(anyhow::anyhow!(
            "UPLOAD_DIR {} points to a file, expected a directory",
            config.upload_dir().display()
        ));
    }

    Ok(())
}
