use crate::config::types::CrawlConfig;
use crate::ConfigError;

/// Validates the entire configuration
///
/// Any error here is a fatal startup error: it is reported to the user and
/// the process exits non-zero before any crawling begins.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_seed_url(config)?;
    validate_limits(config)?;
    validate_output_path(config)?;
    Ok(())
}

/// Validates the seed URL
fn validate_seed_url(config: &CrawlConfig) -> Result<(), ConfigError> {
    let seed = &config.seed_url;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidSeed(format!(
            "seed URL must use HTTP or HTTPS, got scheme '{}'",
            seed.scheme()
        )));
    }

    if seed.host_str().is_none() {
        return Err(ConfigError::InvalidSeed(format!(
            "seed URL '{}' has no hostname",
            seed
        )));
    }

    Ok(())
}

/// Validates the numeric crawl limits
fn validate_limits(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 || config.concurrency > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 100, got {}",
            config.concurrency
        )));
    }

    // delay_ms and timeout_ms are unsigned, so >= 0 holds by construction.
    // A zero timeout is accepted: every fetch then times out immediately and
    // is contained as a per-URL failure, not a startup error.
    Ok(())
}

/// Validates that the output path can be written to
fn validate_output_path(config: &CrawlConfig) -> Result<(), ConfigError> {
    let path = &config.output_path;

    if path.as_os_str().is_empty() {
        return Err(ConfigError::OutputPath(
            "output path cannot be empty".to_string(),
        ));
    }

    if path.is_dir() {
        return Err(ConfigError::OutputPath(format!(
            "output path '{}' is a directory",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ConfigError::OutputPath(format!(
                "output directory '{}' does not exist",
                parent.display()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use url::Url;

    fn create_test_config() -> CrawlConfig {
        CrawlConfig {
            seed_url: Url::parse("https://example.com/").unwrap(),
            concurrency: 5,
            delay_ms: 100,
            timeout_ms: 10_000,
            output_path: PathBuf::from("results.csv"),
            debug: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_seed_scheme() {
        let mut config = create_test_config();
        config.seed_url = Url::parse("ftp://example.com/").unwrap();

        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidSeed(_)));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = create_test_config();
        config.concurrency = 0;

        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_timeout_allowed() {
        let mut config = create_test_config();
        config.timeout_ms = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_delay_allowed() {
        let mut config = create_test_config();
        config.delay_ms = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_output_directory() {
        let mut config = create_test_config();
        config.output_path = PathBuf::from("/nonexistent/dir/results.csv");

        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::OutputPath(_)));
    }

    #[test]
    fn test_output_path_in_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config();
        config.output_path = dir.path().join("results.csv");

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_output_path_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config();
        config.output_path = dir.path().to_path_buf();

        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::OutputPath(_)));
    }
}
