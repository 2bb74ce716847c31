//! External service sections: booking backend and geocoding provider.

use application::ApplicationError;
pub use integration_backend::BackendConfig;
pub use integration_geocoding::LocationIqConfig;

/// Check that `url` is an absolute HTTP(S) URL
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` describing the problem.
pub fn validate_base_url(
    section: &str,
    url: &str,
    require_https: bool,
) -> Result<(), ApplicationError> {
    let url = url.trim();
    if url.starts_with("https://") {
        return Ok(());
    }
    if url.starts_with("http://") {
        if require_https {
            return Err(ApplicationError::Configuration(format!(
                "{section}.base_url must use HTTPS in production"
            )));
        }
        return Ok(());
    }
    Err(ApplicationError::Configuration(format!(
        "{section}.base_url must be an http(s) URL, got '{url}'"
    )))
}

pub(super) fn validate_backend(
    config: &BackendConfig,
    require_https: bool,
) -> Result<(), ApplicationError> {
    validate_base_url("backend", &config.base_url, require_https)?;
    if config.timeout_secs == 0 {
        return Err(ApplicationError::Configuration(
            "backend.timeout_secs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

pub(super) fn validate_geocoding(config: &LocationIqConfig) -> Result<(), ApplicationError> {
    validate_base_url("geocoding", &config.base_url, true)?;
    if config.timeout_secs == 0 {
        return Err(ApplicationError::Configuration(
            "geocoding.timeout_secs must be greater than 0".to_string(),
        ));
    }
    if config.max_results == 0 {
        return Err(ApplicationError::Configuration(
            "geocoding.max_results must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_must_be_http() {
        assert!(validate_base_url("backend", "ftp://x", false).is_err());
        assert!(validate_base_url("backend", "http://localhost:8080", false).is_ok());
        assert!(validate_base_url("backend", "http://localhost:8080", true).is_err());
        assert!(validate_base_url("backend", "https://api.test", true).is_ok());
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let backend = BackendConfig {
            timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert!(validate_backend(&backend, false).is_err());

        let geocoding = LocationIqConfig {
            timeout_secs: 0,
            ..LocationIqConfig::default()
        };
        assert!(validate_geocoding(&geocoding).is_err());
    }

    #[test]
    fn geocoding_needs_results() {
        let geocoding = LocationIqConfig {
            max_results: 0,
            ..LocationIqConfig::default()
        };
        let err = validate_geocoding(&geocoding).unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }
}
