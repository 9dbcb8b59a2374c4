use crate::config::types::CrawlConfig;
use crate::url::{Origin, ScopeFilter};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Checks run in the order a crawl would need them: the seed origin first,
/// then the scope pattern, then the output settings.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    Origin::from_seed(&config.seed_url)?;
    ScopeFilter::new(&config.url_regex)?;
    validate_output(config)?;
    validate_request_timeout(config.request_timeout)?;
    Ok(())
}

/// Validates that at least one output toggle is on and has somewhere to write
fn validate_output(config: &CrawlConfig) -> Result<(), ConfigError> {
    if !config.save_html && !config.save_text {
        return Err(ConfigError::NoOutputEnabled);
    }

    if config.save_html && config.html_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "html-dir cannot be empty when save-html is enabled".to_string(),
        ));
    }

    if config.save_text && config.text_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "text-dir cannot be empty when save-text is enabled".to_string(),
        ));
    }

    Ok(())
}

fn validate_request_timeout(seconds: u64) -> Result<(), ConfigError> {
    if seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1 second, got {}",
            seconds
        )));
    }
    Ok(())
}
