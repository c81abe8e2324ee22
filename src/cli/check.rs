//! Handler for the `check` command group.

use stayrate::config::Config;

use crate::cli::output;

/// Report the effective configuration.
pub fn config(config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Configuration");
    output::key_value("API", &config.api.base_url);
    output::key_value("Timeout", format!("{}s", config.api.timeout_secs));
    output::key_value("Log level", &config.logging.level);
    output::key_value("Log format", &config.logging.format);

    if config.credentials.access_token.is_none() && config.credentials.refresh_token.is_none() {
        output::warn("No API credentials; set STAYRATE_ACCESS_TOKEN or STAYRATE_REFRESH_TOKEN");
    }
    output::ok("Configuration is valid");
}
