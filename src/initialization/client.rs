//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::ProviderConfig;

/// Builds the HTTP client used by one provider adapter.
///
/// Creates a `reqwest::Client` configured with:
/// - the provider's fixed timeout, covering connect through body read
/// - the provider's User-Agent header, when it has one
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ProviderConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = ClientBuilder::new().timeout(config.timeout);
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    builder.build()
}
