use std::env;

use crate::error::AppError;
use crate::graph::GraphqlConfig;

pub const DEFAULT_ENQUIRE_FORM_URL: &str = "http://localhost:8081";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub graphql: GraphqlConfig,
    pub enquire_form_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let graphql = GraphqlConfig::new_from_env()?;

        let enquire_form_url = env::var("ENQUIRE_FORM_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ENQUIRE_FORM_URL.to_string());

        let port = match env::var("PORT") {
            Ok(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT is not a valid port: {}", e)))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            graphql,
            enquire_form_url,
            port,
        })
    }
}
