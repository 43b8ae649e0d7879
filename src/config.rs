use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_CURRENTS_BASE_URL: &str = "https://api.currentsapi.services";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openai_api_key: String,
    pub currents_api_key: String,
    pub openai_base_url: String,
    pub currents_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Both upstream credentials are required; refuse to start without them
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::ConfigError("OPENAI_API_KEY must be set".to_string()))?;
        let currents_api_key = env::var("CURRENTS_API_KEY")
            .map_err(|_| AppError::ConfigError("CURRENTS_API_KEY must be set".to_string()))?;

        // Base URLs are overridable so tests can point clients at a stub server
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let currents_base_url = env::var("CURRENTS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CURRENTS_BASE_URL.to_string());

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            openai_api_key,
            currents_api_key,
            openai_base_url,
            currents_base_url,
        })
    }
}
