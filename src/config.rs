/// Configuration management
///
/// All settings come from environment variables; a local `.env` file is
/// loaded in `main` via dotenvy before this runs.
use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
