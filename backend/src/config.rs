//! Server configuration.
//!
//! The backend recognizes exactly two knobs, both optional environment
//! variables: `ROSTER_HOST` and `ROSTER_PORT`. Together they select the
//! origin the server binds to, which is also the origin the embedded client
//! issues its course fetches against. Nothing else is environment-driven.

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("ROSTER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("ROSTER_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("ROSTER_PORT={} is not a port number, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        ServerConfig { host, port }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
