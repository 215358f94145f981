use std::path::PathBuf;

/// Runtime configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub orders_file: PathBuf,
    pub inventory_api_url: String,
    pub http_host: String,
    pub http_port: u16,
    pub store_buffer_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparsable numbers fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            orders_file: lookup("ORDERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/data/orders.json")),
            inventory_api_url: lookup("INVENTORY_API_URL")
                .unwrap_or_else(|| "http://inventory_service:5001".into()),
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5002),
            store_buffer_size: lookup("STORE_BUFFER_SIZE")
                .and_then(|p| p.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(32),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
