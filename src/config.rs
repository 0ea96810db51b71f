use clap::Parser;
use std::time::Duration;

/// Service settings, from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "solardocs", version, about = "Solar installation paperwork and shared-expense ledger service")]
pub struct AppConfig {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// `memory://` keeps records in the process; `file:///dir` persists
    /// each collection as JSON under `dir`.
    #[arg(long, env = "STORE_URL", default_value = "memory://")]
    pub store_url: String,

    /// Origins allowed by CORS, comma separated. Empty allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Upper bound for list queries, in milliseconds.
    #[arg(long, env = "LIST_TIMEOUT_MS", default_value_t = 5000)]
    pub list_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            store_url: "memory://".to_string(),
            allowed_origins: Vec::new(),
            list_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn list_timeout(&self) -> Duration {
        Duration::from_millis(self.list_timeout_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
