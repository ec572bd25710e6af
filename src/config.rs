use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub rust_env: String,
    pub host: String,
    pub port: u16,
    pub contact_submit_delay: Duration,
    pub contact_simulate_failure: bool,
}

impl AppConfig {
    /// Load server configuration from environment variables.
    ///
    /// Panics on values that do not parse; startup should stop there.
    pub fn from_env() -> Self {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("Invalid PORT value");

        let delay_ms = env::var("CONTACT_SUBMIT_DELAY_MS")
            .unwrap_or_else(|_| "2000".to_string()) // Same pause the form always had
            .parse::<u64>()
            .expect("Invalid CONTACT_SUBMIT_DELAY_MS value");

        let contact_simulate_failure = env::var("CONTACT_SIMULATE_FAILURE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .expect("Invalid CONTACT_SIMULATE_FAILURE value");

        Self {
            rust_env,
            host,
            port,
            contact_submit_delay: Duration::from_millis(delay_ms),
            contact_simulate_failure,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.rust_env == "production"
    }
}

/// Loads `.env.{RUST_ENV}` if present, otherwise `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
