use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Signs the session cookie; must be at least 64 bytes.
    pub session_secret: Secret<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the backend REST API that owns all LMS data.
    #[serde(default = "default_backend_url")]
    pub url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

/// Resolution order kept from the original deployment: two environment
/// variable names, then a hardcoded localhost fallback.
fn default_backend_url() -> String {
    std::env::var("LMS_BACKEND_URL")
        .or_else(|_| std::env::var("BACKEND_API_URL"))
        .unwrap_or_else(|_| "http://localhost:5000".to_string())
}

#[derive(Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Works both from the workspace root and from inside the crate.
    let configuration_directory = if base_path.ends_with("lms-gateway") {
        base_path.join("config")
    } else {
        base_path.join("lms-gateway").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
