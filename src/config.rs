use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where contact submissions are forwarded, and who answers when that
/// forwarding fails (the mail fallback address shown to the user).
#[derive(Debug, Deserialize, Clone)]
pub struct FormsConfig {
    #[serde(default = "default_forms_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_form_name")]
    pub form_name: String,
    #[serde(default = "default_forms_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_support_email")]
    pub support_email: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_forms_endpoint(),
            form_name: default_form_name(),
            timeout_secs: default_forms_timeout(),
            support_email: default_support_email(),
        }
    }
}

fn default_forms_endpoint() -> String {
    "https://beamcast.app/".to_string()
}

fn default_form_name() -> String {
    "contact".to_string()
}

fn default_forms_timeout() -> u64 {
    10
}

fn default_support_email() -> String {
    "support@beamcast.app".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BEAMCAST__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BEAMCAST")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if url::Url::parse(&self.forms.endpoint).is_err() {
            return Err(format!(
                "Forms endpoint is not a valid URL: {}",
                self.forms.endpoint
            ));
        }
        if self.forms.timeout_secs == 0 {
            return Err("Forms timeout must be at least 1 second".to_string());
        }
        if !self.forms.support_email.contains('@') {
            return Err("Support email must be a mail address".to_string());
        }
        Ok(())
    }
}
