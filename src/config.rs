use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use questfolio_contact::{RelayConfig, SmtpSettings};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Sender identity; falls back to the SMTP username when empty
    #[serde(default)]
    pub from_address: String,
    /// Where contact notifications are delivered
    #[serde(default = "default_owner_address")]
    pub owner_address: String,
    /// Signature of the acknowledgement email
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            owner_address: default_owner_address(),
            owner_name: default_owner_name(),
        }
    }
}

impl EmailConfig {
    pub fn sender(&self) -> &str {
        if !self.from_address.is_empty() {
            &self.from_address
        } else if !self.smtp_username.is_empty() {
            &self.smtp_username
        } else {
            FALLBACK_SENDER
        }
    }

    pub fn smtp_settings(&self) -> SmtpSettings {
        SmtpSettings {
            host: self.smtp_host.to_owned(),
            port: self.smtp_port,
            username: self.smtp_username.to_owned(),
            password: self.smtp_password.to_owned(),
        }
    }

    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            from_address: self.sender().to_owned(),
            owner_address: self.owner_address.to_owned(),
            owner_name: self.owner_name.to_owned(),
        }
    }
}

const FALLBACK_SENDER: &str = "noreply@questfolio.localhost";

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_owner_address() -> String {
    "madhavarapusidhartharayudu@gmail.com".to_string()
}

fn default_owner_name() -> String {
    "Sidhartha Rayudu.M".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the environment
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file just means defaults + environment
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // QUESTFOLIO__EMAIL__OWNER_ADDRESS, QUESTFOLIO__SERVER__PORT, ...
        builder = builder.add_source(
            Environment::with_prefix("QUESTFOLIO")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        // Credentials under the names the mail relay has always used
        if let Ok(user) = env::var("EMAIL_USER") {
            builder = builder.set_override("email.smtp_username", user)?;
        }
        if let Ok(pass) = env::var("EMAIL_PASS") {
            builder = builder.set_override("email.smtp_password", pass)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.owner_address.trim().is_empty() {
            return Err("Email owner_address must be set".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown logging format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}
