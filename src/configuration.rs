use config::{Config, ConfigError, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::models::user::{SupportInfo, UserRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    pub service_name: String,
    pub log_filter: String,
    /// gRPC collector address. Span export is off when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

/// Seed tables and mock constants the handlers answer from.
///
/// Loaded once at startup and read-only afterwards. The defaults are the
/// values the public reqres.in API hands out for its demo accounts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    pub users: Vec<UserRecord>,
    pub registered_emails: Vec<String>,
    pub support: SupportInfo,
    pub token: String,
    pub registration_id: u64,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            users: vec![UserRecord {
                id: 2,
                email: "janet.weaver@reqres.in".into(),
                first_name: "Janet".into(),
                last_name: "Weaver".into(),
                avatar: "https://reqres.in/img/faces/2-image.jpg".into(),
            }],
            registered_emails: vec!["eve.holt@reqres.in".into()],
            support: SupportInfo {
                url: "http://example.com".into(),
                text: "Support text".into(),
            },
            token: "QpwL5tke4Pnpja7X4".into(),
            registration_id: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configurations");
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")))
        .add_source(File::from(configuration_directory.join(environment.as_str())))
        .add_source(
            // APP_APPLICATION__PORT=9000 sets application.port
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

    settings.build()?.try_deserialize()
}
