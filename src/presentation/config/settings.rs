use std::env;

use super::Environment;

const DEFAULT_SPEECH_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";

/// Process configuration, read from the environment exactly once at startup
/// and passed down explicitly from there.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub speech: SpeechSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Base directory the blob store roots `files/temp` and `files/audio` in.
    pub root: String,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub endpoint: String,
    /// No key means recognition runs against the canned fallback service.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// No URL means records are kept in process memory.
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Development);

        Self {
            environment,
            server: ServerSettings {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            storage: StorageSettings {
                root: env::var("STORAGE_ROOT").unwrap_or_else(|_| "storage".to_string()),
            },
            speech: SpeechSettings {
                endpoint: env::var("SPEECH_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_SPEECH_ENDPOINT.to_string()),
                api_key: env::var("SPEECH_API_KEY").ok().filter(|k| !k.is_empty()),
            },
            database: DatabaseSettings {
                url: env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            logging: LoggingSettings {
                json_format: env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}
