use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub transcription: TranscriptionServiceConfig,
    #[serde(default)]
    pub generation: GenerationServiceConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_uploads_path")]
    pub uploads_path: String,
}

/// Transcription collaborator. The API key arrives out-of-band via
/// `VOICELOOP__TRANSCRIPTION__API_KEY`.
#[derive(Debug, Deserialize)]
pub struct TranscriptionServiceConfig {
    #[serde(default = "default_transcription_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_transcription_model")]
    pub model: String,
}

/// Generation collaborator. The API key arrives out-of-band via
/// `VOICELOOP__GENERATION__API_KEY`.
#[derive(Debug, Deserialize)]
pub struct GenerationServiceConfig {
    #[serde(default = "default_generation_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_generation_model")]
    pub model: String,
}

fn default_service_name() -> String {
    "voiceloop".to_string()
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_uploads_path() -> String {
    "uploads".to_string()
}

fn default_transcription_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_transcription_model() -> String {
    "whisper-large-v3-turbo".to_string()
}

fn default_generation_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_generation_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_path: default_uploads_path(),
        }
    }
}

impl Default for TranscriptionServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_transcription_url(),
            api_key: String::new(),
            model: default_transcription_model(),
        }
    }
}

impl Default for GenerationServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_generation_url(),
            api_key: String::new(),
            model: default_generation_model(),
        }
    }
}

impl Config {
    /// Load from an optional config file, then layer the process environment
    /// on top (`VOICELOOP__SECTION__KEY`) so credentials never live in the
    /// file.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("VOICELOOP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
