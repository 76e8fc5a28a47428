mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    FALLBACK_API_KEY_VAR, LoggingSettings, ServerSettings, Settings, UploadSettings,
    UpstreamSettings,
};
