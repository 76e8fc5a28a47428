mod health;
mod transcribe;

pub use health::{HealthResponse, health_handler};
pub use transcribe::{TranscriptionResponse, transcribe_handler};
