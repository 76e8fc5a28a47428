mod authorizer;
mod credential_source;
mod transcription_engine;

pub use authorizer::{AuthorizationError, Authorizer};
pub use credential_source::CredentialSource;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
