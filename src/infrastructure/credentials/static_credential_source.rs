use crate::application::ports::CredentialSource;
use crate::domain::ApiCredential;

/// Credential resolved once from settings at startup and read-only afterwards.
pub struct StaticCredentialSource {
    credential: Option<ApiCredential>,
}

impl StaticCredentialSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            credential: api_key.and_then(ApiCredential::new),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }
}

impl CredentialSource for StaticCredentialSource {
    fn credential(&self) -> Option<ApiCredential> {
        self.credential.clone()
    }
}
