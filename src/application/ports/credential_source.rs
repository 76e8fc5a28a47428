use crate::domain::ApiCredential;

/// Supplies the transcription API credential. `None` means the deployment is misconfigured.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> Option<ApiCredential>;
}
