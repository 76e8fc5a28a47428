use async_trait::async_trait;

use crate::domain::CallerIdentity;

/// Decides whether a caller may use the relay, e.g. by checking an active subscription.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, caller: &CallerIdentity) -> Result<bool, AuthorizationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("authorization backend unavailable: {0}")]
    Unavailable(String),
}
