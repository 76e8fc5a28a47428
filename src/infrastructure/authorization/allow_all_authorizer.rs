use async_trait::async_trait;

use crate::application::ports::{AuthorizationError, Authorizer};
use crate::domain::CallerIdentity;

/// Admits every caller. Used until subscription verification is wired in.
pub struct AllowAllAuthorizer;

#[async_trait]
impl Authorizer for AllowAllAuthorizer {
    async fn authorize(&self, caller: &CallerIdentity) -> Result<bool, AuthorizationError> {
        tracing::trace!(caller = ?caller.id(), "Authorizing caller");
        Ok(true)
    }
}
