pub const CALLER_ID_HEADER: &str = "x-user-id";

/// Identity the caller presents, used for subscription checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity(Option<String>);

impl CallerIdentity {
    pub fn new(id: Option<String>) -> Self {
        Self(id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_none()
    }
}
