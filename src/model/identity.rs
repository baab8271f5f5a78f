use serde::{Deserialize, Serialize};

/// Tenant/user pair resolved by the identity middleware before a handler
/// runs. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub tenant_id: String,
    pub user_id: String,
}

impl Identity {
    pub fn new(tenant_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: user_id.into(),
        }
    }
}
