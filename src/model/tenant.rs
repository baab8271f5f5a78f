use serde::{Deserialize, Serialize};

use crate::downstream::proto;
use crate::model::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub tenant_id: String,
    pub tenant_name: String,
    pub tenant_description: String,
    pub tenant_url: String,
}

impl From<proto::Tenant> for Tenant {
    fn from(tenant: proto::Tenant) -> Self {
        Self {
            tenant_id: tenant.tenant_id,
            tenant_name: tenant.tenant_name,
            tenant_description: tenant.tenant_description,
            tenant_url: tenant.tenant_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub tenant: Tenant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantListResponse {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub tenants: Vec<Tenant>,
}
