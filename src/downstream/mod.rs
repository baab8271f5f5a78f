//! Client side of the core service.
//!
//! Every inbound operation maps to exactly one unary RPC. The RPC is named by
//! a marker type implementing [`CoreMethod`] (see [`methods`]), and handlers
//! reach the core service only through the [`CoreClient`] trait so tests can
//! substitute their own implementation.

pub mod grpc;
pub mod methods;
pub mod proto;

pub use grpc::GrpcCoreClient;

use std::time::Duration;
use tonic::Status;

/// Wait budget class for a downstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallBudget {
    /// Regular management operations.
    Standard,
    /// Long-running bulk work (data transformation).
    Extended,
}

/// Concrete durations backing each [`CallBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTimeouts {
    pub standard: Duration,
    pub extended: Duration,
}

impl CallTimeouts {
    pub fn budget(&self, budget: CallBudget) -> Duration {
        match budget {
            CallBudget::Standard => self.standard,
            CallBudget::Extended => self.extended,
        }
    }
}

impl Default for CallTimeouts {
    fn default() -> Self {
        Self {
            standard: Duration::from_secs(30),
            extended: Duration::from_secs(300),
        }
    }
}

/// A single unary RPC exposed by the core service.
pub trait CoreMethod: Send + Sync + 'static {
    type Request: prost::Message + Default + Send + Sync + 'static;
    type Response: prost::Message + Default + Send + Sync + 'static;

    /// Fully qualified gRPC path, e.g. `/core.v1.DatabaseService/ShowDatabase`.
    const PATH: &'static str;
    /// Bare method name, used in logs.
    const NAME: &'static str;
    const BUDGET: CallBudget = CallBudget::Standard;
}

#[async_trait::async_trait]
pub trait CoreClient: Send + Sync + 'static {
    /// Invoke `M` once. `budget` is forwarded to the core service as the
    /// call deadline; the caller enforces it locally as well.
    async fn unary<M: CoreMethod>(
        &self,
        request: M::Request,
        budget: Duration,
    ) -> Result<M::Response, Status>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_uses_extended_budget() {
        let timeouts = CallTimeouts::default();
        assert_eq!(
            timeouts.budget(methods::TransformData::BUDGET),
            Duration::from_secs(300)
        );
        assert_eq!(
            timeouts.budget(methods::ShowDatabase::BUDGET),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_method_paths() {
        assert_eq!(
            methods::ConnectDatabase::PATH,
            "/core.v1.DatabaseService/ConnectDatabase"
        );
        assert_eq!(methods::ConnectDatabase::NAME, "ConnectDatabase");
        assert_eq!(
            methods::AttachMappingRule::PATH,
            "/core.v1.MappingService/AttachMappingRule"
        );
    }
}
