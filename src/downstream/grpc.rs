use std::time::Duration;

use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use super::{CoreClient, CoreMethod};

/// [`CoreClient`] over a single long-lived tonic channel.
///
/// The channel connects lazily and reconnects on its own, so one client is
/// built at start-up and shared by every request.
#[derive(Debug, Clone)]
pub struct GrpcCoreClient {
    inner: Grpc<Channel>,
}

impl GrpcCoreClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    pub fn connect_lazy(
        endpoint: &str,
        connect_timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(endpoint.to_string())?
            .connect_timeout(connect_timeout)
            .connect_lazy();
        Ok(Self::new(channel))
    }
}

#[async_trait::async_trait]
impl CoreClient for GrpcCoreClient {
    async fn unary<M: CoreMethod>(
        &self,
        request: M::Request,
        budget: Duration,
    ) -> Result<M::Response, Status> {
        let mut grpc = self.inner.clone();
        // No structured status exists for a channel that never became ready;
        // Unknown keeps it out of every specific class.
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("core service was not ready: {}", e)))?;

        let mut request = Request::new(request);
        request.set_timeout(budget);

        let codec: ProstCodec<M::Request, M::Response> = ProstCodec::default();
        let response = grpc
            .unary(request, PathAndQuery::from_static(M::PATH), codec)
            .await?;
        Ok(response.into_inner())
    }
}
