use crate::backend::error::TransportError;
use crate::backend::{BackendRequest, BackendResponse};
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use std::sync::Arc;
use tracing::debug;

pub type SharedTransport = Arc<dyn BackendTransport>;

/// Issues one backend request and returns the fully buffered response.
#[async_trait]
pub trait BackendTransport: Send + Sync {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, TransportError>;
}

/// HTTPS transport trusting the webpki root set.
#[derive(Clone)]
pub struct HttpsTransport {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HttpsTransport {
    pub fn new() -> Result<Self, TransportError> {
        let mut roots = rustls::RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let tls_config = rustls::ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()?
            .with_root_certificates(roots)
            .with_no_client_auth();

        let connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_only()
            .enable_http1()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self { client })
    }
}

#[async_trait]
impl BackendTransport for HttpsTransport {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, TransportError> {
        let request = request.into_http()?;
        let response = self.client.request(request).await?;

        let status = response.status();
        // The body may arrive in any number of frames; only the collected whole is parsed.
        let body = response.into_body().collect().await?.to_bytes();
        debug!(%status, length = body.len(), "Received backend response");

        Ok(BackendResponse { status, body })
    }
}
