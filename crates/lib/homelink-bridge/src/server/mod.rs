use crate::SkillBridge;
use crate::server::error::ServerError;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod handler;

pub struct Server;

impl Server {
    pub async fn serve(
        server_config: &config::ServerConfig,
        bridge: Arc<SkillBridge>,
        shutdown: CancellationToken,
    ) -> Result<(), ServerError> {
        let listener = TcpListener::bind(server_config.http.bind_address).await?;
        Self::serve_listener(listener, bridge, shutdown).await
    }

    /// Accepts connections on `listener` until `shutdown` is cancelled.
    pub async fn serve_listener(
        listener: TcpListener,
        bridge: Arc<SkillBridge>,
        shutdown: CancellationToken,
    ) -> Result<(), ServerError> {
        info!(address = %listener.local_addr()?, "Accepting smart home directives");

        loop {
            let (stream, peer) = tokio::select! {
                _ = shutdown.cancelled() => break,
                accepted = listener.accept() => match accepted {
                    Ok(accepted) => accepted,
                    Err(error) => {
                        debug!(?error, "Failed to accept a connection");
                        continue;
                    }
                },
            };

            // One task per connection.
            let bridge = bridge.clone();
            tokio::spawn(async move {
                let service = service_fn(move |request| {
                    let bridge = bridge.clone();
                    async move {
                        let response = handler::handle_request(&bridge, request).await;
                        Ok::<_, Infallible>(response)
                    }
                });

                if let Err(error) = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await
                {
                    debug!(?error, %peer, "Failed to serve a connection");
                }
            });
        }

        info!("Stopped accepting smart home directives");

        Ok(())
    }
}
