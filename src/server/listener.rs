//! Accept loop
//!
//! Binds the request listener and hands each connection to its own task.

use log::{error, info};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;

use crate::client::{handle_client, reject_busy};
use crate::config::ServerConfig;
use crate::server::context::ServerContext;

pub struct Server {
    listener: TcpListener,
    context: Arc<ServerContext>,
    connection_slots: Arc<Semaphore>,
    max_clients: usize,
    max_request_length: usize,
}

impl Server {
    /// Prepares the media root and binds the listener.
    pub async fn bind(config: &ServerConfig) -> io::Result<Self> {
        let context = ServerContext::new(config)?;
        Self::bind_with_context(config, context).await
    }

    /// Binds the listener around an already-built context.
    pub async fn bind_with_context(
        config: &ServerConfig,
        context: ServerContext,
    ) -> io::Result<Self> {
        let socket = config.server.listen_socket();
        let listener = TcpListener::bind(&socket).await.map_err(|e| {
            error!("Failed to bind to {}: {}", socket, e);
            e
        })?;
        info!("Server bound to {}", listener.local_addr()?);

        Ok(Self {
            listener,
            context: Arc::new(context),
            connection_slots: Arc::new(Semaphore::new(config.server.max_clients)),
            max_clients: config.server.max_clients,
            max_request_length: config.server.max_request_length,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves until `shutdown` completes. Connections already accepted keep
    /// running on their own tasks.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting media store server on {} (max {} clients)",
            self.local_addr()
                .map(|a| a.to_string())
                .unwrap_or_else(|_| "?".into()),
            self.max_clients
        );

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, no longer accepting connections");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, addr)) => self.dispatch(stream, addr),
                    Err(e) => error!("Error accepting connection: {}", e),
                }
            }
        }
    }

    fn dispatch(&self, stream: tokio::net::TcpStream, addr: SocketAddr) {
        match Arc::clone(&self.connection_slots).try_acquire_owned() {
            Ok(permit) => {
                let context = Arc::clone(&self.context);
                let max_request_length = self.max_request_length;

                // Spawn a task for each client so accept loop doesn't block
                tokio::spawn(async move {
                    handle_client(stream, addr, context, max_request_length).await;
                    drop(permit);
                });
            }
            Err(_) => {
                let max_clients = self.max_clients;
                tokio::spawn(reject_busy(stream, addr, max_clients));
            }
        }
    }
}
