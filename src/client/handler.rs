use log::{debug, error, info, warn};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpStream;

use crate::error::{MediaStoreError, ProtocolError};
use crate::middleware::logging::{log_connection, log_disconnect, log_request};
use crate::protocol::{HandledRequest, Response, handle_line};
use crate::server::ServerContext;

/// Handles one client connection using Tokio async runtime.
///
/// - Reads newline-terminated JSON requests, at most `max_request_length` bytes each.
/// - Runs each request's filesystem work on the blocking pool.
/// - Writes exactly one response line per request, in order.
pub async fn handle_client(
    stream: TcpStream,
    client_addr: SocketAddr,
    context: Arc<ServerContext>,
    max_request_length: usize,
) {
    log_connection(&client_addr);

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = Vec::new();
    let read_limit = max_request_length as u64 + 1;

    loop {
        line.clear();
        let read = (&mut reader).take(read_limit).read_until(b'\n', &mut line).await;
        match read {
            Ok(0) => {
                // Client closed the connection
                info!("Connection closed by client {}", client_addr);
                break;
            }
            Ok(_) => {
                // Oversized line: answer once, then skip whatever is left of it.
                if line.len() > max_request_length && line.last() != Some(&b'\n') {
                    let err: MediaStoreError =
                        ProtocolError::RequestTooLarge(max_request_length).into();
                    let response = Response::from_error(&err);
                    if !reply(&mut write_half, &client_addr, "-", response).await {
                        break;
                    }
                    if let Err(e) = discard_line(&mut reader).await {
                        warn!("Failed to skip oversized request from {}: {}", client_addr, e);
                        break;
                    }
                    continue;
                }

                let request = match String::from_utf8(std::mem::take(&mut line)) {
                    Ok(text) => text.trim_end_matches(['\r', '\n']).to_string(),
                    Err(e) => {
                        let err: MediaStoreError =
                            ProtocolError::MalformedRequest(format!("invalid UTF-8: {}", e))
                                .into();
                        let response = Response::from_error(&err);
                        if !reply(&mut write_half, &client_addr, "-", response).await {
                            break;
                        }
                        continue;
                    }
                };
                if request.trim().is_empty() {
                    continue;
                }

                let worker_context = Arc::clone(&context);
                let handled =
                    match tokio::task::spawn_blocking(move || handle_line(&worker_context, &request))
                        .await
                    {
                        Ok(handled) => handled,
                        Err(e) => {
                            error!("Request worker for {} failed: {}", client_addr, e);
                            HandledRequest {
                                op: "-".into(),
                                response: Response::from_error(&MediaStoreError::Internal(
                                    "request worker failed".into(),
                                )),
                            }
                        }
                    };

                if !reply(&mut write_half, &client_addr, &handled.op, handled.response).await {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read from {}: {}", client_addr, e);
                break;
            }
        }
    }

    log_disconnect(&client_addr);
}

/// Logs and writes one response line. Returns false once the peer is gone.
async fn reply<W>(writer: &mut W, client_addr: &SocketAddr, op: &str, response: Response) -> bool
where
    W: AsyncWrite + Unpin,
{
    log_request(client_addr, op, response.status);
    match writer.write_all(response.to_line().as_bytes()).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to write to {}: {}", client_addr, e);
            false
        }
    }
}

/// Consumes input up to and including the next newline, or until EOF.
async fn discard_line<R>(reader: &mut R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (found, used) = {
            let buf = reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, buf.len()),
            }
        };
        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

/// Answers a connection that arrived while the server was at capacity.
pub async fn reject_busy(mut stream: TcpStream, client_addr: SocketAddr, max_clients: usize) {
    let err = MediaStoreError::ServiceUnavailable(format!(
        "too many connections (max {})",
        max_clients
    ));
    let response = Response::from_error(&err);
    log_request(&client_addr, "-", response.status);
    if let Err(e) = stream.write_all(response.to_line().as_bytes()).await {
        error!("Failed to reject {}: {}", client_addr, e);
    }
    if let Err(e) = stream.shutdown().await {
        debug!("Failed to shut down rejected connection {}: {}", client_addr, e);
    }
}
