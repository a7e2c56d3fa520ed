//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::parser::{Error as ParserError, Request};
use crate::response::{StatusCode, Writer};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::{handler_fn, HandlerFn, HandlerFuture, ResponseWriter};

/// A running HTTP server.
///
/// Every accepted connection is served in its own task: one request is
/// parsed, the handler is invoked, and the connection is closed.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    local_addr: SocketAddr,
    closed: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
    accept_task: Option<JoinHandle<()>>,
}

impl HttpServer {
    /// Bind to `config.addr` and start accepting connections in the background.
    pub async fn serve<F>(config: ServerConfig, handler: F) -> Result<Self, Error>
    where
        F: for<'a> Fn(&'a mut ResponseWriter, &'a Request) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        Self::serve_with(config, handler_fn(handler)).await
    }

    /// Like [`HttpServer::serve`] with an already wrapped handler.
    pub async fn serve_with(config: ServerConfig, handler: HandlerFn) -> Result<Self, Error> {
        let listener = Self::setup_listener(&config).await?;
        let local_addr = listener.local_addr()?;

        let closed = Arc::new(AtomicBool::new(false));
        let shutdown = Arc::new(Notify::new());

        let accept_task = tokio::spawn(Self::listen(
            listener,
            handler,
            config.clone(),
            closed.clone(),
            shutdown.clone(),
        ));

        Ok(Self {
            config,
            local_addr,
            closed,
            shutdown,
            accept_task: Some(accept_task),
        })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections.
    ///
    /// Connections already accepted run to completion.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            info!("Closing server on {addr}", addr = self.local_addr);
            self.shutdown.notify_one();
        }
    }

    /// Returns true once [`HttpServer::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Wait for the accept loop to exit.
    pub async fn join(mut self) {
        if let Some(task) = self.accept_task.take() {
            if let Err(e) = task.await {
                error!("Accept loop failed: {e}");
            }
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(config: &ServerConfig) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&config.addr).await?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Accept connections until the server is closed.
    async fn listen(
        listener: TcpListener,
        handler: HandlerFn,
        config: ServerConfig,
        closed: Arc<AtomicBool>,
        shutdown: Arc<Notify>,
    ) {
        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    info!("Shutting down server...");
                    return;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(socket, addr, handler.clone(), config.clone());
                        }
                        Err(e) => {
                            if closed.load(Ordering::SeqCst) {
                                return;
                            }
                            Self::handle_accept_error(e).await;
                        }
                    }
                }
            }
        }
    }

    /// Spawn a task serving a new connection.
    fn handle_new_connection(socket: TcpStream, addr: SocketAddr, handler: HandlerFn, config: ServerConfig) {
        debug!("Accepted connection from {addr}");
        tokio::spawn(async move {
            if let Err(e) = Self::handle_connection(socket, handler, &config).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle accept errors. The loop keeps going after a short pause.
    async fn handle_accept_error(e: std::io::Error) {
        warn!("Error accepting connection: {e}");
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Serve a single request on `stream` and close it.
    ///
    /// A failure to flush or shut down the stream is reported as
    /// [`Error::WriteError`] unless serving the request already failed.
    pub async fn handle_connection<S>(stream: S, handler: HandlerFn, config: &ServerConfig) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (mut reader, write_half) = tokio::io::split(stream);
        let write_half: Box<dyn AsyncWrite + Send + Unpin> = Box::new(write_half);
        let mut writer: ResponseWriter = Writer::new(write_half);

        let result = Self::respond(&mut reader, &mut writer, &handler, config).await;

        if !config.close_delay.is_zero() {
            tokio::time::sleep(config.close_delay).await;
        }
        match writer.shutdown().await {
            Err(e) if result.is_ok() => Err(Error::WriteError(e)),
            Err(e) => {
                debug!("Error closing connection: {e}");
                result
            }
            Ok(()) => result,
        }
    }

    async fn respond<R>(
        reader: &mut R,
        writer: &mut ResponseWriter,
        handler: &HandlerFn,
        config: &ServerConfig,
    ) -> Result<(), Error>
    where
        R: AsyncRead + Unpin,
    {
        let request = match Request::from_reader_with_capacity(reader, config.read_buffer_size).await {
            Ok(request) => request,
            Err(e) => {
                let status = match e {
                    ParserError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_REQUEST,
                };
                Self::write_error_response(writer, status).await;
                return Err(Error::ParseError(e));
            }
        };

        let Some(line) = request.request_line.as_ref() else {
            Self::write_error_response(writer, StatusCode::BAD_REQUEST).await;
            return Err(Error::IncompleteRequest);
        };
        debug!("{method} {target}", method = line.method, target = line.request_target);

        if let Err(e) = handler(writer, &request).await {
            Self::write_error_response(writer, e.status).await;
            return Err(Error::HandlerError(e));
        }

        Ok(())
    }

    /// Best-effort error response. Failures are logged, never returned.
    async fn write_error_response(writer: &mut ResponseWriter, status: StatusCode) {
        if let Err(e) = writer.write_error(status).await {
            warn!("Error writing {status} response: {e}");
        }
    }
}

impl Drop for HttpServer {
    fn drop(&mut self) {
        self.close();
    }
}
