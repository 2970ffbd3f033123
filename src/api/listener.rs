//! Legacy rtjc listener.
//!
//! Accepts one TCP connection at a time, reads exactly one line from it and
//! relays it to the chat, then enriches it with summaries when it carries the
//! summary marker.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::core::pinned::PinClassifier;
use crate::errors::RelayError;
use crate::telegram::Submitter;
use crate::worker::{EnrichmentRouter, RateLimitedDispatcher};

/// How long a client may take to send its line.
pub const LINE_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest accepted notification line, newline included.
pub const MAX_LINE_BYTES: u64 = 64 * 1024;

pub struct RtjcListener {
    port: u16,
    read_timeout: Duration,
    pins: PinClassifier,
    submitter: Arc<dyn Submitter>,
    router: EnrichmentRouter,
    dispatcher: RateLimitedDispatcher,
}

impl RtjcListener {
    #[must_use]
    pub fn new(
        port: u16,
        pins: PinClassifier,
        submitter: Arc<dyn Submitter>,
        router: EnrichmentRouter,
    ) -> Self {
        let dispatcher = RateLimitedDispatcher::new(Arc::clone(&submitter));
        Self {
            port,
            read_timeout: LINE_READ_TIMEOUT,
            pins,
            submitter,
            router,
            dispatcher,
        }
    }

    #[must_use]
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Binds the configured port and serves forever. Only a bind failure returns.
    pub async fn listen(&self) -> Result<(), RelayError> {
        let listener = TcpListener::bind(("0.0.0.0", self.port))
            .await
            .map_err(|e| RelayError::TransportError(format!("can't listen on {}: {}", self.port, e)))?;
        info!("rtjc listener on port {}", self.port);
        self.serve(listener).await
    }

    /// Serves connections from an already bound listener, one at a time.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), RelayError> {
        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    let span = info_span!(
                        "connection",
                        correlation_id = %Uuid::new_v4(),
                        peer = %peer
                    );
                    self.handle_connection(stream, peer).instrument(span).await;
                }
                Err(e) => {
                    warn!("Can't accept, {}", e);
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    async fn handle_connection(&self, stream: TcpStream, peer: SocketAddr) {
        debug!("Accepted connection from {}", peer);
        let mut reader = BufReader::new(stream).take(MAX_LINE_BYTES);
        let mut line = String::new();

        match tokio::time::timeout(self.read_timeout, reader.read_line(&mut line)).await {
            Ok(Ok(_)) if line.ends_with('\n') => self.process_line(&line).await,
            Ok(Ok(n)) if n as u64 >= MAX_LINE_BYTES => {
                warn!("Can't read message, line exceeds {} bytes", MAX_LINE_BYTES);
            }
            Ok(Ok(_)) => warn!("Can't read message, connection closed before end of line"),
            Ok(Err(e)) => warn!("Can't read message, {}", e),
            Err(_) => warn!(
                "Can't read message, no line within {}s",
                self.read_timeout.as_secs_f32()
            ),
        }
        // stream drops here, closing the connection
    }

    /// Relays `line` to the chat, then dispatches its enrichment messages.
    pub async fn process_line(&self, line: &str) {
        let (pin, text) = self.pins.classify(line);
        if let Err(e) = self.submitter.submit(&text, pin).await {
            warn!("Can't send message, {}", e);
        }

        match self.router.route(&text).await {
            Ok(messages) => {
                let sent = self.dispatcher.dispatch(messages).await;
                if sent > 0 {
                    info!("Sent {} summary messages", sent);
                }
            }
            Err(e) => warn!("Can't get summary, {}", e),
        }
    }
}
