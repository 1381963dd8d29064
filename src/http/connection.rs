use std::future::poll_fn;
use std::io;
use std::pin::Pin;
use std::task::Poll;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, ReadBuf};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::ServeError;
use crate::files::FileStore;
use crate::http::parser::{ParseError, find_headers_end, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

/// Largest header block accepted before the terminator must have been seen.
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// Handles exactly one request on one accepted connection.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    store: FileStore,
    read_timeout: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingRequest,
    Dispatching(Request),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, store: FileStore, read_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            store,
            read_timeout,
            state: ConnectionState::AwaitingRequest,
        }
    }

    /// Drives the connection from the first read to the closed state.
    ///
    /// Errors are only returned when the response itself could not be
    /// written.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitingRequest => match self.read_request().await {
                    Ok(request) => ConnectionState::Dispatching(request),
                    Err(err) => {
                        warn!(error = %err, "Rejected request");
                        Self::respond(err.into_response())
                    }
                },

                ConnectionState::Dispatching(request) => {
                    let response = match self.store.dispatch(&request).await {
                        Ok(response) => response,
                        Err(err) => {
                            warn!(
                                request = request.request_line(),
                                error = %err,
                                "Request failed"
                            );
                            err.into_response()
                        }
                    };

                    info!(
                        request = request.request_line(),
                        status = response.status.as_u16(),
                        "Request handled"
                    );
                    Self::respond(response)
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    fn respond(response: Response) -> ConnectionState {
        ConnectionState::Responding(ResponseWriter::new(&response))
    }

    /// Reads until the header terminator, then takes whatever body bytes
    /// are already available.
    ///
    /// The read deadline covers the whole header, not each read.
    pub async fn read_request(&mut self) -> Result<Request, ServeError> {
        match timeout(self.read_timeout, self.read_head()).await {
            Ok(head) => head?,
            Err(_) => {
                return Err(ServeError::MalformedRequest(
                    "read deadline elapsed before header terminator".to_string(),
                ));
            }
        }

        self.read_available().await?;

        let request = parse_http_request(&self.buffer)?;
        debug!(head = %request.head, body = request.body.len(), "Request");
        Ok(request)
    }

    async fn read_head(&mut self) -> Result<(), ServeError> {
        while find_headers_end(&self.buffer).is_none() {
            if self.buffer.len() >= MAX_HEAD_BYTES {
                return Err(ServeError::MalformedRequest(format!(
                    "no header terminator within {} bytes",
                    MAX_HEAD_BYTES
                )));
            }

            self.buffer.reserve(READ_CHUNK);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed before the terminator
                return Err(ParseError::Incomplete.into());
            }
        }

        Ok(())
    }

    /// Appends bytes that can be read without waiting.
    async fn read_available(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let read = poll_fn(|cx| {
                let mut buf = ReadBuf::new(&mut chunk);
                match Pin::new(&mut self.stream).poll_read(cx, &mut buf) {
                    Poll::Ready(Ok(())) => Poll::Ready(Ok(Some(buf.filled().len()))),
                    Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
                    Poll::Pending => Poll::Ready(Ok(None)),
                }
            })
            .await?;

            match read {
                Some(0) | None => return Ok(()),
                Some(n) => self.buffer.extend_from_slice(&chunk[..n]),
            }
        }
    }
}
