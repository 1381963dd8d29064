use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.0";
const SERVER: &str = "Bot";

/// Serializes the status line and headers of `resp`.
pub fn serialize_head(resp: &Response) -> String {
    let mut head = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );

    if let Some(content) = &resp.content {
        if let Some(content_type) = content.content_type {
            head.push_str("Content-Type: ");
            head.push_str(content_type);
            head.push_str("\r\n");
        }
        head.push_str(&format!("Content-Length: {}\r\n", content.length));
    }

    head.push_str(&format!("Server: {}\r\n", SERVER));
    head.push_str("\r\n");
    head
}

/// Serializes the whole response, body included.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let head = serialize_head(resp);
    let mut buf = Vec::with_capacity(head.len() + resp.body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(&resp.body);
    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        debug!(head = %serialize_head(response), "Response");
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the response, flushes, then shuts down the write side.
    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        stream.shutdown().await?;
        Ok(())
    }
}
