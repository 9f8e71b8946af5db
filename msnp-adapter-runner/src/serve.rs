//! Newline-delimited JSON-RPC over a byte stream

use anyhow::Result;
use msnp_adapter::adapter::Adapter;
use msnp_adapter_protocol::{RpcError, RpcRequest, RpcResponse};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::dispatch::Dispatcher;

/// Answer requests from `reader` on `writer` until end of input.
///
/// Each input line is one request and yields exactly one response line.
/// Returns the number of requests answered.
pub async fn serve<A, R, W>(
    dispatcher: &Dispatcher<A>,
    mut reader: R,
    mut writer: W,
) -> Result<u64>
where
    A: Adapter,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut answered = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }

        debug!("Received RPC: {}", String::from_utf8_lossy(line));

        let response = match serde_json::from_slice::<RpcRequest>(line) {
            Ok(request) => dispatcher.dispatch(request).await,
            Err(e) => {
                warn!("Unparseable request: {}", e);
                RpcResponse::error(RpcError::parse_error().with_data(e.to_string()), 0)
            }
        };

        let mut response_json = serde_json::to_string(&response)?;
        debug!("Sending RPC: {}", response_json);
        response_json.push('\n');

        writer.write_all(response_json.as_bytes()).await?;
        writer.flush().await?;
        answered += 1;
    }

    Ok(answered)
}
