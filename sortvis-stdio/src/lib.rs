#![deny(missing_docs)]
//! Line-delimited JSON transport for sortvis.
//!
//! Reads one request per line, drives a [`Coordinator`], and writes one
//! JSON object per line: run notifications (`algorithm_step`,
//! `algorithm_complete`, `algorithm_stopped`, `error`) interleaved with
//! direct [`Reply`] lines (`algorithms`, `stop_ack`, `start_rejected`,
//! `request_error`).
//!
//! ```text
//! → {"event":"execute_algorithm","name":"Bubble Sort","input":[3,1,2]}
//! ← {"event":"algorithm_step","data":{"current_array":[1,3,2],"comparisons":[0,1],"swapped":true}}
//! ...
//! ← {"event":"algorithm_complete","data":{"message":"Algorithm execution completed"}}
//! ```

mod config;
mod reply;
mod sink;

pub use config::{
    MAX_COUNTING_RANGE_VAR, STEP_DELAY_VAR, config_from_env, config_from_vars, init_tracing,
};
pub use reply::Reply;

use sink::LineSink;
use sortvis_algorithms::Registry;
use sortvis_core::{CoordError, Request};
use sortvis_coord::{Coordinator, CoordinatorConfig, StopAck};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Errors that end a session.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StdioError {
    /// Reading requests or writing lines failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Answer one request line.
///
/// Run output goes to the coordinator's sink; the return value is the
/// direct reply, if the request has one. Blank lines are ignored.
pub async fn handle_line(coordinator: &Coordinator, line: &str) -> Option<Reply> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "sortvis.stdio.parse_failed");
            return Some(Reply::RequestError {
                message: CoordError::from(err).notification_message(),
            });
        }
    };
    tracing::debug!(request = ?request, "sortvis.stdio.request");

    match request {
        Request::ExecuteAlgorithm { name, input } => {
            let name = name.unwrap_or_default();
            match coordinator.start(&name, &input).await {
                Ok(_) => None,
                Err(err @ CoordError::Busy(_)) => Some(Reply::StartRejected {
                    message: err.notification_message(),
                }),
                // Already reported on the notification stream.
                Err(_) => None,
            }
        }
        Request::StopAlgorithm => Some(Reply::StopAck {
            algorithm: match coordinator.stop() {
                StopAck::Requested { algorithm } => Some(algorithm),
                StopAck::Idle => None,
            },
        }),
        Request::ListAlgorithms => Some(Reply::Algorithms(coordinator.list_algorithms())),
        _ => None,
    }
}

/// Serve one session: read requests from `reader` until EOF, let the last
/// run finish, then return the writer.
pub async fn serve<R, W>(reader: R, writer: W, config: CoordinatorConfig) -> Result<W, StdioError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, rx) = mpsc::channel::<String>(config.channel_capacity.max(1));
    let coordinator = Coordinator::new(
        Registry::builtin(),
        Arc::new(LineSink::new(tx.clone())),
        config,
    );
    tracing::info!("sortvis.stdio.session_start");

    let (read, written) = tokio::join!(read_requests(reader, coordinator, tx), write_lines(writer, rx));
    read?;
    let writer = written?;
    tracing::info!("sortvis.stdio.session_end");
    Ok(writer)
}

async fn read_requests<R>(
    reader: R,
    coordinator: Coordinator,
    tx: mpsc::Sender<String>,
) -> Result<(), StdioError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let result = loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break Ok(()),
            Err(err) => break Err(StdioError::from(err)),
        };
        let Some(reply) = handle_line(&coordinator, &line).await else {
            continue;
        };
        match serde_json::to_string(&reply) {
            Ok(text) => {
                if tx.send(text).await.is_err() {
                    tracing::warn!("sortvis.stdio.writer_closed");
                    break Ok(());
                }
            }
            Err(err) => tracing::warn!(error = %err, "sortvis.stdio.encode_failed"),
        }
    };
    // Dropping the coordinator and sender after the last run lets the
    // writer drain and finish.
    coordinator.wait_idle().await;
    result
}

async fn write_lines<W>(mut writer: W, mut rx: mpsc::Receiver<String>) -> Result<W, StdioError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(writer)
}
