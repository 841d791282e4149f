//! Stdio server loop: one JSON-RPC frame per line in, one per line out.

use std::io;
use std::sync::Arc;

use finance_mcp_lib::Config;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::protocol::{
    parse_request, Request, Response, RpcError, INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND,
    PARSE_ERROR,
};
use crate::tools::{CallError, Tools};

/// Protocol revision offered when the client does not ask for one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2025-06-18";

pub struct Server {
    name: String,
    title: String,
    version: String,
    tools: Tools,
}

impl Server {
    pub fn new(config: &Config, tools: Tools) -> Self {
        Self {
            name: config.name.clone(),
            title: config.title.clone(),
            version: config.version.clone(),
            tools,
        }
    }

    /// Reads frames until EOF. Each request runs on its own task; a single
    /// writer task owns `writer`, so responses never interleave. Returns the
    /// writer once every in-flight request has been answered.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> io::Result<W>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(frame) = rx.recv().await {
                writer.write_all(frame.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<W, io::Error>(writer)
        });

        let mut tasks = JoinSet::new();
        let mut reader = reader;
        let mut buf = Vec::new();
        while reader.read_until(b'\n', &mut buf).await? > 0 {
            let line = match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Rejecting frame that is not UTF-8: {}", e);
                    let error = RpcError::new(PARSE_ERROR, "frame is not valid UTF-8");
                    send_response(&tx, &Response::failure(Value::Null, error));
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let server = Arc::clone(&self);
            let tx = tx.clone();
            tasks.spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    send_response(&tx, &response);
                }
            });
        }
        tracing::debug!("Input closed, waiting for {} requests", tasks.len());

        drop(tx);
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Request task failed: {}", e);
            }
        }
        writer_task
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    /// Handles one frame. Notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<Response> {
        let request = match parse_request(line) {
            Ok(request) => request,
            Err(response) => return Some(response),
        };

        if request.is_notification() {
            tracing::debug!("Notification {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        Some(match self.dispatch(request).await {
            Ok(result) => Response::success(id, result),
            Err(error) => Response::failure(id, error),
        })
    }

    async fn dispatch(&self, request: Request) -> Result<Value, RpcError> {
        match request.method.as_str() {
            "initialize" => Ok(self.initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => self
                .tools
                .list()
                .map_err(|e| RpcError::new(INTERNAL_ERROR, e.to_string())),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(RpcError::new(
                METHOD_NOT_FOUND,
                format!("method not found: {}", other),
            )),
        }
    }

    fn initialize(&self, params: Option<&Value>) -> Value {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);
        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": { "listChanged": false } },
            "serverInfo": {
                "name": self.name,
                "title": self.title,
                "version": self.version,
            }
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let mut params = params.unwrap_or(Value::Null);
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| RpcError::new(INVALID_PARAMS, "tools/call requires a tool name"))?;
        let arguments = params
            .get_mut("arguments")
            .map(Value::take)
            .unwrap_or_else(|| json!({}));

        match self.tools.call(&name, arguments).await {
            Ok(output) => Ok(json!({
                "content": [{ "type": "text", "text": output.to_string() }],
                "structuredContent": output,
                "isError": false,
            })),
            Err(CallError::Tool(e)) => {
                tracing::warn!("Tool {} failed: {}", name, e);
                Ok(json!({
                    "content": [{ "type": "text", "text": e.to_string() }],
                    "isError": true,
                }))
            }
            Err(CallError::UnknownTool(tool)) => Err(RpcError::new(
                INVALID_PARAMS,
                format!("unknown tool: {}", tool),
            )),
            Err(CallError::InvalidArguments(msg)) => Err(RpcError::new(
                INVALID_PARAMS,
                format!("invalid arguments for {}: {}", name, msg),
            )),
        }
    }
}

fn send_response(tx: &mpsc::UnboundedSender<String>, response: &Response) {
    match serde_json::to_string(response) {
        Ok(frame) => {
            if tx.send(frame).is_err() {
                tracing::warn!("Writer closed, dropping response");
            }
        }
        Err(e) => tracing::error!("Failed to serialize response: {}", e),
    }
}
