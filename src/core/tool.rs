use async_trait::async_trait;
use thiserror::Error;

use crate::core::error::ArgumentError;
use crate::source::DataSourceError;

/// Per-call tool failure. Converted into an error-flagged result at the
/// dispatch boundary so the server keeps serving.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Source(#[from] DataSourceError),
}

/// A named, schema-described callable operation exposed to the peer.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
    async fn call(&self, arguments: &serde_json::Value) -> Result<String, ToolError>;
}
