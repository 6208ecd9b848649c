use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use mirror_core::StatePayload;
use mirror_kernel::KernelClient;

use crate::{Tool, ToolError};

/// Kernel state sync tool - submits a state snapshot to the mirror kernel
pub struct KernelStateSyncTool {
    client: KernelClient,
}

impl KernelStateSyncTool {
    pub fn new(client: KernelClient) -> Self {
        Self { client }
    }

    /// Builds the tool against the kernel URL from the environment.
    pub fn from_env() -> Self {
        Self::new(KernelClient::from_env())
    }
}

#[async_trait]
impl Tool for KernelStateSyncTool {
    fn name(&self) -> &str {
        "kernel_state_sync"
    }

    fn description(&self) -> &str {
        "Synchronizes agent logic with the high-fidelity state engine."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Unique id of this state snapshot (UUID)"
                },
                "status": {
                    "type": "string",
                    "enum": ["active", "drifted", "synced"],
                    "description": "Sync status of the node at this step"
                },
                "data": {
                    "type": "object",
                    "description": "Opaque step data forwarded to the kernel"
                },
                "step": {
                    "type": "integer",
                    "description": "Simulation step counter"
                }
            },
            "required": ["id", "status", "data", "step"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError> {
        let payload: StatePayload =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let code = self.client.sync_state(&payload).await?;
        info!("Kernel answered {} for step {}", code, payload.step);

        Ok(code.to_string())
    }
}
