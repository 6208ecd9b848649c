//! Core domain types and error definitions.
//!
//! This crate defines the types shared across the simulator: errors, the
//! state payload exchanged with the kernel, agent profiles, and tasks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during agent operations.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Tool execution failed: {0}")]
    ToolFailed(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Sync state of a simulated node at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Active,
    Drifted,
    Synced,
}

/// State snapshot submitted to the kernel on every sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePayload {
    pub id: Uuid,
    pub status: SyncStatus,
    pub data: Value,
    pub step: u64,
}

impl StatePayload {
    /// Creates a payload for the given step with a fresh id.
    pub fn new(status: SyncStatus, data: Value, step: u64) -> Self {
        Self { id: Uuid::new_v4(), status, data, step }
    }
}

/// Identity and disposition of an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default)]
    pub verbose: bool,
}

/// A unit of work: which tool carries it out, with what arguments, and what
/// the caller expects back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub tool: String,
    #[serde(default)]
    pub arguments: Value,
    #[serde(default)]
    pub expected_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_serializes_with_required_keys() {
        let payload = StatePayload::new(SyncStatus::Active, json!({"node": "local"}), 1);
        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        for key in ["id", "status", "data", "step"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["status"], "active");
        assert_eq!(obj["step"], 1);
    }

    #[test]
    fn payloads_get_distinct_ids() {
        let a = StatePayload::new(SyncStatus::Synced, Value::Null, 1);
        let b = StatePayload::new(SyncStatus::Synced, Value::Null, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn task_arguments_default_to_null() {
        let task: Task = serde_json::from_value(json!({
            "description": "sync",
            "tool": "kernel_state_sync"
        }))
        .unwrap();

        assert_eq!(task.arguments, Value::Null);
        assert!(task.expected_output.is_empty());
    }
}
