//! Deterministic task execution for simulation agents.
//!
//! A task names the tool that carries it out; the agent resolves that tool in
//! its registry and invokes it with the task's arguments.

use std::sync::Arc;

use mirror_core::{AgentError, AgentProfile, Task};
use mirror_tools::ToolRegistry;
use tracing::{debug, info};

/// An agent: a profile plus the tools it is allowed to use.
pub struct Agent {
    profile: AgentProfile,
    tools: Arc<ToolRegistry>,
}

impl Agent {
    /// Creates an agent with the given profile and tool registry.
    pub fn new(profile: AgentProfile, tools: ToolRegistry) -> Self {
        Self { profile, tools: Arc::new(tools) }
    }

    /// Returns the agent's profile.
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Executes a task by invoking its tool and returns the tool output.
    ///
    /// Tool failures propagate to the caller; there is no retry or recovery.
    pub async fn execute(&self, task: &Task) -> Result<String, AgentError> {
        if self.profile.verbose {
            info!("╔══════════════════════════════════════════════════════════════");
            info!("║ AGENT: {}", self.profile.role);
            info!("║ TASK: {}", task.description);
            info!("║ Tool: {}", task.tool);
        }

        let tool = self
            .tools
            .get(&task.tool)
            .ok_or_else(|| AgentError::UnknownTool(task.tool.clone()))?;

        let start = std::time::Instant::now();
        let output = tool
            .execute(task.arguments.clone())
            .await
            .map_err(|e| AgentError::ToolFailed(e.to_string()))?;

        if self.profile.verbose {
            info!("║ ✓ Completed in {:?}", start.elapsed());
            if !task.expected_output.is_empty() {
                info!("║ Expected: {}", task.expected_output);
            }
            info!("║ Output: {}", output);
            info!("╚══════════════════════════════════════════════════════════════");
        } else {
            debug!("Task '{}' completed via {}", task.description, task.tool);
        }

        Ok(output)
    }
}
