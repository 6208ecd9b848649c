use anyhow::Result;
use mirror_core::{AgentProfile, StatePayload, SyncStatus, Task};
use mirror_engine::Agent;
use mirror_tools::ToolRegistry;
use serde_json::json;
use tracing::{info, warn};

/// Number of simulation steps to replay against the kernel.
const SIM_STEPS: u64 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let tools = ToolRegistry::with_defaults();
    info!("Registered tools: {:?}", tools.tool_names());

    let agent = Agent::new(
        AgentProfile {
            role: "Infrastructure Shadow Controller".into(),
            goal: "Maintain 100% state parity between local and cloud nodes.".into(),
            backstory: "You are an autonomous auditor for Synthetic 2026 Workloads.".into(),
            verbose: true,
        },
        tools,
    );

    info!("Agent online: {}", agent.profile().role);

    for step in 1..=SIM_STEPS {
        let payload = StatePayload::new(status_for(step), step_data(step), step);

        let task = Task {
            description: "Analyze the current simulation step and sync with the kernel.".into(),
            tool: "kernel_state_sync".into(),
            arguments: serde_json::to_value(&payload)?,
            expected_output: "A '200 OK' synchronization confirmation.".into(),
        };

        let code = agent.execute(&task).await?;
        if code == "200" {
            info!("Step {}: kernel confirmed sync", step);
        } else {
            warn!("Step {}: kernel answered {}", step, code);
        }
    }

    Ok(())
}

/// Status progression over the run: the node starts active, drifts, then
/// converges on the final step.
fn status_for(step: u64) -> SyncStatus {
    match step {
        1 => SyncStatus::Active,
        2 => SyncStatus::Drifted,
        _ => SyncStatus::Synced,
    }
}

fn step_data(step: u64) -> serde_json::Value {
    json!({
        "node": "local",
        "peer": "cloud",
        "pending_ops": SIM_STEPS - step,
    })
}
