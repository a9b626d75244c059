use anyhow::{Context, Result};

use crate::ai::{generate_with_settings, run_ai_check_with};
use crate::app::AppContext;
use crate::policies::{find_policy, policy_names, NETWORK_POLICIES};

pub(crate) async fn handle_policies(context: &AppContext) -> Result<()> {
    for policy in NETWORK_POLICIES {
        context.emit(policy.name);
        context.emit(&format!("  {}", policy.context));
        context.emit("");
    }
    Ok(())
}

pub(crate) async fn handle_check(context: &AppContext) -> Result<()> {
    let report = run_ai_check_with(&context.settings);
    context.emit(
        &serde_json::to_string_pretty(&report).context("Failed to serialize check report")?,
    );
    Ok(())
}

pub(crate) async fn handle_generate(
    context: &AppContext,
    policy_name: &str,
    request: &str,
) -> Result<()> {
    let policy = find_policy(policy_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown policy '{}'. Available policies: {}",
            policy_name,
            policy_names().join(", ")
        )
    })?;

    tracing::info!("Generating configuration under policy '{}'", policy.name);

    let configuration = generate_with_settings(&context.settings, request, policy.context).await;

    context.emit("Generated Configuration:");
    context.emit(&configuration);
    context.emit("");
    // Simulated steps; the status lines are static informational copy.
    context.emit("Verification & Deployment Simulation");
    context.emit("✅ Configuration verified! It is consistent with the selected policy.");
    context.emit(
        "🚀 The configuration is now ready for safe deployment to a virtual device for final testing.",
    );
    Ok(())
}
