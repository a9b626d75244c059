/// Assembles the full generation prompt: persona instruction, the policy
/// context verbatim, the user request verbatim, and the trailing cue the
/// model completes after.
pub(crate) fn build_prompt(user_request: &str, policy_context: &str) -> String {
    format!(
        "You are an expert network engineer assistant. Your task is to generate a network device\n\
configuration based on the user's request, ensuring it adheres to the provided\n\
network policy. Provide the configuration in a clean, human-readable text format,\n\
without any extra conversation.\n\
\n\
Network Policy:\n\
{policy_context}\n\
\n\
User Request:\n\
{user_request}\n\
\n\
Generated Configuration:\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_policy_and_request_verbatim() {
        let prompt = build_prompt(
            "Configure VLAN 10 with gateway 10.0.10.1",
            "Context: deny all inbound except 443.",
        );
        assert!(prompt.contains("Network Policy:\nContext: deny all inbound except 443."));
        assert!(prompt.contains("User Request:\nConfigure VLAN 10 with gateway 10.0.10.1"));
    }

    #[test]
    fn prompt_opens_with_persona_and_ends_with_cue() {
        let prompt = build_prompt("req", "ctx");
        assert!(prompt.starts_with("You are an expert network engineer assistant."));
        assert!(prompt.ends_with("Generated Configuration:\n"));
    }

    #[test]
    fn prompt_passes_empty_request_through_unchanged() {
        // Empty submissions are blocked by the CLI layer, not here.
        let prompt = build_prompt("", "ctx");
        assert!(prompt.contains("User Request:\n\n"));
    }
}
