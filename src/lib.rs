//! ConfGen — AI Network Configuration Assistant
//!
//! This crate turns natural-language requests into network device
//! configurations constrained by a selected policy:
//! - Static policy catalog acting as the generation context store
//! - Prompt assembly combining policy text and user request
//! - Gemini generateContent invocation over HTTPS
//! - Error handling that always yields a displayable string

pub mod ai;
pub mod app;
pub mod cli;
pub mod logging;
pub mod policies;

mod command_handlers;

pub use ai::{
    generate_configuration, generate_with_settings, run_ai_check, run_ai_check_with,
    AiCheckReport, AiSettings, GenerationError, NO_CONFIGURATION_FALLBACK,
};
pub use app::{execute_command, execute_command_with_context, run, AppContext, OutputHook};
pub use cli::{parse_cli_args, CliCommand};
pub use policies::{find_policy, policy_names, NetworkPolicy, NETWORK_POLICIES};
