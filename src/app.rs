use std::sync::Arc;

use anyhow::Result;

use crate::ai::AiSettings;
use crate::cli::{parse_cli_args, usage_text, version_text, CliCommand};
use crate::command_handlers::{handle_check, handle_generate, handle_policies};

/// Sink for user-facing output lines. Tests substitute a collector.
pub type OutputHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Execution context for command dispatch: settings plus the output sink.
/// Non-CLI entrypoints and tests inject their own.
pub struct AppContext {
    pub settings: AiSettings,
    output_hook: OutputHook,
}

impl AppContext {
    pub fn from_env() -> Self {
        Self {
            settings: AiSettings::from_env(),
            output_hook: Arc::new(|line| println!("{}", line)),
        }
    }

    pub fn with_ai_settings(mut self, settings: AiSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_output_hook(mut self, hook: OutputHook) -> Self {
        self.output_hook = hook;
        self
    }

    pub(crate) fn emit(&self, line: &str) {
        (self.output_hook)(line);
    }
}

/// Run the app by parsing CLI-style args and dispatching the command.
pub async fn run<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let command = parse_cli_args(args)?;
    execute_command(command).await
}

/// Execute a pre-parsed command against the process environment.
pub async fn execute_command(command: CliCommand) -> Result<()> {
    execute_command_with_context(command, &AppContext::from_env()).await
}

/// Execute a pre-parsed command. This is reusable for non-CLI entrypoints.
pub async fn execute_command_with_context(command: CliCommand, context: &AppContext) -> Result<()> {
    match command {
        CliCommand::Help => {
            context.emit(&usage_text());
            Ok(())
        }
        CliCommand::Version => {
            context.emit(&version_text());
            Ok(())
        }
        CliCommand::Policies => handle_policies(context).await,
        CliCommand::Check => handle_check(context).await,
        CliCommand::Generate { policy, request } => {
            handle_generate(context, &policy, &request).await
        }
    }
}
